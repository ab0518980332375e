//! Named stream shapes.
//!
//! The plant's historical convention (component 1 is mercury,
//! component 2 the carrier, component 3 a solid) is made explicit
//! here: every unit operation consumes and produces one of these
//! named-field records instead of indexing into a component list.
//! Constructors reject components of the wrong species, so a
//! mis-wired flowsheet fails at the connection, not deep inside an
//! energy balance.

use crate::common::check_temperature;
use crate::error::{OpError, OpResult};
use hg_core::units::Temperature;
use hg_props::Species;
use hg_stream::{Component, Stream, StreamResult};

fn expect_species(c: &Component, species: Species, what: &'static str) -> OpResult<()> {
    if c.species() == species {
        Ok(())
    } else {
        Err(OpError::Shape { what })
    }
}

fn is_solid_host(species: Species) -> bool {
    matches!(species, Species::Powder | Species::Glass | Species::Al)
}

/// Solid-bearing furnace feed: mercury dispersed in a host solid,
/// optionally with a second solid constituent.
#[derive(Debug, Clone)]
pub struct FurnaceFeed {
    pub temperature: Temperature,
    pub hg: Component,
    pub host: Component,
    pub extra: Option<Component>,
}

impl FurnaceFeed {
    pub fn new(
        temperature: Temperature,
        hg: Component,
        host: Component,
        extra: Option<Component>,
    ) -> OpResult<Self> {
        check_temperature(temperature, "feed temperature")?;
        expect_species(&hg, Species::Hg, "furnace feed component 1 must be mercury")?;
        if !is_solid_host(host.species()) {
            return Err(OpError::Shape {
                what: "furnace feed host must be a solid species",
            });
        }
        if let Some(c) = &extra {
            if !is_solid_host(c.species()) {
                return Err(OpError::Shape {
                    what: "furnace feed extra constituent must be a solid species",
                });
            }
        }
        Ok(Self {
            temperature,
            hg,
            host,
            extra,
        })
    }

    pub fn stream(&self) -> StreamResult<Stream> {
        let mut comps = vec![self.hg.clone(), self.host.clone()];
        comps.extend(self.extra.clone());
        Stream::new(self.temperature, comps)
    }
}

/// Carrier-gas supply or cleaned carrier exit (nitrogen only).
#[derive(Debug, Clone)]
pub struct CarrierGas {
    pub temperature: Temperature,
    pub n2: Component,
}

impl CarrierGas {
    pub fn new(temperature: Temperature, n2: Component) -> OpResult<Self> {
        check_temperature(temperature, "carrier temperature")?;
        expect_species(&n2, Species::N2, "carrier stream must be nitrogen")?;
        Ok(Self { temperature, n2 })
    }

    pub fn stream(&self) -> StreamResult<Stream> {
        Stream::new(self.temperature, vec![self.n2.clone()])
    }
}

/// Mercury vapor in carrier gas (furnace exit, merge, condenser inlet
/// and vent).
#[derive(Debug, Clone)]
pub struct VaporStream {
    pub temperature: Temperature,
    pub hg: Component,
    pub n2: Component,
}

impl VaporStream {
    pub fn new(temperature: Temperature, hg: Component, n2: Component) -> OpResult<Self> {
        check_temperature(temperature, "vapor stream temperature")?;
        expect_species(&hg, Species::Hg, "vapor stream component 1 must be mercury")?;
        expect_species(&n2, Species::N2, "vapor stream component 2 must be nitrogen")?;
        Ok(Self {
            temperature,
            hg,
            n2,
        })
    }

    pub fn stream(&self) -> StreamResult<Stream> {
        Stream::new(self.temperature, vec![self.hg.clone(), self.n2.clone()])
    }
}

/// Retort residue: unvaporized mercury plus the host solids.
#[derive(Debug, Clone)]
pub struct SolidResidue {
    pub temperature: Temperature,
    pub hg: Component,
    pub solids: Vec<Component>,
}

impl SolidResidue {
    pub fn new(temperature: Temperature, hg: Component, solids: Vec<Component>) -> OpResult<Self> {
        check_temperature(temperature, "residue temperature")?;
        expect_species(&hg, Species::Hg, "residue component 1 must be mercury")?;
        if solids.is_empty() || solids.iter().any(|c| !is_solid_host(c.species())) {
            return Err(OpError::Shape {
                what: "residue solids must be non-empty solid species",
            });
        }
        Ok(Self {
            temperature,
            hg,
            solids,
        })
    }

    pub fn stream(&self) -> StreamResult<Stream> {
        let mut comps = vec![self.hg.clone()];
        comps.extend(self.solids.iter().cloned());
        Stream::new(self.temperature, comps)
    }
}

/// Single-component mercury stream: condensed product or carbon-bed
/// collection. Phase distinguishes the two.
#[derive(Debug, Clone)]
pub struct MercuryStream {
    pub temperature: Temperature,
    pub hg: Component,
}

impl MercuryStream {
    pub fn new(temperature: Temperature, hg: Component) -> OpResult<Self> {
        check_temperature(temperature, "mercury stream temperature")?;
        expect_species(&hg, Species::Hg, "mercury stream must be mercury only")?;
        Ok(Self { temperature, hg })
    }

    pub fn stream(&self) -> StreamResult<Stream> {
        Stream::new(self.temperature, vec![self.hg.clone()])
    }
}

/// Chiller-loop coolant at supply or return temperature.
#[derive(Debug, Clone)]
pub struct CoolantStream {
    pub temperature: Temperature,
    pub coolant: Component,
}

impl CoolantStream {
    pub fn new(temperature: Temperature, coolant: Component) -> OpResult<Self> {
        check_temperature(temperature, "coolant temperature")?;
        Ok(Self {
            temperature,
            coolant,
        })
    }

    pub fn stream(&self) -> StreamResult<Stream> {
        Stream::new(self.temperature, vec![self.coolant.clone()])
    }
}
