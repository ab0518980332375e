//! Plant driver: wiring, execution, plant-wide closure.

use crate::error::FlowsheetResult;
use hg_core::units::{Energy, Mass, Power, j, k, kg, kpa, w};
use hg_ops::{
    CarbonFilter, CarrierGas, Chiller, Condenser, Furnace, FurnaceFeed, merge_streams,
};
use hg_project::ProcessConfig;
use hg_props::heat_capacity::CP_N2;
use hg_props::{ReferenceState, Species};
use hg_stream::{Component, Phase, Stream, energy_check, mass_check};
use tracing::info;

/// One equipment item's per-cycle duty and time-averaged power.
#[derive(Debug, Clone)]
pub struct EquipmentDuty {
    pub name: String,
    pub duty: Energy,
    pub power: Power,
}

/// Everything a run produces: labeled streams in flow order,
/// equipment duties, and headline recovery figures.
#[derive(Debug, Clone)]
pub struct PlantReport {
    pub streams: Vec<Stream>,
    pub equipment: Vec<EquipmentDuty>,
    pub hg_feed: Mass,
    pub hg_condensed: Mass,
    pub hg_captured: Mass,
    pub hg_in_residue: Mass,
    pub coolant_mass: Mass,
    /// Fraction of feed mercury leaving as product or carbon capture.
    pub recovery_fraction: f64,
    /// Total heat delivered by both furnaces per cycle.
    pub heat_input: Energy,
}

/// The fixed plant topology, parameterized by one validated config.
pub struct Flowsheet {
    config: ProcessConfig,
}

impl Flowsheet {
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Execute one steady-state cycle.
    pub fn run(&self) -> FlowsheetResult<PlantReport> {
        let c = &self.config;
        let reference = ReferenceState::new(k(c.reference.t0_k), 0.0);
        let cycle = c.cycle_time_s;

        // Feed split: mercury partitions between the powder retort
        // and the glass/aluminium retort
        let t_feed = k(c.feed.inlet_t_k);
        let hg_a = kg(c.feed.hg_kg * c.feed.hg_to_powder_fraction);
        let hg_b = kg(c.feed.hg_kg - hg_a.value);

        let solid =
            |species: Species, mass: Mass| -> FlowsheetResult<Component> {
                let h = species.absolute_h(reference, t_feed)?;
                Ok(Component::new(species, Phase::Solid, mass, h)?)
            };

        let feed_a = FurnaceFeed::new(
            t_feed,
            solid(Species::Hg, hg_a)?,
            solid(Species::Powder, kg(c.feed.powder_kg))?,
            None,
        )?;
        let feed_b = FurnaceFeed::new(
            t_feed,
            solid(Species::Hg, hg_b)?,
            solid(Species::Glass, kg(c.feed.glass_kg))?,
            Some(solid(Species::Al, kg(c.feed.al_kg))?),
        )?;

        // One logical carrier supply, consumed at two points in the
        // topology; value semantics make the duplication explicit
        let t_carrier = k(c.carrier.inlet_t_k);
        let carrier = CarrierGas::new(
            t_carrier,
            Component::new(
                Species::N2,
                Phase::Gas,
                kg(c.carrier.n2_kg),
                reference.h0 + CP_N2 * (t_carrier.value - reference.t0.value),
            )?,
        )?;
        let carrier_a = carrier.clone();
        let carrier_b = carrier;

        let furnace_a = Furnace::new(
            "furnace A (powder)",
            k(c.furnace.t_k),
            c.furnace.efficiency,
            c.furnace.removal_fraction,
        )?;
        let furnace_b = Furnace::new(
            "furnace B (glass/Al)",
            k(c.furnace.t_k),
            c.furnace.efficiency,
            c.furnace.removal_fraction,
        )?;

        let out_a = furnace_a.run(reference, &feed_a, &carrier_a)?;
        info!(equipment = furnace_a.name.as_str(), duty_j = out_a.duty.value, "furnace done");
        let out_b = furnace_b.run(reference, &feed_b, &carrier_b)?;
        info!(equipment = furnace_b.name.as_str(), duty_j = out_b.duty.value, "furnace done");

        let merged = merge_streams(reference, &out_a.vapor, &out_b.vapor)?;
        info!(t3_k = merged.temperature.value, "vapor streams merged");

        let condenser = Condenser::new(
            "condenser",
            k(c.condenser.t_out_k),
            c.condenser.efficiency,
            kpa(c.condenser.pressure_kpa),
        )?;
        let out_cond = condenser.run(reference, &merged)?;
        info!(
            equipment = condenser.name.as_str(),
            duty_j = out_cond.duty.value,
            recovery = condenser.recovery(),
            "condenser done"
        );

        let filter = CarbonFilter::new("carbon filter");
        let out_filter = filter.run(&out_cond.vent)?;

        // Chiller sized for the heat the condenser must reject
        let coolant = Species::from_key(&c.chiller.coolant)?;
        let chiller = Chiller::new(
            "chiller",
            coolant,
            k(c.chiller.t_cold_k),
            k(c.chiller.t_warm_k),
            c.chiller.efficiency,
        )?;
        let out_chill = chiller.run(reference, j(-out_cond.duty.value))?;
        info!(
            equipment = chiller.name.as_str(),
            power_j = out_chill.power.value,
            coolant_kg = out_chill.coolant_mass.value,
            "chiller sized"
        );

        // Plant-wide closure on top of the per-operation checks
        let feed_a_s = feed_a.stream()?.labeled("powder feed");
        let feed_b_s = feed_b.stream()?.labeled("glass/Al feed");
        let carrier_a_s = carrier_a.stream()?.labeled("carrier gas A");
        let carrier_b_s = carrier_b.stream()?.labeled("carrier gas B");
        let residue_a_s = out_a.residue.stream()?.labeled("residue A");
        let residue_b_s = out_b.residue.stream()?.labeled("residue B");
        let vapor_a_s = out_a.vapor.stream()?.labeled("vapor A");
        let vapor_b_s = out_b.vapor.stream()?.labeled("vapor B");
        let merged_s = merged.stream()?.labeled("merged vapor");
        let liquid_s = out_cond.liquid.stream()?.labeled("mercury product");
        let vent_s = out_cond.vent.stream()?.labeled("condenser vent");
        let clean_s = out_filter.carrier.stream()?.labeled("clean carrier");
        let capture_s = out_filter.capture.stream()?.labeled("captured mercury");
        let cold_s = out_chill.cold.stream()?.labeled("coolant supply");
        let warm_s = out_chill.warm.stream()?.labeled("coolant return");

        let plant_in = [&feed_a_s, &feed_b_s, &carrier_a_s, &carrier_b_s];
        let plant_out = [&residue_a_s, &residue_b_s, &liquid_s, &clean_s, &capture_s];
        mass_check(&plant_in, &plant_out)?;

        let delivered = (out_a.duty.value * c.furnace.efficiency)
            + (out_b.duty.value * c.furnace.efficiency)
            + (out_cond.duty.value * c.condenser.efficiency);
        energy_check(&plant_in, &plant_out, j(delivered))?;

        let hg_feed = kg(hg_a.value + hg_b.value);
        let hg_condensed = out_cond.liquid.hg.mass();
        let hg_captured = out_filter.capture.hg.mass();
        let hg_in_residue = kg(out_a.residue.hg.mass().value + out_b.residue.hg.mass().value);
        // A mercury-free feed (commissioning or purge cycle) recovers
        // nothing by definition; avoid 0/0 here
        let recovery_fraction = if hg_feed.value > 0.0 {
            (hg_condensed.value + hg_captured.value) / hg_feed.value
        } else {
            0.0
        };
        let heat_input = j(out_a.duty.value + out_b.duty.value);

        let as_power = |duty: Energy| -> Power { w(duty.value / cycle) };
        let equipment = vec![
            EquipmentDuty {
                name: furnace_a.name.clone(),
                duty: out_a.duty,
                power: as_power(out_a.duty),
            },
            EquipmentDuty {
                name: furnace_b.name.clone(),
                duty: out_b.duty,
                power: as_power(out_b.duty),
            },
            EquipmentDuty {
                name: condenser.name.clone(),
                duty: out_cond.duty,
                power: as_power(out_cond.duty),
            },
            EquipmentDuty {
                name: chiller.name.clone(),
                duty: out_chill.power,
                power: as_power(out_chill.power),
            },
        ];

        let streams = vec![
            feed_a_s, feed_b_s, carrier_a_s, carrier_b_s, vapor_a_s, vapor_b_s, residue_a_s,
            residue_b_s, merged_s, liquid_s, vent_s, clean_s, capture_s, cold_s, warm_s,
        ];

        info!(
            hg_feed_kg = hg_feed.value,
            recovery = recovery_fraction,
            heat_input_j = heat_input.value,
            "cycle complete"
        );

        Ok(PlantReport {
            streams,
            equipment,
            hg_feed,
            hg_condensed,
            hg_captured,
            hg_in_residue,
            coolant_mass: out_chill.coolant_mass,
            recovery_fraction,
            heat_input,
        })
    }
}
