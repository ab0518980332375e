//! hg-ops: unit-operation transforms for the recovery plant.
//!
//! Each operation is a pure transform: streams in, streams plus a
//! duty out, with mass and energy closure verified internally before
//! anything is returned. Failure of a closure check is a logic or
//! parameter error upstream and propagates as a hard error.
//!
//! Sign convention for duties: positive is heat added to the process
//! side, negative is heat removed.

pub mod chiller;
pub mod common;
pub mod condenser;
pub mod error;
pub mod filter;
pub mod furnace;
pub mod merge;
pub mod shapes;

pub use chiller::{Chiller, ChillerOutput};
pub use condenser::{Condenser, CondenserOutput};
pub use error::{OpError, OpResult};
pub use filter::{CarbonFilter, FilterOutput};
pub use furnace::{Furnace, FurnaceOutput};
pub use merge::merge_streams;
pub use shapes::{CarrierGas, CoolantStream, FurnaceFeed, MercuryStream, SolidResidue, VaporStream};
