//! Domain types for the metro route finder.
//!
//! This module contains the core domain model types representing validated
//! metro network data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod line;
mod record;
mod station;

pub use line::LineId;
pub use record::Station;
pub use station::{InvalidStationId, StationId};
