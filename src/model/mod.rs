pub mod faction;
pub mod portal;
pub mod resonator;

pub use faction::Faction;
pub use portal::{Aggregation, PortalStatus, StatusEnvelope};
pub use resonator::{Position, Resonator};
