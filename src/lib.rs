//! Deterministic generator of portal status fixtures.
//!
//! A [`scenario::Scenario`] plays scripted [`sim::Phase`]s against a portal
//! template and hands a normalized snapshot to a [`flush::SnapshotSink`] at
//! every scheduled second.

pub mod config;
pub mod error;
pub mod flush;
pub mod model;
pub mod scenario;
pub mod sim;
pub mod testutil;

pub use config::{GeneratorConfig, LogLevel};
pub use error::GenError;
pub use model::{Aggregation, Faction, PortalStatus, Position, Resonator, StatusEnvelope};
pub use scenario::{Scenario, Timeline, generate};
