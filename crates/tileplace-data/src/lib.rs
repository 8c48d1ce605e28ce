//! Data-driven scenario loading for tileplace.
//!
//! A scenario directory holds `world.*` (required), `placement.*` and
//! `objects.*`, each in RON, TOML or JSON. [`load_scenario`] reads and
//! validates them into a [`Scenario`] that can build a configured
//! controller and place its objects.

pub mod loader;
pub mod scenario;
pub mod schema;

pub use loader::{DataLoadError, Format, load_scenario};
pub use scenario::Scenario;
