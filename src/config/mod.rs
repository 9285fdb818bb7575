//! Configuration persistence.
//!
//! A single JSON file at `~/.shipit/config.json` holds the OpenRouter API key
//! and the model identifier. There is no history and no merging beyond
//! load-modify-save.

mod store;
mod structs;

pub use store::{ConfigStore, ResetOutcome};
pub use structs::{ConfigField, Credentials, ShipitConfig};

#[cfg(test)]
mod tests;
