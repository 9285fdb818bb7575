//! Command implementations.
//!
//! # Modules
//! - `ship` - Stage, generate, commit and push.
//! - `config` - Configuration set/get/reset/path.
//!
//! # Architecture
//! ```text
//! CLI (cli.rs)
//!   ├── commands/ship.rs ─> git, llm, config
//!   └── commands/config.rs ─> config, ui::Prompter
//! ```

/// Configuration management commands.
pub mod config;
/// Ship workflow.
pub mod ship;

pub use config::SetupOptions;
pub use ship::{ShipOutcome, ShipStage};
