use clap::{Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Stage everything, let an LLM write the commit message, commit and push
#[derive(Parser, Debug)]
#[command(name = "shipit")]
#[command(author, version, long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    /// Defaults to `ship`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Stage all changes, generate a commit message, commit and push
    Ship,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Interactively set the API key and model
    Set {
        /// Pre-fill the API key prompt
        #[arg(long = "apiKey", visible_alias = "api-key", value_name = "KEY")]
        api_key: Option<String>,

        /// Pre-fill the model prompt
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Show the current configuration (API key masked)
    Get,

    /// Delete the configuration file
    Reset,

    /// Print the configuration file path
    Path,
}
