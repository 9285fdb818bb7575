use crate::cli::ConfigAction;
use crate::config::{ConfigStore, ResetOutcome, ShipitConfig};
use crate::constants;
use crate::error::Result;
use crate::ui::{self, Prompter};

/// Hint shown when nothing is configured yet.
pub const NOT_CONFIGURED_HINT: &str =
    "no configuration found. Run `shipit config set` to get started.";

/// Values passed with `config set` that pre-fill the prompts.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

/// 执行 config 子命令
///
/// 没有指定 action 时等同于 `get`。
pub fn run(
    action: Option<ConfigAction>,
    store: &ConfigStore,
    prompter: &dyn Prompter,
    colored: bool,
) -> Result<()> {
    match action.unwrap_or(ConfigAction::Get) {
        ConfigAction::Set { api_key, model } => {
            setup(store, prompter, SetupOptions { api_key, model })?;
            ui::success("configuration saved!", colored);
            Ok(())
        }
        ConfigAction::Get => {
            let config = store.load()?;
            print!("{}", render_config(&config));
            Ok(())
        }
        ConfigAction::Reset => {
            match store.reset()? {
                ResetOutcome::Removed => ui::success("configuration reset!", colored),
                ResetOutcome::NotFound => {
                    println!("{}", ui::info("no configuration found to reset.", colored))
                }
            }
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

/// Interactive setup.
///
/// Defaults come from `options`, then from the stored record, then from the
/// built-in values. An empty answer accepts the default; a field is only
/// written when the resulting value is non-empty.
pub fn setup(
    store: &ConfigStore,
    prompter: &dyn Prompter,
    options: SetupOptions,
) -> Result<ShipitConfig> {
    let mut config = store.load()?;

    let default_key = options
        .api_key
        .or_else(|| config.api_key.clone())
        .unwrap_or_default();
    let default_model = options
        .model
        .or_else(|| config.model.clone())
        .unwrap_or_else(|| constants::llm::DEFAULT_MODEL.to_string());

    let key_answer = prompter.secret("enter your OpenRouter API key:", !default_key.is_empty())?;
    let api_key = answer_or_default(key_answer, default_key);
    if !api_key.is_empty() {
        config.api_key = Some(api_key);
    }

    let model_answer = prompter.text("enter the model to use:", &default_model)?;
    let model = answer_or_default(model_answer, default_model);
    if !model.is_empty() {
        config.model = Some(model);
    }

    store.save(&config)?;
    tracing::debug!("Configuration written to {}", store.path().display());
    Ok(config)
}

fn answer_or_default(answer: String, default: String) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default
    } else {
        answer.to_string()
    }
}

/// Masks a credential to `***` followed by its last four characters.
pub fn mask_api_key(key: &str) -> String {
    let count = key.chars().count();
    let tail: String = key
        .chars()
        .skip(count.saturating_sub(constants::ui::MASK_VISIBLE_CHARS))
        .collect();
    format!("***{}", tail)
}

/// Text printed by `config get`.
pub fn render_config(config: &ShipitConfig) -> String {
    if config.is_empty() {
        return format!("{}\n", NOT_CONFIGURED_HINT);
    }

    let api_key = match config.api_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => mask_api_key(key),
        None => "not set".to_string(),
    };
    let model = match config.model.as_deref().filter(|m| !m.is_empty()) {
        Some(model) => model.to_string(),
        None => format!("{} (default)", constants::llm::DEFAULT_MODEL),
    };

    format!(
        "\ncurrent configuration:\n  API Key: {}\n  model: {}\n\n",
        api_key, model
    )
}
