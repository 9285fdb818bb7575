// 配置模块测试

use super::*;
use crate::constants;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

/// RAII 环境变量 guard，确保测试后恢复
struct EnvGuard {
    key: String,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &str, value: &str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: 使用 serial_test 确保串行执行
        unsafe { env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
        }
    }

    fn remove(key: &str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: 使用 serial_test 确保串行执行
        unsafe { env::remove_var(key) };
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: 测试环境中修改环境变量是安全的
        match &self.original {
            Some(v) => unsafe { env::set_var(&self.key, v) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

fn temp_store() -> (TempDir, ConfigStore) {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::at(dir.path().join(".shipit"));
    (dir, store)
}

// === load ===

#[test]
fn test_load_creates_directory_and_returns_empty() {
    let (_dir, store) = temp_store();
    let parent = store.path().parent().unwrap().to_path_buf();
    assert!(!parent.exists());

    let config = store.load().unwrap();

    assert!(parent.exists());
    assert_eq!(config, ShipitConfig::default());
    assert!(!store.path().exists());
}

#[test]
fn test_load_creates_nested_directories() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::at(dir.path().join("a").join("b").join(".shipit"));
    store.load().unwrap();
    assert!(dir.path().join("a/b/.shipit").is_dir());
}

#[test]
fn test_load_reads_camel_case_fields() {
    let (_dir, store) = temp_store();
    store.load().unwrap();
    fs::write(
        store.path(),
        r#"{ "apiKey": "sk-or-123", "model": "openai/gpt-4o-mini" }"#,
    )
    .unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("sk-or-123"));
    assert_eq!(config.model.as_deref(), Some("openai/gpt-4o-mini"));
}

#[test]
fn test_load_corrupted_file_returns_empty() {
    let (_dir, store) = temp_store();
    store.load().unwrap();
    fs::write(store.path(), "{ not json").unwrap();

    let config = store.load().unwrap();
    assert_eq!(config, ShipitConfig::default());
    // 文件本身保持不变
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");
}

#[test]
fn test_load_invalid_utf8_returns_empty() {
    let (_dir, store) = temp_store();
    store.load().unwrap();
    fs::write(store.path(), [0xff, 0xfe, b'{', b'}']).unwrap();

    let config = store.load().unwrap();
    assert_eq!(config, ShipitConfig::default());
}

#[test]
fn test_set_rewrites_invalid_utf8_file() {
    let (_dir, store) = temp_store();
    store.load().unwrap();
    fs::write(store.path(), [0xc3, 0x28]).unwrap();

    store.set(ConfigField::ApiKey, "sk-fresh").unwrap();
    assert_eq!(
        store.get(ConfigField::ApiKey).unwrap().as_deref(),
        Some("sk-fresh")
    );
}

#[cfg(unix)]
#[test]
fn test_load_unreadable_file_is_an_error() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = temp_store();
    store.set(ConfigField::Model, "m").unwrap();
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o000)).unwrap();

    // root 可以忽略权限位，此时无法构造该场景
    if fs::read(store.path()).is_ok() {
        return;
    }
    let err = store.load().unwrap_err();
    assert!(matches!(err, crate::error::ShipitError::Io(_)));
}

#[test]
fn test_load_wrong_types_returns_empty() {
    let (_dir, store) = temp_store();
    store.load().unwrap();
    fs::write(store.path(), r#"{ "apiKey": 42 }"#).unwrap();

    assert_eq!(store.load().unwrap(), ShipitConfig::default());
}

// === save ===

#[test]
fn test_save_then_load_is_idempotent() {
    let (_dir, store) = temp_store();
    let config = ShipitConfig {
        api_key: Some("sk-or-abcdef".to_string()),
        model: None,
    };
    store.save(&config).unwrap();

    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();
    let reloaded = store.load().unwrap();

    assert_eq!(loaded, config);
    assert_eq!(reloaded, loaded);
}

#[test]
fn test_save_is_pretty_printed_and_omits_unset_fields() {
    let (_dir, store) = temp_store();
    store
        .save(&ShipitConfig {
            api_key: None,
            model: Some("meta/llama".to_string()),
        })
        .unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content, "{\n  \"model\": \"meta/llama\"\n}");
}

#[test]
fn test_save_overwrites_previous_content() {
    let (_dir, store) = temp_store();
    store
        .save(&ShipitConfig {
            api_key: Some("old".to_string()),
            model: Some("old-model".to_string()),
        })
        .unwrap();
    store.save(&ShipitConfig::default()).unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
}

#[test]
fn test_save_leaves_no_temp_files() {
    let (_dir, store) = temp_store();
    store.save(&ShipitConfig::default()).unwrap();
    store.save(&ShipitConfig::default()).unwrap();

    let entries: Vec<_> = fs::read_dir(store.path().parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
}

#[cfg(unix)]
#[test]
fn test_save_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = temp_store();
    store.set(ConfigField::ApiKey, "sk-secret").unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

// === get / set ===

#[test]
fn test_set_then_get_returns_value() {
    let (_dir, store) = temp_store();
    store.set(ConfigField::Model, "anthropic/claude").unwrap();
    assert_eq!(
        store.get(ConfigField::Model).unwrap().as_deref(),
        Some("anthropic/claude")
    );
}

#[test]
fn test_set_keeps_other_field() {
    let (_dir, store) = temp_store();
    store.set(ConfigField::ApiKey, "sk-1").unwrap();
    store.set(ConfigField::Model, "m-1").unwrap();
    store.set(ConfigField::ApiKey, "sk-2").unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("sk-2"));
    assert_eq!(config.model.as_deref(), Some("m-1"));
}

#[test]
fn test_get_unset_field_is_none() {
    let (_dir, store) = temp_store();
    assert_eq!(store.get(ConfigField::ApiKey).unwrap(), None);
}

// === reset ===

#[test]
fn test_reset_removes_file() {
    let (_dir, store) = temp_store();
    store.set(ConfigField::ApiKey, "sk-1").unwrap();

    assert_eq!(store.reset().unwrap(), ResetOutcome::Removed);
    assert!(!store.path().exists());
    assert_eq!(store.load().unwrap(), ShipitConfig::default());
}

#[test]
fn test_reset_without_file_reports_not_found() {
    let (_dir, store) = temp_store();
    assert_eq!(store.reset().unwrap(), ResetOutcome::NotFound);
}

#[test]
fn test_reset_corrupted_file() {
    let (_dir, store) = temp_store();
    store.load().unwrap();
    fs::write(store.path(), "garbage").unwrap();

    assert_eq!(store.reset().unwrap(), ResetOutcome::Removed);
    assert_eq!(store.load().unwrap(), ShipitConfig::default());
}

// === path ===

#[test]
fn test_path_ends_with_config_json() {
    let (dir, store) = temp_store();
    assert_eq!(store.path(), dir.path().join(".shipit").join("config.json"));
}

#[test]
fn test_default_store_uses_home_dot_shipit() {
    let store = ConfigStore::open_default().unwrap();
    assert!(store.path().ends_with(".shipit/config.json"));
}

// === ShipitConfig ===

#[test]
fn test_is_empty() {
    assert!(ShipitConfig::default().is_empty());
    assert!(
        ShipitConfig {
            api_key: Some(String::new()),
            model: Some(String::new()),
        }
        .is_empty()
    );
    assert!(
        !ShipitConfig {
            api_key: None,
            model: Some("m".to_string()),
        }
        .is_empty()
    );
}

#[test]
fn test_model_or_default() {
    let mut config = ShipitConfig::default();
    assert_eq!(config.model_or_default(), constants::llm::DEFAULT_MODEL);

    config.set(ConfigField::Model, "  ");
    assert_eq!(config.model_or_default(), constants::llm::DEFAULT_MODEL);

    config.set(ConfigField::Model, "google/gemini");
    assert_eq!(config.model_or_default(), "google/gemini");
}

#[test]
fn test_config_field_keys() {
    assert_eq!(ConfigField::ApiKey.to_string(), "apiKey");
    assert_eq!(ConfigField::Model.key(), "model");
}

// === Credentials ===

#[test]
#[serial]
fn test_credentials_from_stored_values() {
    let _key = EnvGuard::remove(constants::config::API_KEY_ENV);
    let _model = EnvGuard::remove(constants::config::MODEL_ENV);

    let config = ShipitConfig {
        api_key: Some("sk-stored".to_string()),
        model: None,
    };
    let creds = Credentials::resolve(&config).unwrap();
    assert_eq!(creds.api_key, "sk-stored");
    assert_eq!(creds.model, constants::llm::DEFAULT_MODEL);
}

#[test]
#[serial]
fn test_credentials_missing_key() {
    let _key = EnvGuard::remove(constants::config::API_KEY_ENV);

    assert!(Credentials::resolve(&ShipitConfig::default()).is_none());
    assert!(
        Credentials::resolve(&ShipitConfig {
            api_key: Some("   ".to_string()),
            model: None,
        })
        .is_none()
    );
}

#[test]
#[serial]
fn test_credentials_env_overrides_stored() {
    let _key = EnvGuard::set(constants::config::API_KEY_ENV, "sk-env");
    let _model = EnvGuard::set(constants::config::MODEL_ENV, "env/model");

    let config = ShipitConfig {
        api_key: Some("sk-stored".to_string()),
        model: Some("stored/model".to_string()),
    };
    let creds = Credentials::resolve(&config).unwrap();
    assert_eq!(creds.api_key, "sk-env");
    assert_eq!(creds.model, "env/model");
}

#[test]
#[serial]
fn test_credentials_empty_env_is_ignored() {
    let _key = EnvGuard::set(constants::config::API_KEY_ENV, "");
    let _model = EnvGuard::remove(constants::config::MODEL_ENV);

    let config = ShipitConfig {
        api_key: Some("sk-stored".to_string()),
        model: Some("stored/model".to_string()),
    };
    let creds = Credentials::resolve(&config).unwrap();
    assert_eq!(creds.api_key, "sk-stored");
    assert_eq!(creds.model, "stored/model");
}
