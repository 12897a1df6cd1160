//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use medlog_config::{LoginStrategy, MedlogConfig};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://medlog.example.org/api"
timeout_secs = 10
login_strategy = "session"
"#,
        )?;

        let config: MedlogConfig = Figment::from(Serialized::defaults(MedlogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://medlog.example.org/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.login_strategy, LoginStrategy::Session);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn loads_auth_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[auth]
admin_role_name = "study-admin"
oidc_issuer = "https://idp.example.org/realms/medlog"
oidc_client_id = "medlog-cli"

[general]
default_limit = 25
only_current_medications = false

[storage]
state_dir = "/tmp/medlog-state"
"#,
        )?;

        let config: MedlogConfig = Figment::from(Serialized::defaults(MedlogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.auth.admin_role_name, "study-admin");
        assert!(config.auth.is_oidc_configured());
        assert_eq!(config.general.default_limit, 25);
        assert!(!config.general.only_current_medications);
        assert_eq!(config.storage.state_dir.to_str(), Some("/tmp/medlog-state"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\ntimeout_secs = 5\n")?;

        let config: MedlogConfig = Figment::from(Serialized::defaults(MedlogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, "http://localhost:8888/api");
        assert_eq!(config.general.default_limit, 100);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\nbase_url = \"http://from-toml/api\"\n")?;
        jail.set_env("MEDLOG_API__BASE_URL", "http://from-env/api");

        let config: MedlogConfig = Figment::from(Serialized::defaults(MedlogConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MEDLOG_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://from-env/api");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".medlog"))
            .map_err(|e| e.to_string())?;
        jail.create_file(".medlog/config.toml", "[auth]\nadmin_role_name = \"local-admin\"\n")?;

        let config = MedlogConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.auth.admin_role_name, "local-admin");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\ntimeout_secs = \"soon\"\n")?;

        let result: Result<MedlogConfig, _> =
            Figment::from(Serialized::defaults(MedlogConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
