use figment::Jail;
use medlog_config::{ConfigError, LoginStrategy, MedlogConfig};

#[test]
fn env_vars_map_to_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("MEDLOG_API__LOGIN_STRATEGY", "session");
        jail.set_env("MEDLOG_API__TIMEOUT_SECS", "7");
        jail.set_env("MEDLOG_GENERAL__DEFAULT_LIMIT", "12");

        let config = MedlogConfig::load().expect("config loads");
        assert_eq!(config.api.login_strategy, LoginStrategy::Session);
        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.general.default_limit, 12);
        Ok(())
    });
}

#[test]
fn env_zero_timeout_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("MEDLOG_API__TIMEOUT_SECS", "0");

        let config = MedlogConfig::load().expect("config loads");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.timeout_secs"
        ));
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "MEDLOG_AUTH__ADMIN_ROLE_NAME=from-dotenv\n")?;

        let config = MedlogConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.auth.admin_role_name, "from-dotenv");
        Ok(())
    });
}
