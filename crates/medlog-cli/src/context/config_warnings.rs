use medlog_config::MedlogConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &MedlogConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MedlogConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = MedlogConfig::default();

    let mut warnings = Vec::new();

    if config.api.base_url == defaults.api.base_url
        && has_single_underscore(&env_keys, "MEDLOG_API")
    {
        warnings.push(
            "API base URL is the default while MEDLOG_API_* env vars exist. Use double underscores (example: MEDLOG_API__BASE_URL)."
                .to_string(),
        );
    }

    if !config.auth.is_oidc_configured() && has_single_underscore(&env_keys, "MEDLOG_AUTH") {
        warnings.push(
            "OIDC config appears default while MEDLOG_AUTH_* env vars exist. Use double underscores (example: MEDLOG_AUTH__OIDC_ISSUER)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use medlog_config::MedlogConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = MedlogConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MEDLOG_API_BASE_URL".to_string(), "https://medlog.example".to_string()),
                ("MEDLOG_AUTH_OIDC_ISSUER".to_string(), "https://idp".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("MEDLOG_API__BASE_URL"));
        assert!(warnings[1].contains("MEDLOG_AUTH__OIDC_ISSUER"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let config = MedlogConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("MEDLOG_API__TIMEOUT_SECS".to_string(), "5".to_string())],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn no_warning_when_section_is_configured() {
        let mut config = MedlogConfig::default();
        config.api.base_url = "https://medlog.example/api".to_string();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("MEDLOG_API_BASE_URL".to_string(), "x".to_string())],
        );
        assert!(warnings.is_empty());
    }
}
