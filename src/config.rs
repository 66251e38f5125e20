use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP edge settings
    pub listen_addr: String,
    pub debug: bool,

    // Signal channel settings
    /// Header carrying the upstream geolocation result.
    pub geo_header: String,
    /// Header carrying the test country override.
    pub test_country_header: String,
    /// Fixed country for local runs without a fronting geolocation layer.
    pub fixed_geo_country: Option<String>,

    // Redirect settings
    /// HTTP status used for locale redirects (301 or 302).
    pub redirect_status: u16,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("redirect status must be 301 or 302, got {0}")]
    InvalidRedirectStatus(u16),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            debug: false,
            geo_header: "x-geoip-country".to_string(),
            test_country_header: "x-test-country".to_string(),
            fixed_geo_country: None,
            redirect_status: 302,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr = std::env::var("GEOREDIRECT_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    // Header names are lowercased for case-insensitive lookup.
    let geo_header = std::env::var("GEOREDIRECT_GEO_HEADER")
        .unwrap_or_else(|_| "x-geoip-country".to_string())
        .to_lowercase();

    let test_country_header = std::env::var("GEOREDIRECT_TEST_COUNTRY_HEADER")
        .unwrap_or_else(|_| "x-test-country".to_string())
        .to_lowercase();

    let fixed_geo_country = std::env::var("GEOREDIRECT_GEO_COUNTRY").ok();

    let redirect_status: u16 = std::env::var("GEOREDIRECT_REDIRECT_STATUS")
        .unwrap_or_else(|_| "302".to_string())
        .parse()
        .unwrap_or(302);

    if redirect_status != 301 && redirect_status != 302 {
        return Err(ConfigError::InvalidRedirectStatus(redirect_status).into());
    }

    Ok(Config {
        listen_addr,
        debug,
        geo_header,
        test_country_header,
        fixed_geo_country,
        redirect_status,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Process env is shared across the test harness threads; serialize the
    // tests that touch it.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: Mutex<()> = Mutex::new(());
        LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.geo_header, "x-geoip-country");
        assert_eq!(cfg.test_country_header, "x-test-country");
        assert_eq!(cfg.redirect_status, 302);
        assert!(cfg.fixed_geo_country.is_none());
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_defaults() {
        let _guard = env_lock();
        std::env::remove_var("GEOREDIRECT_LISTEN_ADDR");
        std::env::remove_var("GEOREDIRECT_REDIRECT_STATUS");

        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.redirect_status, 302);
    }

    #[test]
    fn test_load_config_with_custom_listen_addr() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_LISTEN_ADDR", "127.0.0.1:9000");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
        std::env::remove_var("GEOREDIRECT_LISTEN_ADDR");
    }

    #[test]
    fn test_load_config_lowercases_header_names() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_GEO_HEADER", "X-GeoIP-Country");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.geo_header, "x-geoip-country");
        std::env::remove_var("GEOREDIRECT_GEO_HEADER");
    }

    #[test]
    fn test_load_config_with_test_header() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_TEST_COUNTRY_HEADER", "X-QA-Country");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.test_country_header, "x-qa-country");
        std::env::remove_var("GEOREDIRECT_TEST_COUNTRY_HEADER");
    }

    #[test]
    fn test_load_config_with_fixed_geo_country() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_GEO_COUNTRY", "DE");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.fixed_geo_country, Some("DE".to_string()));
        std::env::remove_var("GEOREDIRECT_GEO_COUNTRY");
    }

    #[test]
    fn test_load_config_with_permanent_redirect() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_REDIRECT_STATUS", "301");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.redirect_status, 301);
        std::env::remove_var("GEOREDIRECT_REDIRECT_STATUS");
    }

    #[test]
    fn test_load_config_rejects_non_redirect_status() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_REDIRECT_STATUS", "200");
        let result = load_config();
        assert!(result.is_err());
        std::env::remove_var("GEOREDIRECT_REDIRECT_STATUS");
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        let _guard = env_lock();
        std::env::set_var("GEOREDIRECT_REDIRECT_STATUS", "not_a_number");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.redirect_status, 302); // default
        std::env::remove_var("GEOREDIRECT_REDIRECT_STATUS");
    }

    #[test]
    fn test_load_config_with_debug() {
        let _guard = env_lock();
        std::env::set_var("DEBUG", "1");
        let cfg = load_config().unwrap();
        assert!(cfg.debug);
        std::env::remove_var("DEBUG");
    }

    #[test]
    fn test_config_clone() {
        let cfg = Config::default();
        let cloned = cfg.clone();
        assert_eq!(cfg.listen_addr, cloned.listen_addr);
        assert_eq!(cfg.redirect_status, cloned.redirect_status);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidRedirectStatus(200);
        assert_eq!(err.to_string(), "redirect status must be 301 or 302, got 200");
    }
}
