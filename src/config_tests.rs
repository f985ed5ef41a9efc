use crate::config::{Config, Mode};
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const KEYS: [&str; 3] = ["MODE", "PREDICT_API_URL", "REQUEST_TIMEOUT_SECS"];

fn clear_env() {
    for key in KEYS {
        // SAFETY: all env mutation in this suite happens behind ENV_LOCK
        unsafe { env::remove_var(key) };
    }
}

fn set_env(key: &str, value: &str) {
    // SAFETY: all env mutation in this suite happens behind ENV_LOCK
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_defaults_point_at_local_api() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.mode, Mode::Api);
    assert_eq!(config.api_base_url, "http://localhost:5000");
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_mock_mode_is_selectable() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("MODE", "mock");

    let config = Config::from_env().unwrap();
    assert_eq!(config.mode, Mode::Mock);

    clear_env();
}

#[test]
fn test_mode_parse_is_case_insensitive() {
    assert_eq!("API".parse::<Mode>().unwrap(), Mode::Api);
    assert_eq!("Mock".parse::<Mode>().unwrap(), Mode::Mock);
    assert!("paper".parse::<Mode>().is_err());
}

#[test]
fn test_invalid_mode_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("MODE", "paper");

    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("PREDICT_API_URL", "http://localhost:5000/");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_base_url, "http://localhost:5000");

    clear_env();
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("PREDICT_API_URL", "not a url");

    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_invalid_timeout_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("REQUEST_TIMEOUT_SECS", "soon");

    assert!(Config::from_env().is_err());

    clear_env();
}
