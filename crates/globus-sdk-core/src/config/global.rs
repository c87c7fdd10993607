//! Process-wide configuration
//!
//! The store is built from the default sources the first time it is needed
//! and lives for the rest of the process. There is no reload.

use once_cell::sync::OnceCell;

use super::store::ConfigStore;
use super::traits::ConfigResult;

static GLOBAL_CONFIG: OnceCell<ConfigStore> = OnceCell::new();

/// The shared store, loading it on first use.
///
/// Concurrent first calls block until one of them has finished loading. If
/// loading fails the error is returned and the next call tries again.
pub fn global() -> ConfigResult<&'static ConfigStore> {
    GLOBAL_CONFIG.get_or_try_init(ConfigStore::load_default)
}

/// Base URL of `service` in `environment`, e.g. `("default", "transfer")`
pub fn get_service_url(environment: &str, service: &str) -> ConfigResult<Option<String>> {
    global()?.service_url(environment, service)
}

/// Auth token for `environment`, honoring `GLOBUS_SDK_AUTH_TOKEN`
pub fn get_auth_token(environment: &str) -> ConfigResult<Option<String>> {
    global()?.auth_token(environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_global_is_built_once() {
        let first = global().unwrap();
        let second = global().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first
            .loaded_sources()
            .iter()
            .any(|name| *name == "<packaged globus.cfg>"));
    }

    #[test]
    fn test_global_from_many_threads() {
        let addrs: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| global().map(|store| store as *const ConfigStore as usize)))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();

        assert!(addrs.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_helpers_use_global() {
        assert!(get_service_url("default", "transfer").is_ok());
        assert!(get_auth_token("default").is_ok());
    }
}
