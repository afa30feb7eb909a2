//! Shared test utilities for integration tests
//!
//! Provides centralized setup/teardown for the environment variables the
//! configuration loader consults, ensuring consistent test isolation.

use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
/// This prevents race conditions when tests run in parallel
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    rebel_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            rebel_env: std::env::var("REBEL_ENV").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.rebel_env {
            std::env::set_var("REBEL_ENV", orig);
        } else {
            std::env::remove_var("REBEL_ENV");
        }
    }
}

/// Run a test with HOME pointed at an isolated directory inside the temp dir
/// and REBEL_ENV cleared.
///
/// The loader reads HOME for the global config file and REBEL_ENV for the
/// environment-specific workspace file; isolating both keeps tests hermetic
/// when run in parallel with each other or on a developer machine with real
/// config files present.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::remove_var("REBEL_ENV");

    // Run test
    let result = f();

    // Restore original environment
    env_state.restore();

    result
}

/// Variant that also sets REBEL_ENV for the duration of the test.
pub fn with_rebel_env<F, R>(test_dir: &TempDir, env_name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("REBEL_ENV", env_name);

    let result = f();

    env_state.restore();

    result
}
