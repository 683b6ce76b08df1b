//! Web UI bootstrap for app-shell
//!
//! Registers the global Bootstrap assets in the page's `<head>` and mounts
//! the Yew root component at the configured selector.

mod app;
mod host;
mod root;

pub use app::App;
pub use host::{ASSET_ATTR, BrowserHost};
pub use root::{MOUNTED_ATTR, YewRoot};

use app_shell::config::{ASSET_BASE_KEY, FAILURE_POLICY_KEY, MOUNT_SELECTOR_KEY};
use app_shell::{Bootstrap, BootstrapConfig, BootstrapError, FailurePolicy, MountedApp};
use wasm_bindgen::prelude::*;
use yew::AppHandle;

/// Configuration baked in at compile time through `APP_*` variables.
pub fn build_config() -> BootstrapConfig {
    BootstrapConfig::from_lookup(|key| {
        let value = match key {
            MOUNT_SELECTOR_KEY => option_env!("APP_MOUNT_SELECTOR"),
            ASSET_BASE_KEY => option_env!("APP_ASSET_BASE"),
            FAILURE_POLICY_KEY => option_env!("APP_FAILURE_POLICY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// Run the bootstrap sequence for [`App`] against the current page.
///
/// Mounting waits until every asset has loaded; a failed load aborts it.
pub async fn start(
    config: &BootstrapConfig,
) -> Result<MountedApp<AppHandle<App>>, BootstrapError> {
    let mut host = BrowserHost::current()?;
    let mut bootstrap = Bootstrap::from_config(YewRoot::<App>::new(), config);
    bootstrap.run_async(&mut host).await
}

/// Apply the configured [`FailurePolicy`] to a failed bootstrap.
pub fn handle_failure(config: &BootstrapConfig, error: BootstrapError) {
    match config.failure_policy {
        FailurePolicy::Report => log::error!("application not started: {error}"),
        FailurePolicy::Panic => panic!("application not started: {error}"),
        FailurePolicy::Fallback => {
            log::error!("application not started: {error}");
            if let Ok(host) = BrowserHost::current() {
                host.show_failure(&config.mount_point, &error.to_string());
            }
        }
    }
}

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    wasm_bindgen_futures::spawn_local(async {
        let config = build_config();
        match start(&config).await {
            // Yew keeps the tree rendered after the handle is dropped.
            Ok(mounted) => log::info!("started at {}", mounted.mount_point()),
            Err(e) => handle_failure(&config, e),
        }
    });
}
