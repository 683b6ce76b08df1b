//! Bootstrap/mount sequence.
//!
//! The sequence runs once at process start:
//!
//! 1. Register every global asset, in manifest order. The first failure
//!    aborts the sequence before anything is mounted.
//! 2. Construct the single [`Application`] bound to the root component.
//! 3. Resolve the mount point and attach the application to it.
//!
//! Assets registered before a failure stay registered; nothing is undone.

use crate::asset::AssetManifest;
use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::host::{AssetStatus, Host, RootComponent};
use crate::mount::MountPoint;

/// Lifecycle of a bootstrap sequence. `Mounted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    Mounted,
}

/// Register every asset of the manifest, in order.
///
/// Stops at the first failure. Returns the number of newly registered
/// assets; assets the host already carries are skipped. An asset with an
/// empty href fails before the host sees it.
pub fn register_assets<H: Host>(
    host: &mut H,
    manifest: &AssetManifest,
) -> Result<usize, BootstrapError> {
    let mut registered = 0;
    for asset in manifest {
        if asset.href.trim().is_empty() {
            return Err(BootstrapError::asset(&asset.name, "empty href"));
        }
        match host.register_asset(asset)? {
            AssetStatus::Registered => {
                log::debug!("registered {} '{}' ({})", asset.kind, asset.name, asset.href);
                registered += 1;
            }
            AssetStatus::AlreadyPresent => {
                log::debug!("{} '{}' already present", asset.kind, asset.name);
            }
        }
    }
    Ok(registered)
}

/// The application instance: a root component definition awaiting a mount
/// point.
pub struct Application<R> {
    root: R,
}

impl<R> Application<R> {
    pub fn new(root: R) -> Self {
        Self { root }
    }

    /// Attach the application to `mount_point`.
    ///
    /// Consumes the application, so one instance is mounted at most once.
    pub fn mount<H>(
        self,
        host: &mut H,
        mount_point: &MountPoint,
    ) -> Result<MountedApp<R::Handle>, BootstrapError>
    where
        H: Host,
        R: RootComponent<H>,
    {
        let target = host.resolve_mount_point(mount_point).ok_or_else(|| {
            BootstrapError::MountTargetNotFound {
                selector: mount_point.selector().to_string(),
            }
        })?;
        let handle = self.root.mount(host, target)?;
        log::info!("application mounted at {mount_point}");
        Ok(MountedApp {
            handle,
            mount_point: mount_point.clone(),
        })
    }
}

/// A mounted application. Dropping it is up to the owner; the bootstrap
/// never tears it down.
#[derive(Debug)]
pub struct MountedApp<T> {
    handle: T,
    mount_point: MountPoint,
}

impl<T> MountedApp<T> {
    pub fn state(&self) -> BootstrapState {
        BootstrapState::Mounted
    }

    pub fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    pub fn handle(&self) -> &T {
        &self.handle
    }

    pub fn into_handle(self) -> T {
        self.handle
    }
}

/// One-shot bootstrap sequence, owned by the process entry point.
pub struct Bootstrap<R> {
    root: Option<R>,
    mount_point: MountPoint,
    assets: AssetManifest,
    state: BootstrapState,
}

impl<R> Bootstrap<R> {
    /// A sequence with an empty asset manifest.
    pub fn new(root: R, mount_point: impl Into<MountPoint>) -> Self {
        Self {
            root: Some(root),
            mount_point: mount_point.into(),
            assets: AssetManifest::new(),
            state: BootstrapState::Uninitialized,
        }
    }

    /// A sequence using the configured mount point and stock asset manifest.
    pub fn from_config(root: R, config: &BootstrapConfig) -> Self {
        Self::new(root, config.mount_point.clone()).with_assets(config.asset_manifest())
    }

    pub fn with_assets(mut self, assets: AssetManifest) -> Self {
        self.assets = assets;
        self
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    pub fn assets(&self) -> &AssetManifest {
        &self.assets
    }

    /// Run the sequence against `host` without waiting for assets to load.
    ///
    /// Suits hosts whose registration completes synchronously. The root
    /// component is handed over on the first run, so a second run fails with
    /// [`BootstrapError::AlreadyRun`] whatever the first outcome.
    pub fn run<H>(&mut self, host: &mut H) -> Result<MountedApp<R::Handle>, BootstrapError>
    where
        H: Host,
        R: RootComponent<H>,
    {
        let root = self.root.take().ok_or(BootstrapError::AlreadyRun)?;

        let result = register_assets(host, &self.assets).and_then(|registered| {
            self.log_registered(registered);
            Application::new(root).mount(host, &self.mount_point)
        });

        self.finish(result)
    }

    /// Run the sequence, waiting for every asset to load before mounting.
    ///
    /// A failed load surfaces as [`BootstrapError::AssetLoadFailure`] and the
    /// application is never mounted.
    pub async fn run_async<H>(
        &mut self,
        host: &mut H,
    ) -> Result<MountedApp<R::Handle>, BootstrapError>
    where
        H: Host,
        R: RootComponent<H>,
    {
        let root = self.root.take().ok_or(BootstrapError::AlreadyRun)?;

        let result = async {
            let registered = register_assets(host, &self.assets)?;
            self.log_registered(registered);
            host.settle().await?;
            Application::new(root).mount(host, &self.mount_point)
        }
        .await;

        self.finish(result)
    }

    fn log_registered(&self, registered: usize) {
        log::debug!(
            "{} of {} assets newly registered",
            registered,
            self.assets.len()
        );
    }

    fn finish<T>(&mut self, result: Result<T, BootstrapError>) -> Result<T, BootstrapError> {
        match result {
            Ok(mounted) => {
                self.state = BootstrapState::Mounted;
                Ok(mounted)
            }
            Err(e) => {
                log::error!("bootstrap failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetKind, GlobalAsset};
    use futures::executor::block_on;
    use std::future::Future;

    /// Host that records calls and fails on demand.
    #[derive(Default)]
    struct RecordingHost {
        registered: Vec<String>,
        targets: Vec<String>,
        fail_on: Option<String>,
        fail_load: Option<String>,
        settled: bool,
        mounted: Vec<String>,
    }

    impl Host for RecordingHost {
        type Target = String;

        fn register_asset(&mut self, asset: &GlobalAsset) -> Result<AssetStatus, BootstrapError> {
            if self.fail_on.as_deref() == Some(asset.name.as_str()) {
                return Err(BootstrapError::asset(&asset.name, "missing file"));
            }
            if self.has_asset(&asset.name) {
                return Ok(AssetStatus::AlreadyPresent);
            }
            self.registered.push(asset.name.clone());
            Ok(AssetStatus::Registered)
        }

        fn has_asset(&self, name: &str) -> bool {
            self.registered.iter().any(|n| n == name)
        }

        fn resolve_mount_point(&self, mount_point: &MountPoint) -> Option<String> {
            self.targets
                .iter()
                .find(|t| t.as_str() == mount_point.selector())
                .cloned()
        }

        fn settle(&mut self) -> impl Future<Output = Result<(), BootstrapError>> {
            let result = match self.fail_load.take() {
                Some(name) => Err(BootstrapError::asset(name, "404 Not Found")),
                None => {
                    self.settled = true;
                    Ok(())
                }
            };
            std::future::ready(result)
        }
    }

    struct TrivialRoot;

    impl RootComponent<RecordingHost> for TrivialRoot {
        type Handle = String;

        fn mount(
            self,
            host: &mut RecordingHost,
            target: String,
        ) -> Result<String, BootstrapError> {
            host.mounted.push(target.clone());
            Ok(format!("rendered into {target}"))
        }
    }

    fn host_with_app() -> RecordingHost {
        RecordingHost {
            targets: vec!["#app".to_string()],
            ..Default::default()
        }
    }

    fn stock_assets() -> AssetManifest {
        AssetManifest::bootstrap("https://cdn.example")
    }

    #[test]
    fn test_mounts_when_target_exists() {
        let mut host = host_with_app();
        let mut bootstrap = Bootstrap::new(TrivialRoot, "#app").with_assets(stock_assets());
        assert_eq!(bootstrap.state(), BootstrapState::Uninitialized);

        let mounted = bootstrap.run(&mut host).unwrap();
        assert_eq!(bootstrap.state(), BootstrapState::Mounted);
        assert_eq!(mounted.state(), BootstrapState::Mounted);
        assert_eq!(mounted.handle(), "rendered into #app");
        assert_eq!(
            host.registered,
            vec!["bootstrap", "bootstrap-icons", "bootstrap-bundle"]
        );
        assert_eq!(host.mounted, vec!["#app"]);
    }

    #[test]
    fn test_missing_target_keeps_assets() {
        let mut host = host_with_app();
        let mut bootstrap =
            Bootstrap::new(TrivialRoot, "#does-not-exist").with_assets(stock_assets());

        let err = bootstrap.run(&mut host).unwrap_err();
        match err {
            BootstrapError::MountTargetNotFound { selector } => {
                assert_eq!(selector, "#does-not-exist")
            }
            other => panic!("Expected MountTargetNotFound, got {other:?}"),
        }
        assert_eq!(bootstrap.state(), BootstrapState::Uninitialized);
        assert_eq!(host.registered.len(), 3);
        assert!(host.mounted.is_empty());
    }

    #[test]
    fn test_asset_failure_stops_before_mount() {
        let mut host = host_with_app();
        host.fail_on = Some("bootstrap-icons".to_string());
        let mut bootstrap = Bootstrap::new(TrivialRoot, "#app").with_assets(stock_assets());

        let err = bootstrap.run(&mut host).unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::AssetLoadFailure { ref asset, .. } if asset == "bootstrap-icons"
        ));
        assert_eq!(host.registered, vec!["bootstrap"]);
        assert!(host.mounted.is_empty());
        assert_eq!(bootstrap.state(), BootstrapState::Uninitialized);
    }

    #[test]
    fn test_register_assets_skips_present() {
        let mut host = host_with_app();
        host.registered.push("bootstrap".to_string());

        let count = register_assets(&mut host, &stock_assets()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            host.registered,
            vec!["bootstrap", "bootstrap-icons", "bootstrap-bundle"]
        );
    }

    #[test]
    fn test_custom_manifest_order() {
        let mut host = host_with_app();
        let assets = AssetManifest::new()
            .with(GlobalAsset::new("theme", AssetKind::Stylesheet, "/theme.css"))
            .with(GlobalAsset::new("base", AssetKind::Stylesheet, "/base.css"));
        let mut bootstrap = Bootstrap::new(TrivialRoot, "#app").with_assets(assets);

        bootstrap.run(&mut host).unwrap();
        assert_eq!(host.registered, vec!["theme", "base"]);
    }

    #[test]
    fn test_from_config() {
        let config = BootstrapConfig::default().with_mount_point("#root");
        let bootstrap = Bootstrap::from_config(TrivialRoot, &config);
        assert_eq!(bootstrap.mount_point().selector(), "#root");
        assert_eq!(bootstrap.assets().len(), 3);
    }

    #[test]
    fn test_application_mount_directly() {
        let mut host = host_with_app();
        let mounted = Application::new(TrivialRoot)
            .mount(&mut host, &MountPoint::default())
            .unwrap();
        assert_eq!(mounted.mount_point().selector(), "#app");
        assert_eq!(mounted.into_handle(), "rendered into #app");
    }

    #[test]
    fn test_empty_href_rejected_before_host() {
        let mut host = host_with_app();
        let assets = AssetManifest::new()
            .with(GlobalAsset::new("base", AssetKind::Stylesheet, "/base.css"))
            .with(GlobalAsset::new("blank", AssetKind::ScriptBundle, "  "));

        let err = register_assets(&mut host, &assets).unwrap_err();
        assert_eq!(err.to_string(), "failed to load asset 'blank': empty href");
        assert_eq!(host.registered, vec!["base"]);
    }

    #[test]
    fn test_run_async_mounts_after_assets_load() {
        let mut host = host_with_app();
        let mut bootstrap = Bootstrap::new(TrivialRoot, "#app").with_assets(stock_assets());

        let mounted = block_on(bootstrap.run_async(&mut host)).unwrap();
        assert!(host.settled);
        assert_eq!(mounted.state(), BootstrapState::Mounted);
        assert_eq!(bootstrap.state(), BootstrapState::Mounted);
        assert_eq!(host.mounted, vec!["#app"]);
    }

    #[test]
    fn test_run_async_failed_load_prevents_mount() {
        let mut host = host_with_app();
        host.fail_load = Some("bootstrap-icons".to_string());
        let mut bootstrap = Bootstrap::new(TrivialRoot, "#app").with_assets(stock_assets());

        let err = block_on(bootstrap.run_async(&mut host)).unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::AssetLoadFailure { ref asset, .. } if asset == "bootstrap-icons"
        ));
        assert!(host.mounted.is_empty());
        assert_eq!(bootstrap.state(), BootstrapState::Uninitialized);
        assert_eq!(host.registered.len(), 3);
    }
}
