//! Capabilities the bootstrap sequence needs from its environment.
//!
//! The sequencer depends on these traits only, so the host document and the
//! root component can be swapped without touching the sequence itself.

use std::future::{self, Future};

use crate::asset::GlobalAsset;
use crate::error::BootstrapError;
use crate::mount::MountPoint;

/// Outcome of a single asset registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// The asset was newly attached to the host.
    Registered,
    /// The host already carried an asset with the same name.
    AlreadyPresent,
}

/// Environment that holds global assets and mount locations.
pub trait Host {
    /// Resolved location a root component is attached to.
    type Target;

    /// Attach an asset globally. Must not attach the same name twice.
    fn register_asset(&mut self, asset: &GlobalAsset) -> Result<AssetStatus, BootstrapError>;

    /// Whether an asset with this name is already attached.
    fn has_asset(&self, name: &str) -> bool;

    /// Resolve a mount point to exactly one location, or `None`.
    fn resolve_mount_point(&self, mount_point: &MountPoint) -> Option<Self::Target>;

    /// Wait until every asset registered so far has loaded or failed.
    ///
    /// Hosts whose registration completes synchronously keep the default.
    fn settle(&mut self) -> impl Future<Output = Result<(), BootstrapError>> {
        future::ready(Ok(()))
    }
}

/// A root component definition, renderable into a host target.
pub trait RootComponent<H: Host> {
    /// Handle that keeps the rendered subtree alive.
    type Handle;

    fn mount(self, host: &mut H, target: H::Target) -> Result<Self::Handle, BootstrapError>;
}
