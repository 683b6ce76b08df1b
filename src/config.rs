//! Bootstrap configuration.
//!
//! Values come from a key lookup so each front end can supply them its own
//! way: the browser crate reads compile-time variables, the CLI reads the
//! process environment and then applies its flags on top.

use std::fmt;
use std::str::FromStr;

use crate::asset::{AssetManifest, DEFAULT_ASSET_BASE};
use crate::error::BootstrapError;
use crate::mount::MountPoint;

pub const MOUNT_SELECTOR_KEY: &str = "APP_MOUNT_SELECTOR";
pub const ASSET_BASE_KEY: &str = "APP_ASSET_BASE";
pub const FAILURE_POLICY_KEY: &str = "APP_FAILURE_POLICY";

/// What the surrounding process does when the bootstrap sequence fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the error and leave the mount point empty.
    #[default]
    Report,
    /// Panic with the error.
    Panic,
    /// Log the error and render a plain notice in place of the application.
    Fallback,
}

impl FromStr for FailurePolicy {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(FailurePolicy::Report),
            "panic" => Ok(FailurePolicy::Panic),
            "fallback" => Ok(FailurePolicy::Fallback),
            other => Err(BootstrapError::InvalidConfig(format!(
                "unknown failure policy: {other}"
            ))),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailurePolicy::Report => "report",
            FailurePolicy::Panic => "panic",
            FailurePolicy::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Settings for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub mount_point: MountPoint,
    pub asset_base: String,
    pub failure_policy: FailurePolicy,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_point: MountPoint::default(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl BootstrapConfig {
    /// Build a config from a key lookup, falling back to defaults.
    ///
    /// Empty values count as unset. An unparseable failure policy is logged
    /// and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(selector) = get(MOUNT_SELECTOR_KEY) {
            config.mount_point = MountPoint::new(selector);
        }
        if let Some(base) = get(ASSET_BASE_KEY) {
            config.asset_base = base;
        }
        if let Some(policy) = get(FAILURE_POLICY_KEY) {
            match policy.parse() {
                Ok(policy) => config.failure_policy = policy,
                Err(e) => log::warn!("{FAILURE_POLICY_KEY}: {e}, using {}", config.failure_policy),
            }
        }

        config
    }

    pub fn with_mount_point(mut self, mount_point: impl Into<MountPoint>) -> Self {
        self.mount_point = mount_point.into();
        self
    }

    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// The stock asset manifest rooted at the configured base.
    pub fn asset_manifest(&self) -> AssetManifest {
        AssetManifest::bootstrap(&self.asset_base)
    }
}
