//! Global presentation assets.
//!
//! Assets are registered once per process, in manifest order, and apply to
//! every component rendered afterwards. Later stylesheets may override rules
//! of earlier ones, so order is part of the contract.

use std::fmt;

/// Default CDN base for the stock asset manifest.
pub const DEFAULT_ASSET_BASE: &str = "https://cdn.jsdelivr.net/npm";

const BOOTSTRAP_VERSION: &str = "5.3.3";
const BOOTSTRAP_ICONS_VERSION: &str = "1.11.3";

/// How an asset is attached to the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Base CSS framework stylesheet.
    Stylesheet,
    /// Icon font, delivered as a stylesheet.
    IconFont,
    /// Interactive-component script bundle.
    ScriptBundle,
}

impl AssetKind {
    /// True if the asset is attached as a `<link rel="stylesheet">`.
    pub fn is_style(self) -> bool {
        matches!(self, AssetKind::Stylesheet | AssetKind::IconFont)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::IconFont => "icon-font",
            AssetKind::ScriptBundle => "script-bundle",
        };
        f.write_str(name)
    }
}

/// A single globally registered asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalAsset {
    /// Stable name, used to detect re-registration.
    pub name: String,
    pub kind: AssetKind,
    pub href: String,
}

impl GlobalAsset {
    pub fn new(name: impl Into<String>, kind: AssetKind, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            href: href.into(),
        }
    }
}

/// Ordered list of assets to register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    assets: Vec<GlobalAsset>,
}

impl AssetManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock manifest: Bootstrap CSS, Bootstrap Icons, Bootstrap JS bundle.
    pub fn bootstrap(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self::new()
            .with(GlobalAsset::new(
                "bootstrap",
                AssetKind::Stylesheet,
                format!("{base}/bootstrap@{BOOTSTRAP_VERSION}/dist/css/bootstrap.min.css"),
            ))
            .with(GlobalAsset::new(
                "bootstrap-icons",
                AssetKind::IconFont,
                format!(
                    "{base}/bootstrap-icons@{BOOTSTRAP_ICONS_VERSION}/font/bootstrap-icons.min.css"
                ),
            ))
            .with(GlobalAsset::new(
                "bootstrap-bundle",
                AssetKind::ScriptBundle,
                format!("{base}/bootstrap@{BOOTSTRAP_VERSION}/dist/js/bootstrap.bundle.min.js"),
            ))
    }

    /// Append an asset; it is registered after every asset already present.
    pub fn with(mut self, asset: GlobalAsset) -> Self {
        self.assets.push(asset);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlobalAsset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssetManifest {
    type Item = &'a GlobalAsset;
    type IntoIter = std::slice::Iter<'a, GlobalAsset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_manifest_order() {
        let manifest = AssetManifest::bootstrap(DEFAULT_ASSET_BASE);
        let kinds: Vec<AssetKind> = manifest.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AssetKind::Stylesheet,
                AssetKind::IconFont,
                AssetKind::ScriptBundle
            ]
        );
        let names: Vec<&str> = manifest.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["bootstrap", "bootstrap-icons", "bootstrap-bundle"]);
    }

    #[test]
    fn test_bootstrap_manifest_base_trailing_slash() {
        let manifest = AssetManifest::bootstrap("/vendor/");
        let first = manifest.iter().next().unwrap();
        assert_eq!(first.href, "/vendor/bootstrap@5.3.3/dist/css/bootstrap.min.css");
    }

    #[test]
    fn test_asset_kind_is_style() {
        assert!(AssetKind::Stylesheet.is_style());
        assert!(AssetKind::IconFont.is_style());
        assert!(!AssetKind::ScriptBundle.is_style());
    }
}
