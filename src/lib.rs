//! # app-shell
//!
//! Process-start bootstrap for a client-side application: register global
//! presentation assets, construct the single application instance, and
//! mount it at a selector in the host document.
//!
//! ## Overview
//!
//! - **Assets**: an ordered [`AssetManifest`]; later stylesheets may
//!   override earlier ones, so order is fixed
//! - **Host**: anything implementing [`Host`] (a browser document, or the
//!   in-memory [`StaticDocument`])
//! - **Root component**: anything implementing [`RootComponent`] for that
//!   host; the sequence never looks inside it
//!
//! ## Example
//!
//! ```
//! use app_shell::{AssetManifest, Bootstrap, BootstrapState, MountPoint, StaticDocument, TextRoot};
//!
//! let mut doc = StaticDocument::shell("Demo", &MountPoint::new("#app")).unwrap();
//! let mut bootstrap = Bootstrap::new(TextRoot::new("Hello"), "#app")
//!     .with_assets(AssetManifest::bootstrap("https://cdn.jsdelivr.net/npm"));
//!
//! let mounted = bootstrap.run(&mut doc).unwrap();
//! assert_eq!(mounted.state(), BootstrapState::Mounted);
//! assert_eq!(doc.assets().len(), 3);
//! ```

pub mod asset;
pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod mount;
pub mod sequencer;

pub use asset::{AssetKind, AssetManifest, DEFAULT_ASSET_BASE, GlobalAsset};
pub use config::{BootstrapConfig, FailurePolicy};
pub use document::{StaticDocument, TextRoot};
pub use error::BootstrapError;
pub use host::{AssetStatus, Host, RootComponent};
pub use mount::MountPoint;
pub use sequencer::{Application, Bootstrap, BootstrapState, MountedApp, register_assets};
