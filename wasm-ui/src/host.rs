//! Browser document as the bootstrap host.

use std::future::Future;

use app_shell::{AssetStatus, BootstrapError, GlobalAsset, Host, MountPoint};
use js_sys::{Function, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

/// Attribute tagging `<link>`/`<script>` elements with their asset name.
pub const ASSET_ATTR: &str = "data-app-asset";

/// Host backed by the page's DOM.
pub struct BrowserHost {
    document: Document,
    /// Assets appended since the last settle, with their load outcome.
    pending: Vec<(String, Promise)>,
}

impl BrowserHost {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            pending: Vec::new(),
        }
    }

    /// Host for the current page.
    pub fn current() -> Result<Self, BootstrapError> {
        let window = web_sys::window()
            .ok_or_else(|| BootstrapError::HostUnavailable("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| BootstrapError::HostUnavailable("no document".to_string()))?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replace the mount point contents with a plain error notice, or append
    /// the notice to `<body>` if the mount point is missing.
    pub fn show_failure(&self, mount_point: &MountPoint, message: &str) {
        let Ok(notice) = self.document.create_element("div") else {
            return;
        };
        let _ = notice.set_attribute("class", "alert alert-danger m-3");
        let _ = notice.set_attribute("role", "alert");
        notice.set_text_content(Some(&format!("Application failed to start: {message}")));

        if let Some(target) = self.resolve_mount_point(mount_point) {
            target.set_text_content(None);
            let _ = target.append_child(&notice);
        } else if let Some(body) = self.document.body() {
            let _ = body.append_child(&notice);
        }
    }

    fn create_asset_element(&self, asset: &GlobalAsset) -> Result<Element, JsValue> {
        let element = if asset.kind.is_style() {
            let link = self.document.create_element("link")?;
            link.set_attribute("rel", "stylesheet")?;
            link.set_attribute("href", &asset.href)?;
            link
        } else {
            let script = self.document.create_element("script")?;
            script.set_attribute("src", &asset.href)?;
            script
        };
        element.set_attribute(ASSET_ATTR, &asset.name)?;
        Ok(element)
    }
}

/// Promise resolved by the element's `load` event and rejected by `error`.
///
/// Must be created before the element is attached so neither event is missed.
fn load_outcome(element: &Element) -> Promise {
    Promise::new(&mut |resolve: Function, reject: Function| {
        let _ = element.add_event_listener_with_callback("load", &resolve);
        let _ = element.add_event_listener_with_callback("error", &reject);
    })
}

impl Host for BrowserHost {
    type Target = Element;

    fn register_asset(&mut self, asset: &GlobalAsset) -> Result<AssetStatus, BootstrapError> {
        if self.has_asset(&asset.name) {
            return Ok(AssetStatus::AlreadyPresent);
        }
        let head = self
            .document
            .head()
            .ok_or_else(|| BootstrapError::asset(&asset.name, "document has no <head>"))?;
        let element = self
            .create_asset_element(asset)
            .map_err(|e| BootstrapError::asset(&asset.name, js_error(&e)))?;

        let outcome = load_outcome(&element);
        head.append_child(&element)
            .map_err(|e| BootstrapError::asset(&asset.name, js_error(&e)))?;
        self.pending.push((asset.name.clone(), outcome));
        Ok(AssetStatus::Registered)
    }

    fn has_asset(&self, name: &str) -> bool {
        let Ok(nodes) = self.document.query_selector_all(&format!("[{ASSET_ATTR}]")) else {
            return false;
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .any(|e| e.get_attribute(ASSET_ATTR).as_deref() == Some(name))
    }

    fn resolve_mount_point(&self, mount_point: &MountPoint) -> Option<Element> {
        // Invalid selectors are treated like missing targets.
        let nodes = self
            .document
            .query_selector_all(mount_point.selector())
            .ok()?;
        if nodes.length() != 1 {
            return None;
        }
        nodes.get(0)?.dyn_into::<Element>().ok()
    }

    fn settle(&mut self) -> impl Future<Output = Result<(), BootstrapError>> {
        let pending = std::mem::take(&mut self.pending);
        async move {
            for (name, outcome) in pending {
                JsFuture::from(outcome)
                    .await
                    .map_err(|_| BootstrapError::asset(&name, "failed to load"))?;
                log::debug!("asset '{name}' loaded");
            }
            Ok(())
        }
    }
}

pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
