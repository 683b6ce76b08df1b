//! In-memory host document.
//!
//! A minimal stand-in for a browser document: a `<head>` holding global
//! assets in registration order and a flat set of body elements addressed by
//! id. It runs the same bootstrap sequence as the browser host and renders
//! the resulting HTML shell page.

use std::fs;
use std::path::Path;

use crate::asset::GlobalAsset;
use crate::error::BootstrapError;
use crate::host::{AssetStatus, Host, RootComponent};
use crate::mount::MountPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    id: String,
    text: String,
    mounted: bool,
}

/// A static HTML host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDocument {
    title: String,
    assets: Vec<GlobalAsset>,
    body: Vec<Element>,
}

impl StaticDocument {
    /// An empty document with no body elements.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assets: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A document whose body holds the element `mount_point` names.
    ///
    /// Only `#id` selectors can be created this way.
    pub fn shell(
        title: impl Into<String>,
        mount_point: &MountPoint,
    ) -> Result<Self, BootstrapError> {
        let id = mount_point
            .element_id()
            .ok_or_else(|| BootstrapError::MountTargetNotFound {
                selector: mount_point.selector().to_string(),
            })?;
        let mut doc = Self::new(title);
        doc.add_element(id);
        Ok(doc)
    }

    /// Add an empty body element. Existing ids are left untouched.
    pub fn add_element(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if !self.body.iter().any(|e| e.id == id) {
            self.body.push(Element {
                id,
                text: String::new(),
                mounted: false,
            });
        }
        self
    }

    /// Registered assets, in registration order.
    pub fn assets(&self) -> &[GlobalAsset] {
        &self.assets
    }

    /// Text rendered into an element, `None` if there is no such element.
    pub fn element_text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.element(id).is_some_and(|e| e.mounted)
    }

    fn element(&self, id: &str) -> Option<&Element> {
        self.body.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.iter_mut().find(|e| e.id == id)
    }

    /// Render the document as an HTML page.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape(&self.title)));
        for asset in &self.assets {
            let name = escape(&asset.name);
            let href = escape(&asset.href);
            if asset.kind.is_style() {
                html.push_str(&format!(
                    "  <link rel=\"stylesheet\" href=\"{href}\" data-app-asset=\"{name}\">\n"
                ));
            } else {
                html.push_str(&format!(
                    "  <script defer src=\"{href}\" data-app-asset=\"{name}\"></script>\n"
                ));
            }
        }
        html.push_str("</head>\n<body>\n");
        for element in &self.body {
            html.push_str(&format!(
                "  <div id=\"{}\">{}</div>\n",
                escape(&element.id),
                escape(&element.text)
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the rendered page to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), BootstrapError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_html())?;
        Ok(())
    }
}

impl Host for StaticDocument {
    type Target = String;

    fn register_asset(&mut self, asset: &GlobalAsset) -> Result<AssetStatus, BootstrapError> {
        if self.has_asset(&asset.name) {
            return Ok(AssetStatus::AlreadyPresent);
        }
        self.assets.push(asset.clone());
        Ok(AssetStatus::Registered)
    }

    fn has_asset(&self, name: &str) -> bool {
        self.assets.iter().any(|a| a.name == name)
    }

    fn resolve_mount_point(&self, mount_point: &MountPoint) -> Option<String> {
        let id = mount_point.element_id()?;
        self.element(id).map(|e| e.id.clone())
    }
}

/// Root component that renders a single text node.
#[derive(Debug, Clone)]
pub struct TextRoot {
    text: String,
}

impl TextRoot {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RootComponent<StaticDocument> for TextRoot {
    /// Id of the element the text was rendered into.
    type Handle = String;

    fn mount(self, host: &mut StaticDocument, target: String) -> Result<String, BootstrapError> {
        let element = host
            .element_mut(&target)
            .ok_or_else(|| BootstrapError::MountTargetNotFound {
                selector: format!("#{target}"),
            })?;
        if element.mounted {
            return Err(BootstrapError::AlreadyMounted {
                selector: format!("#{target}"),
            });
        }
        element.text = self.text;
        element.mounted = true;
        Ok(target)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
