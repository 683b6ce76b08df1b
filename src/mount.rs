//! Mount point identifiers.

use std::fmt;

/// Selector naming where the root component is inserted, e.g. `#app`.
///
/// The host is responsible for the location existing; this type only carries
/// the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into().trim().to_string())
    }

    pub fn selector(&self) -> &str {
        &self.0
    }

    /// Element id for plain `#id` selectors, `None` for anything else.
    pub fn element_id(&self) -> Option<&str> {
        let id = self.0.strip_prefix('#')?;
        let plain = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        plain.then_some(id)
    }
}

impl Default for MountPoint {
    fn default() -> Self {
        Self::new("#app")
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MountPoint {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id() {
        assert_eq!(MountPoint::new("#app").element_id(), Some("app"));
        assert_eq!(MountPoint::new(" #main_view ").element_id(), Some("main_view"));
        assert_eq!(MountPoint::new("#").element_id(), None);
        assert_eq!(MountPoint::new("main > .app").element_id(), None);
        assert_eq!(MountPoint::new("#a.b").element_id(), None);
    }

    #[test]
    fn test_default_is_app() {
        assert_eq!(MountPoint::default().selector(), "#app");
    }
}
