//! Yew components as bootstrap root components.

use app_shell::{BootstrapError, RootComponent};
use web_sys::Element;
use yew::AppHandle;
use yew::html::BaseComponent;

use crate::host::{BrowserHost, js_error};

/// Attribute marking an element that already owns a mounted application.
pub const MOUNTED_ATTR: &str = "data-app-mounted";

/// Root component definition wrapping a Yew component and its props.
pub struct YewRoot<C: BaseComponent> {
    props: C::Properties,
}

impl<C> YewRoot<C>
where
    C: BaseComponent,
    C::Properties: Default,
{
    pub fn new() -> Self {
        Self::with_props(C::Properties::default())
    }
}

impl<C> Default for YewRoot<C>
where
    C: BaseComponent,
    C::Properties: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BaseComponent> YewRoot<C> {
    pub fn with_props(props: C::Properties) -> Self {
        Self { props }
    }
}

impl<C: BaseComponent> RootComponent<BrowserHost> for YewRoot<C> {
    type Handle = AppHandle<C>;

    fn mount(
        self,
        _host: &mut BrowserHost,
        target: Element,
    ) -> Result<AppHandle<C>, BootstrapError> {
        if target.has_attribute(MOUNTED_ATTR) {
            return Err(BootstrapError::AlreadyMounted {
                selector: describe(&target),
            });
        }
        target
            .set_attribute(MOUNTED_ATTR, "")
            .map_err(|e| BootstrapError::HostUnavailable(js_error(&e)))?;

        Ok(yew::Renderer::<C>::with_root_and_props(target, self.props).render())
    }
}

fn describe(element: &Element) -> String {
    let id = element.id();
    if id.is_empty() {
        element.tag_name().to_lowercase()
    } else {
        format!("#{id}")
    }
}
