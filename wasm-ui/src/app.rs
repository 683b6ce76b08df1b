//! Root application component.
//!
//! Placeholder for the application's component tree. It only relies on the
//! globally registered Bootstrap styles and icons.

use yew::prelude::*;

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app container py-5">
            <main class="main">
                <h1 class="display-6">
                    <i class="bi bi-box-seam me-2"></i>
                    { "app-shell" }
                </h1>
                <p class="lead text-body-secondary">{ "Application mounted." }</p>
            </main>

            <footer class="footer border-top pt-3 mt-5 small text-body-secondary">
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
