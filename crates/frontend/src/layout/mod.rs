pub mod footer;
pub mod global_context;
pub mod header;
pub mod notifications;

use footer::Footer;
use header::Header;
use leptos::prelude::*;
use notifications::NotificationHost;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand, nav, search, drawer)     |
/// +------------------------------------------+
/// |               Routed page                |
/// +------------------------------------------+
/// |  Footer (server status)                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
            <NotificationHost />
        </div>
    }
}
