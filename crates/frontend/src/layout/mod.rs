pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |            Content           |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
