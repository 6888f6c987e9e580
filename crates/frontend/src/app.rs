use crate::dashboards::TestHubDashboard;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <Shell>
                <TestHubDashboard />
            </Shell>
        </ThemeProvider>
    }
}
