use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

/// Navigation entries: (label, active)
const NAV_ITEMS: [(&str, bool); 4] = [
    ("仪表板", true),
    ("测试历史", false),
    ("测试配置", false),
    ("文档", false),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__brand">
                    <span class="header__logo">{icon("flask")}</span>
                    <h1 class="header__title">"TestHub"</h1>
                </div>
                <nav class="header__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, active)| {
                            let class = if active {
                                "header__link header__link--active"
                            } else {
                                "header__link"
                            };
                            view! { <a href="#" class=class>{label}</a> }
                        })
                        .collect_view()}
                </nav>
                <div class="header__actions">
                    <ThemeToggle />
                    <Button variant="ghost" size="icon" label="帮助">{icon("help")}</Button>
                    <Button variant="ghost" size="icon" label="用户">{icon("user")}</Button>
                </div>
            </div>
        </header>
    }
}
