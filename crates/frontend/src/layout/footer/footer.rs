use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content">
                <div class="footer__brand">
                    {icon("flask")}
                    <span>"TestHub"</span>
                </div>
                <div class="footer__copy">"© 2025 TestHub. 全功能测试平台."</div>
                <div class="footer__links">
                    <a href="#" class="footer__link" aria-label="GitHub">{icon("github")}</a>
                </div>
            </div>
        </footer>
    }
}
