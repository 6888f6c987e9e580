//! Card family: container, header, title, description, content and footer.
//!
//! The container plays the `card-appear` animation; pass `delay_ms` to
//! stagger a grid of cards.

use leptos::prelude::*;

fn with_extra(base: &str, extra: Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

pub fn card_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
}

#[component]
pub fn Card(
    /// Animation delay in milliseconds (for the stagger effect)
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || with_extra("card", class.get()) style=card_style(delay_ms)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! { <div class=move || with_extra("card__header", class.get())>{children()}</div> }
}

#[component]
pub fn CardTitle(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! { <h3 class=move || with_extra("card__title", class.get())>{children()}</h3> }
}

#[component]
pub fn CardDescription(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! { <p class=move || with_extra("card__description", class.get())>{children()}</p> }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! { <div class=move || with_extra("card__content", class.get())>{children()}</div> }
}

#[component]
pub fn CardFooter(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! { <div class=move || with_extra("card__footer", class.get())>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_extra() {
        assert_eq!(with_extra("card", None), "card");
        assert_eq!(with_extra("card", Some(String::new())), "card");
        assert_eq!(with_extra("card", Some("card--hover".into())), "card card--hover");
    }

    #[test]
    fn test_card_style() {
        assert_eq!(card_style(0), "animation: card-appear 0.28s ease-out 0ms both;");
        assert_eq!(card_style(160), "animation: card-appear 0.28s ease-out 160ms both;");
    }
}
