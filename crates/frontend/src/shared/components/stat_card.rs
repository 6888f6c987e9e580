use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour tone of a stat tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Success,
    Error,
    Info,
}

impl StatTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Error => "stat-card stat-card--error",
            StatTone::Info => "stat-card stat-card--info",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    tone: StatTone,
) -> impl IntoView {
    view! {
        <div class=tone.css_class()>
            <div class="stat-card__head">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(icon_name)}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
