//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The preference is persisted in
//! localStorage and mirrored to `data-theme` on `<body>` for the stylesheet.

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours used by the SVG chart, which cannot read CSS variables for every attribute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChartPalette {
    pub grid: &'static str,
    pub axis: &'static str,
    pub line: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string; anything unknown is light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn chart_palette(&self) -> ChartPalette {
        match self {
            Theme::Light => ChartPalette {
                grid: "#e5e7eb",
                axis: "#6b7280",
                line: "#3b82f6",
                tooltip_bg: "#ffffff",
                tooltip_border: "#e5e7eb",
                tooltip_text: "#111827",
            },
            Theme::Dark => ChartPalette {
                grid: "#374151",
                axis: "#9ca3af",
                line: "#3b82f6",
                tooltip_bg: "#1f2937",
                tooltip_border: "#374151",
                tooltip_text: "#f9fafb",
            },
        }
    }
}

const THEME_STORAGE_KEY: &str = "testhub-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Set data-theme attribute on body for styling hooks.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
        log::info!("theme switched to {}", theme.as_str());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Icon shown on the toggle: the theme it switches to.
fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "moon",
        Theme::Dark => "sun",
    }
}

/// Icon button switching between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <Button variant="ghost" size="icon" label="切换主题" on_click=Callback::new(move |_| ctx.toggle())>
            {move || icon(toggle_icon(ctx.theme.get()))}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_as_str() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("forest"), Theme::Light);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_icon_shows_target_theme() {
        assert_eq!(toggle_icon(Theme::Light), "moon");
        assert_eq!(toggle_icon(Theme::Dark), "sun");
    }

    #[test]
    fn test_palette_differs_per_theme() {
        assert_eq!(Theme::Dark.chart_palette().grid, "#374151");
        assert_eq!(Theme::Light.chart_palette().grid, "#e5e7eb");
        assert_eq!(Theme::Light.chart_palette().line, Theme::Dark.chart_palette().line);
    }
}
