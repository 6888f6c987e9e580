use leptos::prelude::*;

// 24x24 stroke outlines, one `d` attribute per path.
const CIRCLE: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z";

fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "flask" => &["M9 3h6", "M10 3v6L4.5 19a1.5 1.5 0 0 0 1.3 2h12.4a1.5 1.5 0 0 0 1.3-2L14 9V3", "M7 15h10"],
        "help" => &[CIRCLE, "M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3", "M12 17h.01"],
        "user" => &[CIRCLE, "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z", "M6.2 18.4a7 7 0 0 1 11.6 0"],
        "moon" => &["M12 3a6 6 0 0 0 9 9a9 9 0 1 1-9-9z"],
        "sun" => &["M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z", "M12 2v2", "M12 20v2", "M4.9 4.9l1.4 1.4", "M17.7 17.7l1.4 1.4", "M2 12h2", "M20 12h2", "M4.9 19.1l1.4-1.4", "M17.7 6.3l1.4-1.4"],
        "play" => &["M6 4l14 8-14 8z"],
        "check-circle" => &[CIRCLE, "M8 12l3 3 5-6"],
        "x-circle" => &[CIRCLE, "M15 9l-6 6", "M9 9l6 6"],
        "alert-triangle" => &["M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z", "M12 9v4", "M12 17h.01"],
        "clock" => &[CIRCLE, "M12 6v6l4 2"],
        "info" => &[CIRCLE, "M12 16v-4", "M12 8h.01"],
        "close" => &["M18 6L6 18", "M6 6l12 12"],
        "eye" => &["M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z", "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z"],
        "history" => &["M3 3v5h5", "M3.05 13A9 9 0 1 0 6 5.3L3 8", "M12 7v5l4 2"],
        "chart" => &["M3 3v18h18", "M7 14l4-4 4 4 5-6"],
        "grid" => &["M3 3h7v7H3z", "M14 3h7v7h-7z", "M14 14h7v7h-7z", "M3 14h7v7H3z"],
        "code" => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
        "exchange" => &["M17 1l4 4-4 4", "M3 11V9a4 4 0 0 1 4-4h14", "M7 23l-4-4 4-4", "M21 13v2a4 4 0 0 1-4 4H3"],
        "monitor" => &["M2 3h20v14H2z", "M8 21h8", "M12 17v4"],
        "gauge" => &["M12 14l4-4", "M3.3 19a10 10 0 1 1 17.4 0"],
        "file" => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6", "M8 13h8", "M8 17h5"],
        "accessibility" => &["M12 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z", "M4 8l8 2 8-2", "M12 10v5", "M8 22l4-7 4 7"],
        "github" => &["M9 19c-5 1.5-5-2.5-7-3m14 6v-3.9a3.4 3.4 0 0 0-.9-2.6c3.1-.3 6.4-1.5 6.4-7A5.4 5.4 0 0 0 20 4.8 5 5 0 0 0 19.9 1S18.7.7 16 2.5a13.4 13.4 0 0 0-7 0C6.3.7 5.1 1 5.1 1A5 5 0 0 0 5 4.8a5.4 5.4 0 0 0-1.5 3.7c0 5.4 3.3 6.6 6.4 7A3.4 3.4 0 0 0 9 18.1V22"],
        "loader" => &["M12 2v4", "M12 18v4", "M4.9 4.9l2.9 2.9", "M16.2 16.2l2.9 2.9", "M2 12h4", "M18 12h4"],
        _ => &[CIRCLE, "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(icon_paths("no-such-icon"), icon_paths("another-missing"));
        assert_ne!(icon_paths("play"), icon_paths("no-such-icon"));
    }
}
