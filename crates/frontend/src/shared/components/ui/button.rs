use leptos::prelude::*;

/// CSS classes for a variant/size pair plus extra classes.
///
/// Unknown variants fall back to "default", unknown sizes to "md".
pub fn button_class(variant: &str, size: &str, extra: &str) -> String {
    let variant_class = match variant {
        "ghost" => "button--ghost",
        "destructive" => "button--destructive",
        "outline" => "button--outline",
        _ => "button--default",
    };
    let size_class = match size {
        "sm" => "button--sm",
        "lg" => "button--lg",
        "icon" => "button--icon",
        _ => "button--md",
    };

    if extra.is_empty() {
        format!("button {} {}", variant_class, size_class)
    } else {
        format!("button {} {} {}", variant_class, size_class, extra)
    }
}

/// Button component with variants (default, ghost, destructive, outline) and sizes (sm, md, lg, icon)
#[component]
pub fn Button(
    /// Button variant: "default" (default), "ghost", "destructive" or "outline"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm", "lg" or "icon"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Accessible label, mostly for icon-only buttons
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let class_name = move || {
        button_class(
            variant.get().as_deref().unwrap_or("default"),
            size.get().as_deref().unwrap_or("md"),
            &class.get().unwrap_or_default(),
        )
    };

    view! {
        <button
            type="button"
            class=class_name
            aria-label=move || label.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(button_class("default", "md", ""), "button button--default button--md");
    }

    #[test]
    fn test_variants_and_sizes() {
        assert_eq!(button_class("ghost", "icon", ""), "button button--ghost button--icon");
        assert_eq!(
            button_class("destructive", "lg", ""),
            "button button--destructive button--lg"
        );
        assert_eq!(
            button_class("outline", "sm", "w-full"),
            "button button--outline button--sm w-full"
        );
    }

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(button_class("primary", "xl", ""), "button button--default button--md");
    }
}
