//! Tabs: a container owning one selection, triggers that write it and
//! panels that read it.
//!
//! Every `<Tabs>` provides its own [`TabsContext`] to its subtree, so two
//! groups on the same page never see each other's selection.

mod state;

pub use state::{TabError, TabSelection};

use leptos::prelude::*;

/// Reactive handle to the selection of the nearest `<Tabs>`.
#[derive(Clone, Copy)]
pub struct TabsContext {
    selection: RwSignal<TabSelection>,
}

impl TabsContext {
    pub fn new(selection: TabSelection) -> Self {
        Self {
            selection: RwSignal::new(selection),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.selection.with(|s| s.is_active(id))
    }

    pub fn current_value(&self) -> String {
        self.selection.with(|s| s.current_value().to_string())
    }

    pub fn declares(&self, id: &str) -> bool {
        self.selection.with_untracked(|s| s.declares(id))
    }

    /// Errors with `UnknownId` when `id` is not declared by this group.
    pub fn check_declared(&self, id: &str) -> Result<(), TabError> {
        if self.declares(id) {
            Ok(())
        } else {
            Err(TabError::UnknownId(id.to_string()))
        }
    }

    /// Selects `id`; subscribers are only notified when the selection changes.
    pub fn try_select(&self, id: &str) -> Result<(), TabError> {
        if !self.selection.with_untracked(|s| s.would_change(id))? {
            return Ok(());
        }
        self.selection.try_update(|s| s.select(id)).unwrap_or(Ok(()))
    }

    /// UI entry point: rejected ids are logged and ignored.
    pub fn select(&self, id: &str) {
        match self.try_select(id) {
            Ok(()) => log::debug!("tab selected: '{}'", id),
            Err(e) => log::warn!("tab selection rejected: {}", e),
        }
    }
}

/// Hook to use the selection of the enclosing `<Tabs>`.
pub fn use_tabs() -> TabsContext {
    use_context::<TabsContext>().expect("TabsContext not found. Wrap triggers and panels with <Tabs>.")
}

fn join_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

fn trigger_class(active: bool, extra: &str) -> String {
    let base = if active {
        "tabs__trigger tabs__trigger--active"
    } else {
        "tabs__trigger"
    };
    join_class(base, extra)
}

/// Inline alert rendered in place of a misconfigured tab part.
fn invalid_tabs(error: TabError) -> AnyView {
    view! {
        <div class="tabs tabs--invalid" role="alert">{error.to_string()}</div>
    }
    .into_any()
}

/// Tab group container.
#[component]
pub fn Tabs(
    /// Every id a trigger or panel of this group may use
    ids: &'static [&'static str],
    /// Initially active id; empty means nothing is active
    #[prop(optional)]
    default_value: &'static str,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    match TabSelection::new(ids.iter().copied(), default_value) {
        Ok(selection) => {
            provide_context(TabsContext::new(selection));
            view! {
                <div class=move || join_class("tabs", &class.get().unwrap_or_default())>
                    {children()}
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("invalid tab group {:?}: {}", ids, e);
            invalid_tabs(e)
        }
    }
}

#[component]
pub fn TabsList(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div role="tablist" class=move || join_class("tabs__list", &class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

/// Button that makes `value` the active tab.
#[component]
pub fn TabsTrigger(
    value: &'static str,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let tabs = use_tabs();
    if let Err(e) = tabs.check_declared(value) {
        log::error!("tab trigger: {}", e);
        return invalid_tabs(e);
    }
    let is_active = move || tabs.is_active(value);

    view! {
        <button
            type="button"
            role="tab"
            aria-selected=move || is_active().to_string()
            class=move || trigger_class(is_active(), &class.get().unwrap_or_default())
            on:click=move |_| tabs.select(value)
        >
            {children()}
        </button>
    }
    .into_any()
}

/// Panel rendered only while `value` is the active tab.
#[component]
pub fn TabsContent(
    value: &'static str,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = use_tabs();
    if let Err(e) = tabs.check_declared(value) {
        log::error!("tab panel: {}", e);
        return invalid_tabs(e);
    }

    view! {
        <Show when=move || tabs.is_active(value)>
            <div role="tabpanel" class=move || join_class("tabs__content", &class.get().unwrap_or_default())>
                {children()}
            </div>
        </Show>
    }
    .into_any()
}
