//! Selection state for a group of mutually exclusive tabs.
//!
//! Plain value type without any reactive machinery, so the rules can be
//! checked in ordinary unit tests. The reactive wrapper lives in
//! [`super::TabsContext`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("tab group must declare at least one id")]
    EmptyIdSet,
    #[error("tab id must not be blank")]
    BlankId,
    #[error("tab id '{0}' is declared more than once")]
    DuplicateId(String),
    #[error("default tab '{0}' is not one of the declared ids")]
    UnknownDefault(String),
    #[error("tab '{0}' is not one of the declared ids")]
    UnknownId(String),
}

/// Active selection of one tab group.
///
/// Invariant: `active` is either `None` or one of `ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    ids: Vec<String>,
    active: Option<String>,
}

impl TabSelection {
    /// Builds a selection over `ids`. An empty `default` means nothing is active.
    pub fn new<I, S>(ids: I, default: &str) -> Result<Self, TabError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut declared: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if id.trim().is_empty() {
                return Err(TabError::BlankId);
            }
            if declared.contains(&id) {
                return Err(TabError::DuplicateId(id));
            }
            declared.push(id);
        }
        if declared.is_empty() {
            return Err(TabError::EmptyIdSet);
        }

        let active = if default.is_empty() {
            None
        } else if declared.iter().any(|id| id == default) {
            Some(default.to_string())
        } else {
            return Err(TabError::UnknownDefault(default.to_string()));
        };

        Ok(Self {
            ids: declared,
            active,
        })
    }

    /// Whether `id` is one of the declared ids.
    pub fn declares(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Whether `select(id)` would change the active tab.
    pub fn would_change(&self, id: &str) -> Result<bool, TabError> {
        if !self.declares(id) {
            return Err(TabError::UnknownId(id.to_string()));
        }
        Ok(!self.is_active(id))
    }

    /// Makes `id` the active tab. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &str) -> Result<(), TabError> {
        if !self.declares(id) {
            return Err(TabError::UnknownId(id.to_string()));
        }
        if self.active.as_deref() != Some(id) {
            self.active = Some(id.to_string());
        }
        Ok(())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Active id, or an empty string when nothing is selected.
    pub fn current_value(&self) -> &str {
        self.active.as_deref().unwrap_or("")
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds() -> TabSelection {
        TabSelection::new(["unit", "api", "ui"], "unit").unwrap()
    }

    #[test]
    fn test_default_is_active() {
        let tabs = kinds();
        assert!(tabs.is_active("unit"));
        assert!(!tabs.is_active("api"));
        assert_eq!(tabs.current_value(), "unit");
    }

    #[test]
    fn test_select_switches_active() {
        let mut tabs = kinds();
        tabs.select("api").unwrap();
        assert_eq!(tabs.current_value(), "api");
        assert!(!tabs.is_active("unit"));
    }

    #[test]
    fn test_exactly_one_active_after_select() {
        let mut tabs = kinds();
        for id in ["unit", "api", "ui"] {
            tabs.select(id).unwrap();
            let active: Vec<_> = tabs.ids().iter().filter(|i| tabs.is_active(i)).collect();
            assert_eq!(active, vec![id]);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = kinds();
        once.select("ui").unwrap();
        let mut twice = kinds();
        twice.select("ui").unwrap();
        twice.select("ui").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_default_means_nothing_active() {
        let tabs = TabSelection::new(["history", "trend"], "").unwrap();
        assert_eq!(tabs.active(), None);
        assert_eq!(tabs.current_value(), "");
        assert!(!tabs.is_active(""));
        assert!(!tabs.is_active("history"));
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut tabs = TabSelection::new(["history", "trend"], "").unwrap();
        assert_eq!(
            tabs.select("unknown-id"),
            Err(TabError::UnknownId("unknown-id".into()))
        );
        assert!(!tabs.is_active("unknown-id"));
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn test_rejected_select_keeps_previous() {
        let mut tabs = kinds();
        tabs.select("api").unwrap();
        assert!(tabs.select("perf").is_err());
        assert_eq!(tabs.current_value(), "api");
    }

    #[test]
    fn test_declares() {
        let tabs = kinds();
        assert!(tabs.declares("api"));
        assert!(!tabs.declares("API"));
        assert!(!tabs.declares(""));
    }

    #[test]
    fn test_would_change() {
        let tabs = kinds();
        assert_eq!(tabs.would_change("unit"), Ok(false));
        assert_eq!(tabs.would_change("api"), Ok(true));
        assert_eq!(
            tabs.would_change("bogus"),
            Err(TabError::UnknownId("bogus".into()))
        );
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            TabSelection::new(Vec::<String>::new(), ""),
            Err(TabError::EmptyIdSet)
        );
        assert_eq!(TabSelection::new(["a", " "], "a"), Err(TabError::BlankId));
        assert_eq!(
            TabSelection::new(["a", "b", "a"], "a"),
            Err(TabError::DuplicateId("a".into()))
        );
        assert_eq!(
            TabSelection::new(["a", "b"], "c"),
            Err(TabError::UnknownDefault("c".into()))
        );
    }
}
