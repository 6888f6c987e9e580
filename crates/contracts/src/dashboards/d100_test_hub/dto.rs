use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Category of test the hub knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Unit,
    Api,
    Ui,
    Performance,
    Form,
    Accessibility,
}

impl TestKind {
    /// Stable identifier (also used as the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            TestKind::Unit => "unit",
            TestKind::Api => "api",
            TestKind::Ui => "ui",
            TestKind::Performance => "performance",
            TestKind::Form => "form",
            TestKind::Accessibility => "accessibility",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.as_str() == s)
    }

    /// All kinds in display order
    pub fn all() -> [TestKind; 6] {
        [
            TestKind::Unit,
            TestKind::Api,
            TestKind::Ui,
            TestKind::Performance,
            TestKind::Form,
            TestKind::Accessibility,
        ]
    }
}

/// Outcome of a finished test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Warning,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Warning => "warning",
        }
    }

    /// Unknown strings yield `None` (rendered as neutral status)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passed" => Some(TestStatus::Passed),
            "failed" => Some(TestStatus::Failed),
            "warning" => Some(TestStatus::Warning),
            _ => None,
        }
    }
}

/// Card metadata for one test kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestType {
    pub kind: TestKind,
    pub title: String,
    pub description: String,
    /// Icon name understood by the frontend icon helper
    pub icon: String,
    /// Accent modifier for the card badge (e.g. "blue")
    pub accent: String,
}

/// One row of the run history table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestHistoryEntry {
    pub id: u32,
    pub kind: TestKind,
    pub status: TestStatus,
    pub date: NaiveDate,
    pub duration_secs: u32,
    pub tests: u32,
    pub passed: u32,
    pub failed: u32,
}

/// Result of a (simulated) run, shown in the results panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRunResult {
    pub kind: TestKind,
    pub passed: u32,
    pub failed: u32,
    pub duration_secs: u32,
    pub timestamp: NaiveDateTime,
}

/// Single point of the performance trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// X-axis label (month abbreviation)
    pub label: String,
    pub value: f64,
}

impl PerformancePoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TestKind::Api).unwrap(), "\"api\"");
        assert_eq!(
            serde_json::from_str::<TestKind>("\"accessibility\"").unwrap(),
            TestKind::Accessibility
        );
    }

    #[test]
    fn test_kind_parse_matches_as_str() {
        for kind in TestKind::all() {
            assert_eq!(TestKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(TestKind::parse("smoke"), None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TestStatus::parse("passed"), Some(TestStatus::Passed));
        assert_eq!(TestStatus::parse("warning"), Some(TestStatus::Warning));
        assert_eq!(TestStatus::parse("skipped"), None);
        assert_eq!(
            serde_json::to_string(&TestStatus::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn test_history_entry_json_shape() {
        let entry = TestHistoryEntry {
            id: 3,
            kind: TestKind::Performance,
            status: TestStatus::Warning,
            date: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            duration_secs: 150,
            tests: 5,
            passed: 4,
            failed: 1,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["kind"], "performance");
        assert_eq!(value["status"], "warning");
        assert_eq!(value["date"], "2025-08-03");
    }
}
