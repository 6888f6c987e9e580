//! Static data rendered by the dashboard

use chrono::NaiveDate;
use contracts::dashboards::d100_test_hub::{
    PerformancePoint, TestHistoryEntry, TestKind, TestStatus, TestType,
};

fn test_type(kind: TestKind, title: &str, description: &str, icon: &str, accent: &str) -> TestType {
    TestType {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        accent: accent.to_string(),
    }
}

/// One card per test kind, in display order
pub fn test_types() -> Vec<TestType> {
    vec![
        test_type(TestKind::Unit, "单元测试", "测试独立组件和函数的功能", "code", "blue"),
        test_type(TestKind::Api, "API测试", "测试API端点的响应和性能", "exchange", "green"),
        test_type(TestKind::Ui, "UI测试", "验证用户界面组件的渲染和交互", "monitor", "purple"),
        test_type(TestKind::Performance, "性能测试", "评估应用程序的响应速度和资源使用", "gauge", "amber"),
        test_type(TestKind::Form, "表单测试", "验证表单验证规则和提交行为", "file", "red"),
        test_type(TestKind::Accessibility, "可访问性测试", "检查应用程序的无障碍功能支持", "accessibility", "teal"),
    ]
}

/// Display title for a kind
pub fn title_for(kind: TestKind) -> String {
    test_types()
        .into_iter()
        .find(|t| t.kind == kind)
        .map(|t| t.title)
        .unwrap_or_else(|| kind.as_str().to_string())
}

fn entry(
    id: u32,
    kind: TestKind,
    status: TestStatus,
    (year, month, day): (i32, u32, u32),
    duration_secs: u32,
    (tests, passed, failed): (u32, u32, u32),
) -> TestHistoryEntry {
    TestHistoryEntry {
        id,
        kind,
        status,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        duration_secs,
        tests,
        passed,
        failed,
    }
}

pub fn history() -> Vec<TestHistoryEntry> {
    vec![
        entry(1, TestKind::Unit, TestStatus::Passed, (2025, 8, 5), 12, (24, 24, 0)),
        entry(2, TestKind::Api, TestStatus::Passed, (2025, 8, 4), 45, (18, 17, 1)),
        entry(3, TestKind::Performance, TestStatus::Warning, (2025, 8, 3), 150, (5, 4, 1)),
        entry(4, TestKind::Ui, TestStatus::Failed, (2025, 8, 2), 195, (12, 8, 4)),
    ]
}

pub fn performance_series() -> Vec<PerformancePoint> {
    [
        ("Jan", 65.0),
        ("Feb", 59.0),
        ("Mar", 80.0),
        ("Apr", 81.0),
        ("May", 56.0),
        ("Jun", 55.0),
        ("Jul", 72.0),
    ]
    .into_iter()
    .map(|(label, value)| PerformancePoint::new(label, value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_kind_in_order() {
        let kinds: Vec<_> = test_types().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, TestKind::all().to_vec());
    }

    #[test]
    fn test_history_counts_add_up() {
        for row in history() {
            assert_eq!(row.passed + row.failed, row.tests, "row {}", row.id);
        }
    }

    #[test]
    fn test_history_newest_first() {
        let dates: Vec<_> = history().into_iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
    }

    #[test]
    fn test_title_for() {
        assert_eq!(title_for(TestKind::Api), "API测试");
        assert_eq!(title_for(TestKind::Accessibility), "可访问性测试");
    }

    #[test]
    fn test_performance_series() {
        let series = performance_series();
        assert_eq!(series.len(), 7);
        assert_eq!(series[3], PerformancePoint::new("Apr", 81.0));
    }
}
