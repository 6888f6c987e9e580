pub mod dto;

pub use dto::{
    PerformancePoint, TestHistoryEntry, TestKind, TestRunResult, TestStatus, TestType,
};
