use crate::dashboards::d100_test_hub::mock::{history, title_for};
use crate::shared::components::ui::Button;
use crate::shared::format::format_duration;
use crate::shared::icons::icon;
use contracts::dashboards::d100_test_hub::{TestHistoryEntry, TestStatus};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// CSS modifier, icon and label for a status; `None` renders neutral.
pub fn status_presentation(status: Option<TestStatus>) -> (&'static str, &'static str, &'static str) {
    match status {
        Some(TestStatus::Passed) => ("status status--passed", "check-circle", "通过"),
        Some(TestStatus::Failed) => ("status status--failed", "x-circle", "失败"),
        Some(TestStatus::Warning) => ("status status--warning", "alert-triangle", "警告"),
        None => ("status status--unknown", "help", "未知"),
    }
}

fn history_row(row: TestHistoryEntry) -> impl IntoView {
    let (status_class, status_icon, status_label) = status_presentation(Some(row.status));
    let id = row.id;

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <span class="history-table__type">{title_for(row.kind)}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class=status_class>{icon(status_icon)} {status_label}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{row.date.format("%Y-%m-%d").to_string()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_duration(row.duration_secs)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="history-table__passed">{row.passed}</span>
                    <span class="history-table__sep">"/"</span>
                    <span>{row.tests}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Button
                        variant="ghost"
                        size="sm"
                        class="history-table__details"
                        on_click=Callback::new(move |_| log::info!("details requested for run #{}", id))
                    >
                        {icon("eye")}
                        <span>"查看详情"</span>
                    </Button>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn HistoryTable() -> impl IntoView {
    let rows = history();

    view! {
        <div class="history-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"测试类型"</TableHeaderCell>
                        <TableHeaderCell>"状态"</TableHeaderCell>
                        <TableHeaderCell>"日期"</TableHeaderCell>
                        <TableHeaderCell>"时长"</TableHeaderCell>
                        <TableHeaderCell>"测试数"</TableHeaderCell>
                        <TableHeaderCell>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows.into_iter().map(history_row).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_presentation() {
        assert_eq!(
            status_presentation(Some(TestStatus::Passed)),
            ("status status--passed", "check-circle", "通过")
        );
        assert_eq!(status_presentation(Some(TestStatus::Failed)).1, "x-circle");
        assert_eq!(status_presentation(Some(TestStatus::Warning)).2, "警告");
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        let (class, icon_name, _) = status_presentation(TestStatus::parse("skipped"));
        assert_eq!(class, "status status--unknown");
        assert_eq!(icon_name, "help");
    }
}
