use super::history_table::HistoryTable;
use super::results_panel::ResultsPanel;
use super::trend_chart::TrendChart;
use super::type_cards::TestTypeCards;
use crate::dashboards::d100_test_hub::runner::TestRunner;
use crate::shared::components::ui::{Button, Tabs, TabsContent, TabsList, TabsTrigger};
use crate::shared::icons::icon;
use leptos::prelude::*;

const REPORT_TABS: &[&str] = &["history", "trend"];

/// TestHub landing dashboard
#[component]
pub fn TestHubDashboard() -> impl IntoView {
    let runner = TestRunner::new();

    view! {
        <div id="d100_test_hub--dashboard" class="test-hub">
            <section class="hero">
                <h2 class="hero__title">"全功能测试平台"</h2>
                <p class="hero__subtitle">
                    "一站式测试解决方案，支持单元测试、API测试、UI测试等多种测试类型，帮助您确保应用程序质量"
                </p>
            </section>

            <ResultsPanel runner=runner />

            <TestTypeCards runner=runner />

            <section class="section">
                <Tabs ids=REPORT_TABS default_value="history">
                    <div class="section__bar">
                        <TabsList>
                            <TabsTrigger value="history">{icon("history")} "测试历史"</TabsTrigger>
                            <TabsTrigger value="trend">{icon("chart")} "性能测试趋势"</TabsTrigger>
                        </TabsList>
                        <Button variant="ghost" size="sm">"查看全部"</Button>
                    </div>
                    <TabsContent value="history">
                        <HistoryTable />
                    </TabsContent>
                    <TabsContent value="trend">
                        <TrendChart />
                    </TabsContent>
                </Tabs>
            </section>
        </div>
    }
}
