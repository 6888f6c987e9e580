use crate::dashboards::d100_test_hub::mock::title_for;
use crate::dashboards::d100_test_hub::runner::TestRunner;
use crate::shared::components::ui::Button;
use crate::shared::components::{StatCard, StatTone};
use crate::shared::format::format_duration;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary of the last run; hidden until a result exists.
#[component]
pub fn ResultsPanel(runner: TestRunner) -> impl IntoView {
    move || {
        runner.result.get().map(|result| {
            let title = title_for(result.kind);
            let stamp = result.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();

            view! {
                <section class="results-panel">
                    <div class="results-panel__head">
                        <h3 class="results-panel__title">"测试结果"</h3>
                        <Button
                            variant="ghost"
                            size="sm"
                            class="results-panel__close"
                            on_click=Callback::new(move |_| runner.dismiss())
                        >
                            {icon("close")}
                            <span>"关闭"</span>
                        </Button>
                    </div>

                    <div class="results-panel__grid">
                        <StatCard label="通过测试" icon_name="check-circle" value=result.passed.to_string() tone=StatTone::Success />
                        <StatCard label="失败测试" icon_name="x-circle" value=result.failed.to_string() tone=StatTone::Error />
                        <StatCard label="测试时长" icon_name="clock" value=format_duration(result.duration_secs) tone=StatTone::Info />
                    </div>

                    <div class="results-panel__meta">
                        {icon("info")}
                        <span>"测试类型: " {title}</span>
                        <span class="results-panel__dot">"•"</span>
                        <span>"测试时间: " {stamp}</span>
                    </div>
                </section>
            }
        })
    }
}
