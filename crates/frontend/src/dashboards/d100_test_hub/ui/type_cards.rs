use crate::dashboards::d100_test_hub::mock::test_types;
use crate::dashboards::d100_test_hub::runner::TestRunner;
use crate::shared::components::ui::{Button, Card, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stagger between consecutive card animations
const CARD_DELAY_STEP_MS: u32 = 80;

#[component]
pub fn TestTypeCards(runner: TestRunner) -> impl IntoView {
    let cards = test_types()
        .into_iter()
        .enumerate()
        .map(|(i, test)| {
            let kind = test.kind;
            let running = Signal::derive(move || runner.is_running(kind));
            let badge_class = format!("test-type-card__badge test-type-card__badge--{}", test.accent);
            let delay_ms = i as u32 * CARD_DELAY_STEP_MS;

            view! {
                <Card delay_ms=delay_ms class="test-type-card">
                    <CardHeader>
                        <CardTitle class="test-type-card__title">
                            <span class=badge_class>{icon(&test.icon)}</span>
                            {test.title}
                        </CardTitle>
                        <CardDescription>{test.description}</CardDescription>
                    </CardHeader>
                    <CardFooter>
                        <Button
                            class="test-type-card__run"
                            disabled=running
                            on_click=Callback::new(move |_| runner.run(kind))
                        >
                            {move || {
                                if running.get() {
                                    view! {
                                        <span class="spin">{icon("loader")}</span>
                                        <span>"运行中..."</span>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        {icon("play")}
                                        <span>"运行测试"</span>
                                    }
                                    .into_any()
                                }
                            }}
                        </Button>
                    </CardFooter>
                </Card>
            }
        })
        .collect_view();

    view! {
        <section class="section">
            <h3 class="section__title">{icon("grid")} "测试类型"</h3>
            <div class="test-type-grid">{cards}</div>
        </section>
    }
}
