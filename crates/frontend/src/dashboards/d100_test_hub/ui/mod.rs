mod dashboard;
mod history_table;
mod results_panel;
mod trend_chart;
mod type_cards;

pub use dashboard::TestHubDashboard;
