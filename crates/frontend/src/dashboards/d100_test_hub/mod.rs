pub mod chart;
pub mod mock;
pub mod runner;
pub mod ui;
