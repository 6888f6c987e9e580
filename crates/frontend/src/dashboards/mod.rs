pub mod d100_test_hub;

pub use d100_test_hub::ui::TestHubDashboard;
