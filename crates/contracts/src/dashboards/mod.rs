pub mod d100_test_hub;
