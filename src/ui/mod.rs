pub mod filter_select;
pub mod payload_input;
pub mod response_view;
pub mod theme;
