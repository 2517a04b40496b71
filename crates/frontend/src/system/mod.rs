pub mod api;
pub mod status_card;
