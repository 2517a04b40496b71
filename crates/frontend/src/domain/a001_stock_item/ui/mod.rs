pub mod item_card;
pub mod lookup_page;
pub mod search_input;

pub use lookup_page::LookupPage;
