//! UI Components
//!
//! Leptos views over the shared item store.

mod header;
mod add_item_form;
mod item_row;
mod item_list;
mod filters;
mod stats_footer;

pub use header::Header;
pub use add_item_form::AddItemForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use filters::Filters;
pub use stats_footer::StatsFooter;
