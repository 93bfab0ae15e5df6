//! Ratatui widgets for the menu browser

mod category_tabs;
mod dropdown;
mod help_bar;
mod menu_list;
mod search_bar;
mod status_bar;

pub use category_tabs::{CategoryTabs, cycle_category};
pub use dropdown::SuggestionDropdown;
pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use menu_list::MenuList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
