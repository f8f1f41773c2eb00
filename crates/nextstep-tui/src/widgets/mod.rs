//! Widgets for the NextStep TUI

mod article_list;
mod country_card;
mod header;
mod status_bar;

pub use article_list::ArticleList;
pub use country_card::{CountryCard, CARD_HEIGHT, UPDATE_CHAR_BUDGET};
pub use header::MainHeader;
pub use status_bar::StatusBar;
