pub mod card;
pub mod config;
pub mod list;

pub use card::{IllustCard, illust_cards};
pub use list::PagedList;
