pub mod api;
pub mod app;
pub mod log;
pub mod net;
pub mod utils;

pub use utils::*;
