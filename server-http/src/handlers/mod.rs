pub mod cache;

pub use cache::basic::{delete_value, get_value, set_value};
pub use cache::flush::flush;
pub use cache::health::health_check;
