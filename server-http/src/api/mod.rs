pub mod requests;
pub mod responses;

pub use requests::{DeleteRequest, GetQuery, SetRequest};
pub use responses::{CacheResponse, HealthResponse};
