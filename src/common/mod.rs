pub mod response;

pub use response::{Created, ErrorBody, HAL_JSON, Hal};
