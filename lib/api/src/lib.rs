pub mod error;
pub mod rest;

pub use error::{ApiError, ErrorBody};
pub use rest::{configure, RestApi};
