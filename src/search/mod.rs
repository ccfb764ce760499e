pub mod date;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rules;
pub mod service;

pub use error::*;
pub use models::*;
pub use service::*;
