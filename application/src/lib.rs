pub mod schema;
pub mod service;
pub mod transfer;
