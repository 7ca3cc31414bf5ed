pub mod blog;
pub mod catalog;
pub mod error;
