pub mod operations;
pub mod photo;
