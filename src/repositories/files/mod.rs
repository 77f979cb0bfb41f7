pub mod file_repo;

pub use file_repo::*;
