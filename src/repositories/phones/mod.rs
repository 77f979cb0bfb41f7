pub mod phone_repo;

pub use phone_repo::*;
