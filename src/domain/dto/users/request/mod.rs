pub mod auth_request;
pub mod create_user_request;
pub mod update_profile_request;

pub use auth_request::*;
pub use create_user_request::*;
pub use update_profile_request::*;
