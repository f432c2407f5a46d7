pub mod claims;
pub mod data_stores;
pub mod deny_response;
pub mod login_request;
pub mod login_response;
pub mod welcome_response;
mod user;

pub use claims::*;
pub use data_stores::*;
pub use deny_response::*;
pub use login_request::*;
pub use login_response::*;
pub use welcome_response::*;
pub use user::*;
