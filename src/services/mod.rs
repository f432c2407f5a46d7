pub mod access_gate;
pub mod auth;
pub mod hashmap_user_store;
pub mod token_codec;

pub use access_gate::*;
pub use auth::*;
pub use hashmap_user_store::*;
pub use token_codec::*;
