mod gate;
mod login;

pub use gate::*;
pub use login::*;
