pub(crate) mod gate;
pub(crate) mod login;
pub(crate) mod welcome;

// re-export items from sub-modules
pub use gate::*;
pub use login::*;
pub use welcome::*;
