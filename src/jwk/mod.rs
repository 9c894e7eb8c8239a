mod error;
mod key;
mod pem;

pub use error::*;
pub use key::*;
