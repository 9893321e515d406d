mod hex;
mod short;

pub use hex::*;
pub use short::*;
