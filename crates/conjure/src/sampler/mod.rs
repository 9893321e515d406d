mod bounded;
mod number;

pub use bounded::*;
pub use number::*;
