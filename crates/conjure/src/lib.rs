mod codec;
mod error;
mod generator;
mod global;
mod id;
mod lorem;
#[cfg(test)]
mod mock;
mod password;
mod rand;
mod sampler;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::global::*;
pub use crate::id::*;
pub use crate::lorem::*;
pub use crate::password::*;
pub use crate::rand::*;
pub use crate::sampler::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
