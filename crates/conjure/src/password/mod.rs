mod generator;
mod policy;
mod strength;
#[cfg(test)]
mod tests;

pub use generator::*;
pub use policy::*;
pub use strength::*;
