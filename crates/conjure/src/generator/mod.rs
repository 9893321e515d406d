mod numeric;
#[cfg(test)]
mod tests;
mod uuid;

pub use numeric::*;
pub use uuid::*;
