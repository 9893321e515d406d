mod fallback;
mod interface;
mod os;
mod pseudo;
mod thread_random;

pub use fallback::*;
pub use interface::*;
pub use os::*;
pub use pseudo::*;
pub use thread_random::*;
