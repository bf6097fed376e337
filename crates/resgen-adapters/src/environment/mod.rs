//! Environment adapters.

mod map;
mod process;

pub use map::MapEnvironment;
pub use process::ProcessEnvironment;
