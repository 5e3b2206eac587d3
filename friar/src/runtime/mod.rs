pub use environment::*;
pub use interpreter::*;
pub use runtime::*;

mod environment;
mod interpreter;
mod runtime;

#[cfg(test)]
pub(crate) mod testing;
