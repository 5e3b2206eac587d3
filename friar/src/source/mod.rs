pub use input::*;
pub use source::*;

mod input;
mod source;
