pub use logging::*;
pub use read::*;

mod logging;
mod read;
