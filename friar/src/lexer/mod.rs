pub use lexer::*;
pub use token::*;

mod lexer;
pub mod parser;
#[macro_use]
mod testing;
mod token;
