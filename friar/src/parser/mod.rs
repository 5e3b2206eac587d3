pub use parser::*;

mod combinators;
mod declaration;
mod expression;
mod parser;
mod statement;

#[cfg(test)]
mod testing;
