pub mod ast;
pub mod cli;
pub mod errors;
pub mod intrinsics;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod source;
