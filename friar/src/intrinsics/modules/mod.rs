pub mod collections;
pub mod io;
