//! Loading infrastructure

mod parser;

pub use parser::IdfParser;
