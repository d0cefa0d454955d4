//! Translation infrastructure

mod dispatcher;

pub use dispatcher::ReverseTranslator;
