//! Loading Feature
//!
//! Line-oriented front-end that turns raw input text into the workspace
//! the translation engine consumes. Orthogonal to translation logic.
//!
//! ## Structure
//! - `domain/`         - raw scanned statements
//! - `infrastructure/` - IdfParser

pub mod domain;
pub mod infrastructure;

pub use domain::RawObject;
pub use infrastructure::IdfParser;
