//! Feature slices
//!
//! - `loading/`     - line-oriented front-end producing the workspace
//! - `model/`       - destination typed object graph
//! - `translation/` - the reverse-translation engine (the core)

pub mod loading;
pub mod model;
pub mod translation;
