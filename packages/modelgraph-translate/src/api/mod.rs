//! Convenience API
//!
//! Composes the loading front-end with the translation engine for callers
//! that just want a model from a file path.

use std::path::Path;

use tracing::{info, warn};

use crate::features::loading::IdfParser;
use crate::features::model::Model;
use crate::features::translation::ReverseTranslator;

/// Load, parse and translate a file; `None` if the file could not be loaded
///
/// Per-record problems do not fail the call: the best-effort model is
/// returned and diagnostic counts are logged. Callers needing the full
/// diagnostics should drive [`ReverseTranslator`] directly.
pub fn load_and_translate(path: impl AsRef<Path>) -> Option<Model> {
    let path = path.as_ref();
    let workspace = match IdfParser::load_file(path) {
        Ok(workspace) => workspace,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not load input file");
            return None;
        }
    };

    let translator = ReverseTranslator::default();
    let result = translator.translate_workspace(&workspace);
    info!(
        path = %path.display(),
        objects = result.model.len(),
        warnings = result.warnings().len(),
        errors = result.errors().len(),
        untranslated = result.untranslated.len(),
        "load and translate complete"
    );
    Some(result.model)
}
