//! Version rule

use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{Handle, IdfRecord, ObjectType};

/// `Version` -> nothing
///
/// The model has no version counterpart; the rule declines without an
/// error and the record lands in the untranslated set.
pub struct VersionRule;

impl TranslationRule for VersionRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Version
    }

    fn translate(&self, _record: &IdfRecord, _ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        None
    }
}
