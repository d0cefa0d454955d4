//! Construction rule

use crate::features::model::{Construction, ModelObject};
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{FieldValue, Handle, IdfRecord, ObjectType};

/// `Construction` -> [`Construction`]
///
/// Fields: name, then one material reference per layer, outside to inside.
/// Layers that fail to translate are dropped from the assembly with an
/// error; the construction itself still goes into the model.
pub struct ConstructionRule;

impl TranslationRule for ConstructionRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Construction
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let Some(name) = record.name().map(str::to_string) else {
            ctx.error(
                record.handle,
                format!("{} is missing a name", record.brief_description()),
            );
            return None;
        };

        let mut layers = Vec::new();
        for index in 1..record.num_fields() {
            match record.field(index) {
                Some(FieldValue::Reference(target)) => match ctx.translate(*target) {
                    Some(material) => layers.push(material),
                    None => ctx.error(
                        record.handle,
                        format!(
                            "{} could not resolve material layer {index}",
                            record.brief_description()
                        ),
                    ),
                },
                Some(FieldValue::String(raw)) => ctx.error(
                    record.handle,
                    format!(
                        "{} references unknown material '{raw}'",
                        record.brief_description()
                    ),
                ),
                Some(FieldValue::Empty) | None => {}
                Some(other) => ctx.error(
                    record.handle,
                    format!(
                        "{} has non-reference layer field '{other}'",
                        record.brief_description()
                    ),
                ),
            }
        }

        let construction = Construction { name, layers };
        Some(vec![ctx
            .model_mut()
            .add(ModelObject::Construction(construction))])
    }
}
