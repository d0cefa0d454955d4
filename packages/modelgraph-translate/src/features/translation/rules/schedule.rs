//! Constant schedule rule

use crate::features::model::{ModelObject, ScheduleConstant};
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{Handle, IdfRecord, ObjectType};

/// `Schedule:Constant` -> [`ScheduleConstant`]
///
/// Fields: name, hourly value. A missing value defaults to 0.0 with a
/// warning rather than failing the record.
pub struct ScheduleConstantRule;

impl TranslationRule for ScheduleConstantRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::ScheduleConstant
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let Some(name) = record.name().map(str::to_string) else {
            ctx.error(
                record.handle,
                format!("{} is missing a name", record.brief_description()),
            );
            return None;
        };

        let value = match record.real_field(1) {
            Some(value) => value,
            None => {
                ctx.warn(
                    record.handle,
                    format!(
                        "{} has no hourly value, defaulting to 0.0",
                        record.brief_description()
                    ),
                );
                0.0
            }
        };

        let schedule = ScheduleConstant { name, value };
        Some(vec![ctx
            .model_mut()
            .add(ModelObject::ScheduleConstant(schedule))])
    }
}
