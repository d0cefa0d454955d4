//! Zone rule

use crate::features::model::{ModelObject, Zone};
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{Handle, IdfRecord, ObjectType};

/// `Zone` -> [`Zone`]
///
/// Fields: name, ceiling height, volume.
pub struct ZoneRule;

impl TranslationRule for ZoneRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Zone
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let Some(name) = record.name() else {
            ctx.error(
                record.handle,
                format!("{} is missing a name", record.brief_description()),
            );
            return None;
        };

        let zone = Zone {
            name: name.to_string(),
            ceiling_height: record.real_field(1),
            volume: record.real_field(2),
        };
        Some(vec![ctx.model_mut().add(ModelObject::Zone(zone))])
    }
}
