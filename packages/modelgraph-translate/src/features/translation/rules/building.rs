//! Building rule

use crate::features::model::{Building, ModelObject};
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{Handle, IdfRecord, ObjectType};

/// `Building` -> [`Building`]
///
/// Fields: name, north axis. Both default rather than fail.
pub struct BuildingRule;

impl TranslationRule for BuildingRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Building
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let building = Building {
            name: record.name().unwrap_or("Building").to_string(),
            north_axis: record.real_field(1).unwrap_or(0.0),
        };
        Some(vec![ctx.model_mut().add(ModelObject::Building(building))])
    }
}
