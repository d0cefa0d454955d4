//! Material rule

use crate::features::model::{Material, ModelObject};
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{Handle, IdfRecord, ObjectType};

/// `Material` -> [`Material`]
///
/// Fields: name, roughness, thickness, conductivity, density, specific
/// heat. Thickness and conductivity are required; a record missing either
/// is malformed and yields no object.
pub struct MaterialRule;

impl TranslationRule for MaterialRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Material
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let Some(name) = record.name().map(str::to_string) else {
            ctx.error(
                record.handle,
                format!("{} is missing a name", record.brief_description()),
            );
            return None;
        };

        let Some(thickness) = record.real_field(2) else {
            ctx.error(
                record.handle,
                format!(
                    "{} is missing required field Thickness",
                    record.brief_description()
                ),
            );
            return None;
        };
        let Some(conductivity) = record.real_field(3) else {
            ctx.error(
                record.handle,
                format!(
                    "{} is missing required field Conductivity",
                    record.brief_description()
                ),
            );
            return None;
        };

        let material = Material {
            name,
            roughness: record.string_field(1).unwrap_or("MediumRough").to_string(),
            thickness,
            conductivity,
            density: record.real_field(4),
            specific_heat: record.real_field(5),
        };
        Some(vec![ctx.model_mut().add(ModelObject::Material(material))])
    }
}
