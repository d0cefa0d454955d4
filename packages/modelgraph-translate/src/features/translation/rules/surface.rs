//! Surface rule
//!
//! Resolves the zone and construction this surface belongs to through
//! re-entrant dispatch, in whichever direction the references point. Two
//! interior surfaces reference each other as adjacent pair; that cycle is
//! broken by creating the surface first and wiring the pair link post-hoc
//! from whichever side completes with both handles available.

use crate::features::model::{Model, ModelObject, Surface};
use crate::features::translation::domain::MapStatus;
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{FieldValue, Handle, IdfRecord, ObjectType};

/// `BuildingSurface:Detailed` -> [`Surface`]
///
/// Fields: name, surface type, construction ref, zone ref, adjacent
/// surface ref.
pub struct SurfaceRule;

impl TranslationRule for SurfaceRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Surface
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let Some(name) = record.name().map(str::to_string) else {
            ctx.error(
                record.handle,
                format!("{} is missing a name", record.brief_description()),
            );
            return None;
        };

        let surface_type = record
            .string_field(1)
            .unwrap_or("Wall")
            .to_string();

        let construction = self.resolve(record, ctx, 2, "construction");
        let zone = self.resolve(record, ctx, 3, "zone");

        let surface = ctx.model_mut().add(ModelObject::Surface(Surface {
            name,
            surface_type,
            construction,
            zone,
            adjacent_surface: None,
        }));

        if let Some(adjacent) = record.reference_field(4) {
            match ctx.status(adjacent) {
                // The adjacent surface's own dispatch is still open above
                // us on the stack; it gets both handles once we return and
                // wires the pair from that side.
                MapStatus::InProgress => {}
                _ => {
                    if let Some(peer) = ctx.translate(adjacent) {
                        wire_adjacent_pair(ctx.model_mut(), surface, peer);
                    }
                }
            }
        }

        Some(vec![surface])
    }
}

impl SurfaceRule {
    /// Resolve a reference field to the primary destination handle of the
    /// referenced record, warning on unresolved names. Dangling handles are
    /// reported by the dispatcher; the surface proceeds with the link absent.
    fn resolve(
        &self,
        record: &IdfRecord,
        ctx: &mut dyn RuleContext,
        index: usize,
        what: &str,
    ) -> Option<Handle> {
        match record.field(index) {
            Some(FieldValue::Reference(target)) => ctx.translate(*target),
            Some(FieldValue::String(raw)) => {
                ctx.warn(
                    record.handle,
                    format!(
                        "{} has unresolved {what} reference '{raw}'",
                        record.brief_description()
                    ),
                );
                None
            }
            _ => None,
        }
    }
}

/// Wire both directions of an adjacent-surface pair
fn wire_adjacent_pair(model: &mut Model, a: Handle, b: Handle) {
    if let Some(surface) = model.get_mut(a).and_then(ModelObject::as_surface_mut) {
        surface.adjacent_surface = Some(b);
    }
    if let Some(surface) = model.get_mut(b).and_then(ModelObject::as_surface_mut) {
        surface.adjacent_surface = Some(a);
    }
}
