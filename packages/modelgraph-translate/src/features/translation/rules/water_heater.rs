//! Heat-pump water heater rule
//!
//! Fan-out rule: one source record becomes a composite plus its default
//! sub-components. The rule links the sub-objects itself; the dispatcher
//! only tracks the identity-to-objects association, primary first.

use crate::features::model::{DxCoil, Fan, HeatPumpWaterHeater, ModelObject, WaterHeaterTank};
use crate::features::translation::ports::{RuleContext, TranslationRule};
use crate::shared::models::{Handle, IdfRecord, ObjectType};

/// `WaterHeater:HeatPump` -> [`HeatPumpWaterHeater`, tank, coil, fan]
///
/// Fields: name, tank volume, rated coil capacity, fan flow rate.
pub struct WaterHeaterHeatPumpRule;

impl TranslationRule for WaterHeaterHeatPumpRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::WaterHeaterHeatPump
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let Some(name) = record.name().map(str::to_string) else {
            ctx.error(
                record.handle,
                format!("{} is missing a name", record.brief_description()),
            );
            return None;
        };

        let model = ctx.model_mut();
        let tank = model.add(ModelObject::WaterHeaterTank(WaterHeaterTank {
            name: format!("{name} Tank"),
            volume: record.real_field(1),
        }));
        let dx_coil = model.add(ModelObject::DxCoil(DxCoil {
            name: format!("{name} Coil"),
            rated_capacity: record.real_field(2),
        }));
        let fan = model.add(ModelObject::Fan(Fan {
            name: format!("{name} Fan"),
            maximum_flow_rate: record.real_field(3),
        }));
        let heat_pump = model.add(ModelObject::HeatPumpWaterHeater(HeatPumpWaterHeater {
            name,
            tank,
            dx_coil,
            fan,
        }));

        Some(vec![heat_pump, tank, dx_coil, fan])
    }
}
