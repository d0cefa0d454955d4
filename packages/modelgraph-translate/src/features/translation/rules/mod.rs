//! Per-object-type translation rules
//!
//! Each rule owns one source object type and maps its fields onto typed
//! model objects, requesting related records through the dispatcher handle.
//! The full system carries hundreds of these; this set covers the object
//! types the engine's behaviors are exercised by.

pub mod building;
pub mod construction;
pub mod material;
pub mod schedule;
pub mod surface;
pub mod version;
pub mod water_heater;
pub mod zone;

pub use building::BuildingRule;
pub use construction::ConstructionRule;
pub use material::MaterialRule;
pub use schedule::ScheduleConstantRule;
pub use surface::SurfaceRule;
pub use version::VersionRule;
pub use water_heater::WaterHeaterHeatPumpRule;
pub use zone::ZoneRule;

use super::ports::RuleRegistry;

/// Create a registry with every built-in rule registered
pub fn create_default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(ZoneRule));
    registry.register(Box::new(SurfaceRule));
    registry.register(Box::new(ConstructionRule));
    registry.register(Box::new(MaterialRule));
    registry.register(Box::new(ScheduleConstantRule));
    registry.register(Box::new(BuildingRule));
    registry.register(Box::new(WaterHeaterHeatPumpRule));
    registry.register(Box::new(VersionRule));
    registry
}
