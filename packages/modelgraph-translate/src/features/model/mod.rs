//! Model Feature
//!
//! The destination strongly-typed object graph. Rules create objects here
//! through the `Model` arena; the translation engine never reaches into
//! object internals.
//!
//! ## Structure
//! - `domain/` - Model arena, ModelObject variants

pub mod domain;

pub use domain::{
    Building, Construction, DxCoil, Fan, HeatPumpWaterHeater, Material, Model, ModelObject,
    ScheduleConstant, Surface, WaterHeaterTank, Zone,
};
