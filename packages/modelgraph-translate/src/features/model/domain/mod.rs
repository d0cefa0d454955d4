// Model Domain - Destination Object Graph
//
// Pure domain models (hexagonal architecture). The arena owns every object
// and hands out destination handles; objects cross-link by handle so links
// can be wired after creation, which is what makes deferred linking across
// reference cycles possible.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::shared::models::Handle;

// ============================================================
// Typed domain objects
// ============================================================

/// Thermal zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub ceiling_height: Option<f64>,
    pub volume: Option<f64>,
}

/// Heat-transfer surface (wall, roof, floor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub surface_type: String,
    pub construction: Option<Handle>,
    pub zone: Option<Handle>,
    /// The other side of an interior surface; wired post-hoc when the pair
    /// forms a reference cycle
    pub adjacent_surface: Option<Handle>,
}

/// Layered construction assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    pub name: String,
    /// Material layers, outside to inside
    pub layers: Vec<Handle>,
}

/// Opaque material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub roughness: String,
    pub thickness: f64,
    pub conductivity: f64,
    pub density: Option<f64>,
    pub specific_heat: Option<f64>,
}

/// Constant-value schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConstant {
    pub name: String,
    pub value: f64,
}

/// Top-level building object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub north_axis: f64,
}

/// Heat-pump water heater composite; spawns its own tank, coil and fan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatPumpWaterHeater {
    pub name: String,
    pub tank: Handle,
    pub dx_coil: Handle,
    pub fan: Handle,
}

/// Storage tank sub-component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterHeaterTank {
    pub name: String,
    pub volume: Option<f64>,
}

/// DX heating coil sub-component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DxCoil {
    pub name: String,
    pub rated_capacity: Option<f64>,
}

/// On/off fan sub-component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fan {
    pub name: String,
    pub maximum_flow_rate: Option<f64>,
}

// ============================================================
// Object sum type
// ============================================================

/// Any object the model can hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelObject {
    Zone(Zone),
    Surface(Surface),
    Construction(Construction),
    Material(Material),
    ScheduleConstant(ScheduleConstant),
    Building(Building),
    HeatPumpWaterHeater(HeatPumpWaterHeater),
    WaterHeaterTank(WaterHeaterTank),
    DxCoil(DxCoil),
    Fan(Fan),
}

impl ModelObject {
    pub fn name(&self) -> &str {
        match self {
            ModelObject::Zone(o) => &o.name,
            ModelObject::Surface(o) => &o.name,
            ModelObject::Construction(o) => &o.name,
            ModelObject::Material(o) => &o.name,
            ModelObject::ScheduleConstant(o) => &o.name,
            ModelObject::Building(o) => &o.name,
            ModelObject::HeatPumpWaterHeater(o) => &o.name,
            ModelObject::WaterHeaterTank(o) => &o.name,
            ModelObject::DxCoil(o) => &o.name,
            ModelObject::Fan(o) => &o.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelObject::Zone(_) => "Zone",
            ModelObject::Surface(_) => "Surface",
            ModelObject::Construction(_) => "Construction",
            ModelObject::Material(_) => "Material",
            ModelObject::ScheduleConstant(_) => "ScheduleConstant",
            ModelObject::Building(_) => "Building",
            ModelObject::HeatPumpWaterHeater(_) => "HeatPumpWaterHeater",
            ModelObject::WaterHeaterTank(_) => "WaterHeaterTank",
            ModelObject::DxCoil(_) => "DxCoil",
            ModelObject::Fan(_) => "Fan",
        }
    }

    pub fn as_zone(&self) -> Option<&Zone> {
        match self {
            ModelObject::Zone(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_surface(&self) -> Option<&Surface> {
        match self {
            ModelObject::Surface(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_surface_mut(&mut self) -> Option<&mut Surface> {
        match self {
            ModelObject::Surface(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_construction(&self) -> Option<&Construction> {
        match self {
            ModelObject::Construction(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_material(&self) -> Option<&Material> {
        match self {
            ModelObject::Material(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_heat_pump_water_heater(&self) -> Option<&HeatPumpWaterHeater> {
        match self {
            ModelObject::HeatPumpWaterHeater(o) => Some(o),
            _ => None,
        }
    }
}

// ============================================================
// Model arena
// ============================================================

/// The destination object graph
///
/// Insertion order is preserved for deterministic iteration; lookups go
/// through the handle index.
#[derive(Debug, Clone, Default)]
pub struct Model {
    objects: AHashMap<Handle, ModelObject>,
    order: Vec<Handle>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, minting its destination handle
    pub fn add(&mut self, object: ModelObject) -> Handle {
        let handle = Handle::new();
        self.objects.insert(handle, object);
        self.order.push(handle);
        handle
    }

    pub fn get(&self, handle: Handle) -> Option<&ModelObject> {
        self.objects.get(&handle)
    }

    /// Mutable access for post-hoc link wiring
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut ModelObject> {
        self.objects.get_mut(&handle)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.objects.contains_key(&handle)
    }

    /// Objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &ModelObject)> {
        self.order.iter().filter_map(|h| self.objects.get(h).map(|o| (*h, o)))
    }

    pub fn objects_of_kind(&self, kind: &str) -> Vec<(Handle, &ModelObject)> {
        self.iter().filter(|(_, o)| o.kind() == kind).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<(Handle, &ModelObject)> {
        self.iter().find(|(_, o)| o.name() == name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
