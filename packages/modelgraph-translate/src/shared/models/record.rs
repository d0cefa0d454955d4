//! Source records
//!
//! A record carries an object-type tag, an ordered field list, and a stable
//! handle. Records are immutable once the workspace is loaded.

use serde::{Deserialize, Serialize};

use super::{FieldValue, Handle};

/// Object-type tag of a source record
///
/// Known types get their own variant; everything else falls through to
/// `Other` and is left for the untranslated set unless a rule is registered
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Zone,
    Surface,
    Construction,
    Material,
    ScheduleConstant,
    Building,
    WaterHeaterHeatPump,
    Version,
    Other(String),
}

impl ObjectType {
    /// Resolve a raw tag, case-insensitively
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "zone" => ObjectType::Zone,
            "buildingsurface:detailed" => ObjectType::Surface,
            "construction" => ObjectType::Construction,
            "material" => ObjectType::Material,
            "schedule:constant" => ObjectType::ScheduleConstant,
            "building" => ObjectType::Building,
            "waterheater:heatpump" => ObjectType::WaterHeaterHeatPump,
            "version" => ObjectType::Version,
            _ => ObjectType::Other(tag.trim().to_string()),
        }
    }

    /// Whether a field position may hold a cross-reference
    ///
    /// Enumeration slots (a surface's type keyword, a material's roughness)
    /// never name another record; name resolution must not rewrite them
    /// even when the keyword collides with a declared name. Field 0 is the
    /// record's own name and is excluded by the resolver itself.
    pub fn is_reference_position(&self, index: usize) -> bool {
        match self {
            ObjectType::Surface | ObjectType::Material => index != 1,
            _ => true,
        }
    }

    /// Canonical tag as it appears in the input format
    pub fn tag(&self) -> &str {
        match self {
            ObjectType::Zone => "Zone",
            ObjectType::Surface => "BuildingSurface:Detailed",
            ObjectType::Construction => "Construction",
            ObjectType::Material => "Material",
            ObjectType::ScheduleConstant => "Schedule:Constant",
            ObjectType::Building => "Building",
            ObjectType::WaterHeaterHeatPump => "WaterHeater:HeatPump",
            ObjectType::Version => "Version",
            ObjectType::Other(tag) => tag.as_str(),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One entry in the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfRecord {
    pub handle: Handle,
    pub object_type: ObjectType,
    pub fields: Vec<FieldValue>,
}

impl IdfRecord {
    pub fn new(object_type: ObjectType, fields: Vec<FieldValue>) -> Self {
        Self {
            handle: Handle::new(),
            object_type,
            fields,
        }
    }

    /// Declared name, by convention the first field
    pub fn name(&self) -> Option<&str> {
        self.fields.first().and_then(|f| f.as_str())
    }

    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index)
    }

    pub fn real_field(&self, index: usize) -> Option<f64> {
        self.field(index).and_then(|f| f.as_real())
    }

    pub fn string_field(&self, index: usize) -> Option<&str> {
        self.field(index).and_then(|f| f.as_str())
    }

    pub fn reference_field(&self, index: usize) -> Option<Handle> {
        self.field(index).and_then(|f| f.as_reference())
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Short human-readable description for diagnostics
    pub fn brief_description(&self) -> String {
        match self.name() {
            Some(name) => format!("{} '{}'", self.object_type, name),
            None => format!("{} <unnamed>", self.object_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        let t = ObjectType::from_tag("buildingSurface:detailed");
        assert_eq!(t, ObjectType::Surface);
        assert_eq!(t.tag(), "BuildingSurface:Detailed");
    }

    #[test]
    fn unknown_tags_preserved() {
        let t = ObjectType::from_tag("Output:Variable");
        assert_eq!(t, ObjectType::Other("Output:Variable".to_string()));
        assert_eq!(t.tag(), "Output:Variable");
    }

    #[test]
    fn record_name_is_first_field() {
        let r = IdfRecord::new(
            ObjectType::Zone,
            vec![FieldValue::String("Office".into()), FieldValue::Real(3.0)],
        );
        assert_eq!(r.name(), Some("Office"));
        assert_eq!(r.real_field(1), Some(3.0));
        assert_eq!(r.brief_description(), "Zone 'Office'");
    }
}
