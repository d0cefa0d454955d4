//! Source workspace
//!
//! Ordered collection of records plus handle and type indexes. Read-only
//! during translation; declared order drives top-level enumeration.

use ahash::AHashMap;

use super::{FieldValue, Handle, IdfRecord, ObjectType};

/// The loosely-typed source object database
///
/// Not serialized directly; the record list is the canonical form and the
/// indexes are derived from it.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    records: Vec<IdfRecord>,
    by_handle: AHashMap<Handle, usize>,
    by_type: AHashMap<ObjectType, Vec<Handle>>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keeping declared order
    pub fn add_record(&mut self, record: IdfRecord) -> Handle {
        let handle = record.handle;
        self.by_handle.insert(handle, self.records.len());
        self.by_type
            .entry(record.object_type.clone())
            .or_default()
            .push(handle);
        self.records.push(record);
        handle
    }

    /// Convenience constructor used by tests and the parser
    pub fn add(&mut self, object_type: ObjectType, fields: Vec<FieldValue>) -> Handle {
        self.add_record(IdfRecord::new(object_type, fields))
    }

    pub fn get(&self, handle: Handle) -> Option<&IdfRecord> {
        self.by_handle.get(&handle).map(|&i| &self.records[i])
    }

    /// Records in declared order
    pub fn records(&self) -> impl Iterator<Item = &IdfRecord> {
        self.records.iter()
    }

    /// Handles of all records with the given type, in declared order
    pub fn objects_of_type(&self, object_type: &ObjectType) -> &[Handle] {
        self.by_type
            .get(object_type)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Find a record of the given type by declared name
    pub fn find_by_name(&self, object_type: &ObjectType, name: &str) -> Option<&IdfRecord> {
        self.objects_of_type(object_type)
            .iter()
            .filter_map(|h| self.get(*h))
            .find(|r| r.name() == Some(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
