//! Input file parser
//!
//! Format: `!` starts a comment, an object statement is a type tag followed
//! by comma-terminated fields and a closing semicolon, fields may continue
//! across lines. After scanning, declared-name cross-references are
//! resolved to handles; forward references are fine because resolution runs
//! over the fully-scanned record list. Unresolvable names stay as strings
//! for the rules to report.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::errors::{Result, TranslateError};
use crate::features::loading::domain::RawObject;
use crate::shared::models::{FieldValue, Handle, IdfRecord, ObjectType, Workspace};

/// Line-oriented front-end producing the source workspace
pub struct IdfParser;

impl IdfParser {
    /// Read and parse a file into a workspace
    pub fn load_file(path: impl AsRef<Path>) -> Result<Workspace> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&text)
    }

    /// Parse input text into a workspace
    pub fn parse_str(input: &str) -> Result<Workspace> {
        let raw_objects = scan(input)?;
        debug!(objects = raw_objects.len(), "scanned input");

        // Assign handles and type fields first, then resolve names, so
        // references can point forward as well as backward.
        let mut records: Vec<IdfRecord> = raw_objects
            .into_iter()
            .map(|raw| {
                let fields = raw
                    .fields
                    .iter()
                    .map(|token| FieldValue::from_token(token))
                    .collect();
                IdfRecord::new(ObjectType::from_tag(&raw.tag), fields)
            })
            .collect();

        resolve_references(&mut records);

        let mut workspace = Workspace::new();
        for record in records {
            workspace.add_record(record);
        }
        Ok(workspace)
    }
}

/// Split input into raw statements, honoring comments
fn scan(input: &str) -> Result<Vec<RawObject>> {
    let mut statements = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in input.lines() {
        let line = match line.find('!') {
            Some(pos) => &line[..pos],
            None => line,
        };
        for ch in line.chars() {
            match ch {
                ',' => {
                    tokens.push(current.trim().to_string());
                    current.clear();
                }
                ';' => {
                    tokens.push(current.trim().to_string());
                    current.clear();
                    finish_statement(&mut statements, &mut tokens)?;
                }
                _ => current.push(ch),
            }
        }
        // Tokens never span lines; anything pending belongs to the next
        // delimiter on a later line.
        current.push(' ');
    }

    if !current.trim().is_empty() || !tokens.is_empty() {
        return Err(TranslateError::parse_error(
            "unterminated object at end of input (missing ';')",
        ));
    }
    Ok(statements)
}

fn finish_statement(statements: &mut Vec<RawObject>, tokens: &mut Vec<String>) -> Result<()> {
    let mut fields = std::mem::take(tokens);
    if fields.is_empty() {
        return Err(TranslateError::parse_error("object statement with no type tag"));
    }
    let tag = fields.remove(0);
    if tag.is_empty() {
        return Err(TranslateError::parse_error("object statement with empty type tag"));
    }
    statements.push(RawObject::new(tag, fields));
    Ok(())
}

/// Turn string fields that match a declared name into references
///
/// Matching is case-insensitive, as names are in the input format. The
/// name field itself (field 0) and known enumeration positions are never
/// rewritten. On duplicate declared names the first record wins.
fn resolve_references(records: &mut [IdfRecord]) {
    let mut by_name: FxHashMap<String, Handle> = FxHashMap::default();
    for record in records.iter() {
        if let Some(name) = record.name() {
            let key = name.to_ascii_lowercase();
            if by_name.contains_key(&key) {
                warn!(name, "duplicate declared name, keeping the first");
            } else {
                by_name.insert(key, record.handle);
            }
        }
    }

    for record in records.iter_mut() {
        let own_handle = record.handle;
        let object_type = record.object_type.clone();
        for (index, field) in record.fields.iter_mut().enumerate().skip(1) {
            // Enumeration slots keep their keyword even when it collides
            // with a declared name somewhere in the workspace.
            if !object_type.is_reference_position(index) {
                continue;
            }
            if let FieldValue::String(raw) = field {
                if let Some(&target) = by_name.get(&raw.to_ascii_lowercase()) {
                    // A record naming itself is its own name echoed in a
                    // data field, not a self-reference.
                    if target != own_handle {
                        *field = FieldValue::Reference(target);
                    }
                }
            }
        }
    }
}
