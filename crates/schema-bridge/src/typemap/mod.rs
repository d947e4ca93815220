//! Type translation matrix between database dialects.
//!
//! The [`TypeMappingTable`] maps `(source dialect, target dialect, source
//! type name)` triples to target type text. Mapping tables are directional
//! and intentionally incomplete for low-traffic dialect pairs; a miss is a
//! valid state that triggers the default fallback rule, not an error.
//!
//! The table is populated once at startup (see [`TypeMappingTable::with_builtins`])
//! and treated as read-only afterwards, so it can be shared by reference
//! across concurrent callers without locking.

mod builtin;

use std::collections::HashMap;

use tracing::warn;

use crate::core::{ColumnInfo, Dialect};

/// Result of translating one column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Target type text, possibly already carrying a size/precision suffix.
    pub text: String,

    /// True when no mapping was registered and the default rule was used.
    ///
    /// Fallback output may be invalid SQL for the target dialect; that gap
    /// is deliberately observable rather than silently corrected.
    pub used_fallback: bool,
}

/// Registry of per-(source, target) column type mappings.
///
/// Keys are upper-cased source type names. Registration is last-writer-wins,
/// which lets callers layer vendor-quirk overrides on top of the builtins.
#[derive(Debug, Default)]
pub struct TypeMappingTable {
    mappings: HashMap<(Dialect, Dialect), HashMap<String, String>>,
}

impl TypeMappingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the built-in cross-dialect mappings registered.
    ///
    /// Several dialect pairs are sparse and DB2 → Oracle has no entries at
    /// all; those pairs fall through to the default rule.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        builtin::register(&mut table);
        table
    }

    /// Register a mapping for the ordered (source, target) dialect pair.
    ///
    /// Re-registering the same key overwrites the previous value.
    pub fn add_mapping(
        &mut self,
        source: Dialect,
        target: Dialect,
        source_type: impl Into<String>,
        target_type: impl Into<String>,
    ) -> &mut Self {
        self.mappings
            .entry((source, target))
            .or_default()
            .insert(source_type.into().to_uppercase(), target_type.into());
        self
    }

    /// Look up the registered mapping for a type name, if any.
    ///
    /// The type name is matched case-insensitively.
    pub fn mapping(&self, source: Dialect, target: Dialect, type_name: &str) -> Option<&str> {
        self.mappings
            .get(&(source, target))
            .and_then(|m| m.get(&type_name.to_uppercase()))
            .map(String::as_str)
    }

    /// Translate a column's type into the target dialect.
    ///
    /// A registered mapping is returned verbatim, since mapped text may already
    /// encode a size, so no precision logic is applied to a hit. On a miss
    /// the column's original type name is reused, with a `(<precision>)`
    /// suffix appended only for the size-bearing kinds (CHAR, VARCHAR,
    /// VARBINARY) with a declared positive precision. This function is
    /// total: it never fails, though fallback output is not guaranteed to
    /// be valid for the target dialect.
    pub fn map_column_type(
        &self,
        column: &ColumnInfo,
        source: Dialect,
        target: Dialect,
    ) -> MappedType {
        if let Some(mapped) = self.mapping(source, target, &column.type_name) {
            return MappedType {
                text: mapped.to_string(),
                used_fallback: false,
            };
        }

        warn!(
            column = %column.name,
            type_name = %column.type_name,
            %source,
            %target,
            "no type mapping registered, reusing source type"
        );

        let text = if column.type_code.has_size() && column.precision > 0 {
            format!("{}({})", column.type_name, column.precision)
        } else {
            column.type_name.clone()
        };

        MappedType {
            text,
            used_fallback: true,
        }
    }
}
