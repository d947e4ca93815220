//! Schema and metadata types.

use serde::{Deserialize, Serialize};

/// Generic SQL type code, numerically matching the JDBC `java.sql.Types`
/// constants so metadata loaded through JDBC-shaped catalogs maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TypeCode {
    Bit = -7,
    Tinyint = -6,
    Bigint = -5,
    Longvarbinary = -4,
    Varbinary = -3,
    Binary = -2,
    Longvarchar = -1,
    Char = 1,
    Numeric = 2,
    Decimal = 3,
    Integer = 4,
    Smallint = 5,
    Float = 6,
    Real = 7,
    Double = 8,
    Varchar = 12,
    Boolean = 16,
    Date = 91,
    Time = 92,
    Timestamp = 93,
    Blob = 2004,
    Clob = 2005,
    Other = 1111,
}

impl TypeCode {
    /// Whether DDL for this kind carries a parenthesized size,
    /// e.g. `VARCHAR(255)`. True exactly for CHAR, VARCHAR and VARBINARY.
    pub fn has_size(&self) -> bool {
        matches!(self, TypeCode::Char | TypeCode::Varchar | TypeCode::Varbinary)
    }
}

/// Column metadata.
///
/// Owned by a [`TableInfo`]; the vendor-reported type name is stored verbatim
/// and matched case-insensitively by the type translation matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,

    /// Generic SQL type code.
    pub type_code: TypeCode,

    /// Vendor-reported type name (e.g. "BIGINT", "VARCHAR2").
    pub type_name: String,

    /// Declared precision (column size for character/binary types).
    pub precision: i32,

    /// Numeric scale.
    pub scale: i32,

    /// Whether the column allows NULL.
    pub nullable: bool,
}

impl ColumnInfo {
    /// Create a column descriptor.
    pub fn new(
        name: impl Into<String>,
        type_code: TypeCode,
        type_name: impl Into<String>,
        precision: i32,
        scale: i32,
        nullable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            type_code,
            type_name: type_name.into(),
            precision,
            scale,
            nullable,
        }
    }
}

/// Foreign key metadata.
///
/// The owning table is the referencing side; directionality is significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKeyInfo {
    /// Referencing column in the owning table.
    pub column: String,

    /// Referenced table name.
    pub ref_table: String,

    /// Referenced column name.
    pub ref_column: String,
}

impl ForeignKeyInfo {
    /// Create a foreign key descriptor.
    pub fn new(
        column: impl Into<String>,
        ref_table: impl Into<String>,
        ref_column: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            ref_table: ref_table.into(),
            ref_column: ref_column.into(),
        }
    }
}

/// Table metadata.
///
/// Column order is declaration order and is preserved in generated DDL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name.
    pub name: String,

    /// Column definitions in declaration order.
    pub columns: Vec<ColumnInfo>,

    /// Primary key column names (empty if the table has no primary key).
    pub primary_key: Vec<String>,

    /// Foreign key constraints in declaration order.
    pub foreign_keys: Vec<ForeignKeyInfo>,
}

impl TableInfo {
    /// Create an empty table descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Check if the table declares a primary key.
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A named catalog holding an ordered sequence of tables.
///
/// This is the unit the DDL generator and exporter operate over. It is
/// constructed by the external metadata loader and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseInfo {
    /// Catalog name.
    pub name: String,

    /// Tables in catalog order.
    pub tables: Vec<TableInfo>,
}

impl DatabaseInfo {
    /// Create an empty catalog descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableInfo> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_has_size() {
        assert!(TypeCode::Char.has_size());
        assert!(TypeCode::Varchar.has_size());
        assert!(TypeCode::Varbinary.has_size());
        assert!(!TypeCode::Bigint.has_size());
        assert!(!TypeCode::Blob.has_size());
        assert!(!TypeCode::Longvarchar.has_size());
    }

    #[test]
    fn test_table_lookup() {
        let mut table = TableInfo::new("FOO");
        table
            .columns
            .push(ColumnInfo::new("ID", TypeCode::Bigint, "BIGINT", 19, 0, false));
        assert!(table.column("ID").is_some());
        assert!(table.column("MISSING").is_none());
        assert!(!table.has_primary_key());
        table.primary_key.push("ID".to_string());
        assert!(table.has_primary_key());
    }
}
