//! Schema DDL generation for a target dialect.
//!
//! The generator emits statements in three fixed phases: every `CREATE TABLE`
//! first, then primary key `ALTER TABLE` statements, then foreign key
//! `ALTER TABLE` statements. Because every table exists before any constraint
//! is added, cyclic or forward foreign-key references always resolve and no
//! topological sort over tables is needed.

use std::sync::Arc;

use tracing::debug;

use crate::core::{DatabaseInfo, Dialect, TableInfo};
use crate::typemap::TypeMappingTable;

/// Generates DDL scripts translating a source catalog into a target dialect.
pub struct SchemaScriptGenerator {
    source: Dialect,
    target: Dialect,
    typemap: Arc<TypeMappingTable>,
}

impl SchemaScriptGenerator {
    /// Create a generator for the given dialect pair.
    ///
    /// The mapping table is shared by reference; it is read-only after
    /// startup so concurrent generators need no synchronization.
    pub fn new(source: Dialect, target: Dialect, typemap: Arc<TypeMappingTable>) -> Self {
        Self {
            source,
            target,
            typemap,
        }
    }

    /// Generate the ordered DDL script for a catalog.
    ///
    /// Returns one string per statement, each terminated with `;`. Constraint
    /// names carry a single monotonically increasing counter shared across
    /// all constraints of one invocation, so no two names collide within one
    /// generated script. Primary keys are numbered before foreign keys,
    /// consistent with phase ordering.
    pub fn generate_schema(&self, db: &DatabaseInfo) -> Vec<String> {
        let mut statements = Vec::new();

        for table in &db.tables {
            statements.push(self.create_table_statement(table));
        }

        let mut counter = 1usize;

        for table in &db.tables {
            if table.has_primary_key() {
                statements.push(self.primary_key_statement(table, counter));
                counter += 1;
            }
        }

        for table in &db.tables {
            for fk in &table.foreign_keys {
                statements.push(format!(
                    "ALTER TABLE {} ADD CONSTRAINT FK_{}_{}_{} FOREIGN KEY ({}) REFERENCES {}({});",
                    table.name, fk.column, fk.ref_column, counter, fk.column, fk.ref_table, fk.ref_column
                ));
                counter += 1;
            }
        }

        debug!(
            catalog = %db.name,
            tables = db.tables.len(),
            statements = statements.len(),
            source = %self.source,
            target = %self.target,
            "generated schema script"
        );

        statements
    }

    /// Render one `CREATE TABLE` statement, columns in declaration order,
    /// without inline key or constraint clauses.
    fn create_table_statement(&self, table: &TableInfo) -> String {
        let mut stmt = format!("CREATE TABLE {}\n(\n", table.name);
        let last = table.columns.len().saturating_sub(1);

        for (i, column) in table.columns.iter().enumerate() {
            let mapped = self.typemap.map_column_type(column, self.source, self.target);
            let not_null = if column.nullable { "" } else { " NOT NULL" };

            stmt.push_str("  ");
            stmt.push_str(&column.name);
            stmt.push(' ');
            stmt.push_str(&mapped.text);
            stmt.push_str(not_null);
            if i < last {
                stmt.push_str(", ");
            }
            stmt.push('\n');
        }

        stmt.push_str(");");
        stmt
    }

    fn primary_key_statement(&self, table: &TableInfo, counter: usize) -> String {
        format!(
            "ALTER TABLE {} ADD CONSTRAINT PK_{}_{} PRIMARY KEY ({});",
            table.name,
            table.name,
            counter,
            table.primary_key.join(", ")
        )
    }
}
