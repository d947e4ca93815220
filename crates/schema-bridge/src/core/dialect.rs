//! Database dialect identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A database product's SQL variant and type system.
///
/// `Dialect` is only ever used as a lookup key for type mapping tables and
/// lifecycle strategies, never instantiated per connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Mysql,
    Postgresql,
    Oracle,
    Mssql,
    Db2,
    H2,
    Derby,
    Hsqldb,
}

impl Dialect {
    /// Get the dialect identifier (e.g. "mysql", "postgresql").
    ///
    /// Identical to the serialized form, so logs and serialized config use
    /// one spelling per dialect.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgresql => "postgresql",
            Dialect::Oracle => "oracle",
            Dialect::Mssql => "mssql",
            Dialect::Db2 => "db2",
            Dialect::H2 => "h2",
            Dialect::Derby => "derby",
            Dialect::Hsqldb => "hsqldb",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
