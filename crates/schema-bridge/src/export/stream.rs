//! Streaming copy driver.
//!
//! [`copy_database`] walks a database table by table, pulls rows from a
//! [`RowSource`] channel and drives an [`Exporter`] through the protocol's
//! call order. Backpressure comes from the bounded channel: the driver only
//! pulls the next row once the sink has accepted the previous one.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::{DatabaseInfo, TableInfo};
use crate::error::{BridgeError, Result};

use super::{Exporter, SqlValue};

/// Source-side seam supplying rows to copy.
///
/// Mirrors the metadata loader: the crate does not read databases itself,
/// the orchestrator plugs a live reader in here. Starting a table stream is
/// synchronous; the returned receiver yields rows until the table is
/// exhausted or the source hits an error.
pub trait RowSource: Send {
    /// Start streaming the rows of one table.
    fn read_rows(&mut self, table: &TableInfo) -> mpsc::Receiver<Result<Vec<SqlValue>>>;
}

/// Counters reported by a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Tables copied.
    pub tables: u64,

    /// Rows written across all tables.
    pub rows: u64,
}

/// Copy every table of `db` from `source` into `exporter`.
///
/// Enforces the protocol call order, writes each table header lazily
/// before that table's first row, dispatches each value to its dedicated
/// typed call and flushes at table boundaries. The first failure aborts
/// the remaining sequence and propagates; the exporter is not torn down
/// on failure, its state is the orchestrator's to clean up along with the
/// connection.
pub async fn copy_database(
    db: &DatabaseInfo,
    source: &mut dyn RowSource,
    exporter: &mut dyn Exporter,
) -> Result<ExportStats> {
    exporter.initialize().await?;
    exporter.write_database_meta(db).await?;

    let mut stats = ExportStats::default();
    for table in &db.tables {
        stats.rows += copy_table(table, source, exporter).await?;
        stats.tables += 1;
    }

    exporter.finish().await?;
    info!(
        database = %db.name,
        tables = stats.tables,
        rows = stats.rows,
        "database copy complete"
    );
    Ok(stats)
}

async fn copy_table(
    table: &TableInfo,
    source: &mut dyn RowSource,
    exporter: &mut dyn Exporter,
) -> Result<u64> {
    exporter.initialize_table(table).await?;

    let mut rx = source.read_rows(table);
    let mut header_written = false;
    let mut rows = 0u64;

    while let Some(row) = rx.recv().await {
        let row = row.map_err(|e| BridgeError::export(&table.name, e.to_string()))?;

        if !header_written {
            exporter.write_table_header(table).await?;
            header_written = true;
        }

        exporter.initialize_row().await?;
        for value in &row {
            write_typed(exporter, value).await?;
        }
        exporter.finalize_row().await?;
        rows += 1;
    }

    exporter.finalize_table(table).await?;
    exporter.flush().await?;
    debug!(table = %table.name, rows, "table copied");
    Ok(rows)
}

/// Dispatch one value to its dedicated typed call, falling back to the
/// generic write for kinds without one.
async fn write_typed(exporter: &mut dyn Exporter, value: &SqlValue) -> Result<()> {
    match value {
        SqlValue::Bool(v) => exporter.write_bool(*v).await,
        SqlValue::I8(v) => exporter.write_byte(*v).await,
        SqlValue::I16(v) => exporter.write_short(*v).await,
        SqlValue::I32(v) => exporter.write_int(*v).await,
        SqlValue::I64(v) => exporter.write_long(*v).await,
        SqlValue::F32(v) => exporter.write_float(*v).await,
        SqlValue::F64(v) => exporter.write_double(*v).await,
        other => exporter.write_value(other).await,
    }
}

#[cfg(test)]
pub(crate) mod testkit {
    use async_trait::async_trait;

    use super::*;

    /// Sink that records every protocol call as a readable trace line.
    #[derive(Debug, Default)]
    pub struct RecordingExporter {
        pub calls: Vec<String>,
        pub fail_on: Option<String>,
    }

    impl RecordingExporter {
        fn record(&mut self, call: impl Into<String>) -> Result<()> {
            let call = call.into();
            if let Some(needle) = &self.fail_on {
                if call.starts_with(needle.as_str()) {
                    return Err(BridgeError::export("?", format!("failing {call}")));
                }
            }
            self.calls.push(call);
            Ok(())
        }
    }

    #[async_trait]
    impl Exporter for RecordingExporter {
        async fn initialize(&mut self) -> Result<()> {
            self.record("initialize")
        }

        async fn finish(&mut self) -> Result<()> {
            self.record("finish")
        }

        async fn write_database_meta(&mut self, db: &DatabaseInfo) -> Result<()> {
            self.record(format!("database_meta {}", db.name))
        }

        async fn initialize_table(&mut self, table: &TableInfo) -> Result<()> {
            self.record(format!("initialize_table {}", table.name))
        }

        async fn write_table_header(&mut self, table: &TableInfo) -> Result<()> {
            self.record(format!("table_header {}", table.name))
        }

        async fn finalize_table(&mut self, table: &TableInfo) -> Result<()> {
            self.record(format!("finalize_table {}", table.name))
        }

        async fn initialize_row(&mut self) -> Result<()> {
            self.record("initialize_row")
        }

        async fn finalize_row(&mut self) -> Result<()> {
            self.record("finalize_row")
        }

        async fn flush(&mut self) -> Result<()> {
            self.record("flush")
        }

        async fn write_bool(&mut self, value: bool) -> Result<()> {
            self.record(format!("bool {value}"))
        }

        async fn write_byte(&mut self, value: i8) -> Result<()> {
            self.record(format!("byte {value}"))
        }

        async fn write_short(&mut self, value: i16) -> Result<()> {
            self.record(format!("short {value}"))
        }

        async fn write_int(&mut self, value: i32) -> Result<()> {
            self.record(format!("int {value}"))
        }

        async fn write_long(&mut self, value: i64) -> Result<()> {
            self.record(format!("long {value}"))
        }

        async fn write_float(&mut self, value: f32) -> Result<()> {
            self.record(format!("float {value}"))
        }

        async fn write_double(&mut self, value: f64) -> Result<()> {
            self.record(format!("double {value}"))
        }

        async fn write_value(&mut self, value: &SqlValue) -> Result<()> {
            self.record(format!("value {value:?}"))
        }
    }

    /// Source backed by pre-canned rows per table.
    #[derive(Debug, Default)]
    pub struct CannedSource {
        pub tables: std::collections::HashMap<String, Vec<Result<Vec<SqlValue>>>>,
    }

    impl CannedSource {
        pub fn with_rows(mut self, table: &str, rows: Vec<Vec<SqlValue>>) -> Self {
            self.tables
                .insert(table.to_string(), rows.into_iter().map(Ok).collect());
            self
        }
    }

    impl RowSource for CannedSource {
        fn read_rows(&mut self, table: &TableInfo) -> mpsc::Receiver<Result<Vec<SqlValue>>> {
            let rows = self.tables.remove(&table.name).unwrap_or_default();
            let (tx, rx) = mpsc::channel(rows.len().max(1));
            for row in rows {
                // Capacity matches the row count, so try_send cannot fail.
                tx.try_send(row).unwrap();
            }
            rx
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testkit::{CannedSource, RecordingExporter};
    use super::*;
    use crate::core::{ColumnInfo, TypeCode};

    fn sample_db() -> DatabaseInfo {
        let mut db = DatabaseInfo::new("SAMPLE");
        let mut users = TableInfo::new("USERS");
        users
            .columns
            .push(ColumnInfo::new("ID", TypeCode::Bigint, "BIGINT", 19, 0, false));
        users
            .columns
            .push(ColumnInfo::new("NAME", TypeCode::Varchar, "VARCHAR", 100, 0, true));
        db.tables.push(users);
        db.tables.push(TableInfo::new("AUDIT"));
        db
    }

    #[tokio::test]
    async fn test_call_order_for_populated_table() {
        let db = sample_db();
        let mut source = CannedSource::default().with_rows(
            "USERS",
            vec![vec![SqlValue::I64(1), SqlValue::Text("ann".into())]],
        );
        let mut exporter = RecordingExporter::default();

        let stats = copy_database(&db, &mut source, &mut exporter)
            .await
            .unwrap();

        assert_eq!(stats, ExportStats { tables: 2, rows: 1 });
        assert_eq!(
            exporter.calls,
            vec![
                "initialize",
                "database_meta SAMPLE",
                "initialize_table USERS",
                "table_header USERS",
                "initialize_row",
                "long 1",
                "value Text(\"ann\")",
                "finalize_row",
                "finalize_table USERS",
                "flush",
                "initialize_table AUDIT",
                "finalize_table AUDIT",
                "flush",
                "finish",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_table_gets_no_header() {
        let db = sample_db();
        let mut source = CannedSource::default();
        let mut exporter = RecordingExporter::default();

        copy_database(&db, &mut source, &mut exporter)
            .await
            .unwrap();

        assert!(!exporter.calls.iter().any(|c| c.starts_with("table_header")));
    }

    #[tokio::test]
    async fn test_typed_dispatch_covers_scalar_kinds() {
        let db = sample_db();
        let row = vec![
            SqlValue::Bool(true),
            SqlValue::I8(1),
            SqlValue::I16(2),
            SqlValue::I32(3),
            SqlValue::I64(4),
            SqlValue::F32(1.5),
            SqlValue::F64(2.5),
            SqlValue::Null,
        ];
        let mut source = CannedSource::default().with_rows("USERS", vec![row]);
        let mut exporter = RecordingExporter::default();

        copy_database(&db, &mut source, &mut exporter)
            .await
            .unwrap();

        let writes: Vec<_> = exporter
            .calls
            .iter()
            .skip_while(|c| *c != "initialize_row")
            .skip(1)
            .take_while(|c| *c != "finalize_row")
            .cloned()
            .collect();
        assert_eq!(
            writes,
            vec![
                "bool true",
                "byte 1",
                "short 2",
                "int 3",
                "long 4",
                "float 1.5",
                "double 2.5",
                "value Null",
            ]
        );
    }

    #[tokio::test]
    async fn test_sink_failure_aborts_sequence() {
        let db = sample_db();
        let mut source = CannedSource::default().with_rows(
            "USERS",
            vec![
                vec![SqlValue::I64(1), SqlValue::Text("ann".into())],
                vec![SqlValue::I64(2), SqlValue::Text("bob".into())],
            ],
        );
        let mut exporter = RecordingExporter {
            fail_on: Some("finalize_row".to_string()),
            ..Default::default()
        };

        let result = copy_database(&db, &mut source, &mut exporter).await;

        assert!(result.is_err());
        // Nothing after the failing call, in particular no finish.
        assert!(!exporter.calls.contains(&"finish".to_string()));
        assert_eq!(exporter.calls.iter().filter(|c| *c == "initialize_row").count(), 1);
    }

    #[tokio::test]
    async fn test_source_error_propagates_with_table_context() {
        let db = sample_db();
        let mut source = CannedSource::default();
        source.tables.insert(
            "USERS".to_string(),
            vec![Err(BridgeError::connection("read failed", "source"))],
        );
        let mut exporter = RecordingExporter::default();

        let err = copy_database(&db, &mut source, &mut exporter)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("USERS"));
    }
}
