//! Per-dialect lifecycle strategies.
//!
//! Each strategy issues the dialect's own session statements: MySQL toggles
//! session variables, SQL Server walks tables with `sp_msforeachtable`,
//! H2/HSQLDB flip a database flag, Oracle defers constraint checking inside
//! the transaction. Derby and DB2 expose no session-wide toggle, so their
//! strategy only suspends auto-commit.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::Dialect;
use crate::error::Result;

use super::{suspend_auto_commit, LoadLifecycle, LoadOptions, TargetConnection};

/// MySQL strategy: session-variable toggles.
///
/// The previous case-sensitivity mode is saved into a server-side session
/// variable (`@OLD_LOWER_CASE_TABLE_NAMES`) at disable time and restored
/// from it, so the round-trip does not depend on in-process state.
#[derive(Debug, Clone)]
pub struct MysqlLifecycle {
    options: LoadOptions,
}

impl MysqlLifecycle {
    /// Create a MySQL lifecycle with the given options.
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    async fn set_referential_integrity(
        conn: &mut dyn TargetConnection,
        enable: bool,
    ) -> Result<()> {
        let flag = if enable { "1" } else { "0" };
        conn.execute(&format!("SET FOREIGN_KEY_CHECKS = {};", flag))
            .await?;
        Ok(())
    }

    async fn set_unique_checks(conn: &mut dyn TargetConnection, enable: bool) -> Result<()> {
        let flag = if enable { "1" } else { "0" };
        conn.execute(&format!("SET UNIQUE_CHECKS = {};", flag))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl LoadLifecycle for MysqlLifecycle {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "preparing mysql connection for bulk load");
        suspend_auto_commit(conn).await?;
        Self::set_referential_integrity(conn, false).await?;

        if self.options.disable_unique_checks {
            Self::set_unique_checks(conn, false).await?;
        }

        if self.options.case_sensitivity_mode >= 0 {
            conn.execute(&format!(
                "SET @OLD_LOWER_CASE_TABLE_NAMES=@@LOWER_CASE_TABLE_NAMES, \
                 LOWER_CASE_TABLE_NAMES = {};",
                self.options.case_sensitivity_mode
            ))
            .await?;
        }
        Ok(())
    }

    async fn after_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "restoring mysql connection state");
        Self::set_referential_integrity(conn, true).await?;

        if self.options.disable_unique_checks {
            Self::set_unique_checks(conn, true).await?;
        }

        if self.options.case_sensitivity_mode >= 0 {
            conn.execute("SET LOWER_CASE_TABLE_NAMES=@OLD_LOWER_CASE_TABLE_NAMES;")
                .await?;
        }
        Ok(())
    }
}

/// PostgreSQL strategy: replica replication role skips FK trigger firing.
#[derive(Debug, Clone, Default)]
pub struct PostgresLifecycle;

#[async_trait]
impl LoadLifecycle for PostgresLifecycle {
    fn dialect(&self) -> Dialect {
        Dialect::Postgresql
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "preparing postgres connection for bulk load");
        suspend_auto_commit(conn).await?;
        conn.execute("SET session_replication_role = replica;")
            .await?;
        Ok(())
    }

    async fn after_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "restoring postgres connection state");
        conn.execute("SET session_replication_role = origin;")
            .await?;
        Ok(())
    }
}

/// SQL Server strategy: per-table NOCHECK/CHECK via `sp_msforeachtable`.
#[derive(Debug, Clone, Default)]
pub struct MssqlLifecycle;

#[async_trait]
impl LoadLifecycle for MssqlLifecycle {
    fn dialect(&self) -> Dialect {
        Dialect::Mssql
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "preparing mssql connection for bulk load");
        suspend_auto_commit(conn).await?;
        conn.execute("EXEC sp_msforeachtable 'ALTER TABLE ? NOCHECK CONSTRAINT ALL';")
            .await?;
        Ok(())
    }

    async fn after_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "restoring mssql connection state");
        conn.execute(
            "EXEC sp_msforeachtable 'ALTER TABLE ? WITH CHECK CHECK CONSTRAINT ALL';",
        )
        .await?;
        Ok(())
    }
}

/// Oracle strategy: defer constraint checking to commit time.
///
/// Requires the manual-transaction mode the before-hook establishes.
#[derive(Debug, Clone, Default)]
pub struct OracleLifecycle;

#[async_trait]
impl LoadLifecycle for OracleLifecycle {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "preparing oracle connection for bulk load");
        suspend_auto_commit(conn).await?;
        conn.execute("SET CONSTRAINTS ALL DEFERRED").await?;
        Ok(())
    }

    async fn after_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "restoring oracle connection state");
        conn.execute("SET CONSTRAINTS ALL IMMEDIATE").await?;
        Ok(())
    }
}

/// H2 strategy: database-wide referential integrity flag.
#[derive(Debug, Clone, Default)]
pub struct H2Lifecycle;

#[async_trait]
impl LoadLifecycle for H2Lifecycle {
    fn dialect(&self) -> Dialect {
        Dialect::H2
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "preparing h2 connection for bulk load");
        suspend_auto_commit(conn).await?;
        conn.execute("SET REFERENTIAL_INTEGRITY FALSE").await?;
        Ok(())
    }

    async fn after_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "restoring h2 connection state");
        conn.execute("SET REFERENTIAL_INTEGRITY TRUE").await?;
        Ok(())
    }
}

/// HSQLDB strategy: database-wide referential integrity flag.
#[derive(Debug, Clone, Default)]
pub struct HsqldbLifecycle;

#[async_trait]
impl LoadLifecycle for HsqldbLifecycle {
    fn dialect(&self) -> Dialect {
        Dialect::Hsqldb
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "preparing hsqldb connection for bulk load");
        suspend_auto_commit(conn).await?;
        conn.execute("SET DATABASE REFERENTIAL INTEGRITY FALSE")
            .await?;
        Ok(())
    }

    async fn after_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        debug!(connector_id, "restoring hsqldb connection state");
        conn.execute("SET DATABASE REFERENTIAL INTEGRITY TRUE")
            .await?;
        Ok(())
    }
}

/// Strategy for dialects without a session-wide integrity toggle
/// (Derby, DB2): only auto-commit is suspended.
#[derive(Debug, Clone)]
pub struct PassiveLifecycle {
    dialect: Dialect,
}

impl PassiveLifecycle {
    /// Create a passive lifecycle for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

#[async_trait]
impl LoadLifecycle for PassiveLifecycle {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()> {
        warn!(
            connector_id,
            dialect = %self.dialect,
            "dialect has no session-wide integrity toggle, loading with checks active"
        );
        suspend_auto_commit(conn).await
    }

    async fn after_load(
        &self,
        _conn: &mut dyn TargetConnection,
        _connector_id: &str,
    ) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testkit::MockConnection;
    use super::*;

    #[tokio::test]
    async fn test_mysql_symmetry_default_options() {
        let lifecycle = MysqlLifecycle::new(LoadOptions::default());
        let mut conn = MockConnection::new();

        lifecycle.before_load(&mut conn, "target").await.unwrap();
        assert!(!conn.fk_checks);
        assert!(!conn.auto_commit);
        // Unique checks untouched unless configured.
        assert!(conn.unique_checks);

        lifecycle.after_load(&mut conn, "target").await.unwrap();
        assert!(conn.fk_checks);
        assert!(conn.unique_checks);
    }

    #[tokio::test]
    async fn test_mysql_unique_checks_toggled_when_configured() {
        let lifecycle = MysqlLifecycle::new(LoadOptions {
            disable_unique_checks: true,
            case_sensitivity_mode: -1,
        });
        let mut conn = MockConnection::new();

        lifecycle.before_load(&mut conn, "target").await.unwrap();
        assert!(!conn.unique_checks);

        lifecycle.after_load(&mut conn, "target").await.unwrap();
        assert!(conn.unique_checks);
    }

    #[tokio::test]
    async fn test_mysql_case_mode_round_trips_previous_value() {
        let lifecycle = MysqlLifecycle::new(LoadOptions {
            disable_unique_checks: false,
            case_sensitivity_mode: 1,
        });
        let mut conn = MockConnection::new();
        conn.lower_case_mode = 2;

        lifecycle.before_load(&mut conn, "target").await.unwrap();
        assert_eq!(conn.lower_case_mode, 1);

        lifecycle.after_load(&mut conn, "target").await.unwrap();
        // Restored to the pre-call value, not a hard-coded default.
        assert_eq!(conn.lower_case_mode, 2);
    }

    #[tokio::test]
    async fn test_negative_case_mode_leaves_setting_alone() {
        let lifecycle = MysqlLifecycle::new(LoadOptions::default());
        let mut conn = MockConnection::new();
        conn.lower_case_mode = 2;

        lifecycle.before_load(&mut conn, "target").await.unwrap();
        lifecycle.after_load(&mut conn, "target").await.unwrap();
        assert_eq!(conn.lower_case_mode, 2);
        assert!(!conn
            .executed
            .iter()
            .any(|s| s.contains("LOWER_CASE_TABLE_NAMES")));
    }

    #[tokio::test]
    async fn test_auto_commit_suspended_only_when_enabled() {
        let lifecycle = H2Lifecycle;
        let mut conn = MockConnection::new();
        conn.auto_commit = false;

        lifecycle.before_load(&mut conn, "target").await.unwrap();
        assert!(!conn.auto_commit);
    }

    #[tokio::test]
    async fn test_statement_pairs_are_symmetric() {
        for dialect in [
            Dialect::Postgresql,
            Dialect::Mssql,
            Dialect::Oracle,
            Dialect::H2,
            Dialect::Hsqldb,
        ] {
            let lifecycle = super::super::lifecycle_for(dialect, LoadOptions::default());
            let mut conn = MockConnection::new();

            lifecycle.before_load(&mut conn, "target").await.unwrap();
            let before_count = conn.executed.len();
            lifecycle.after_load(&mut conn, "target").await.unwrap();

            // Every disable statement has exactly one restore counterpart.
            assert_eq!(conn.executed.len(), before_count * 2, "{dialect}");
        }
    }

    #[tokio::test]
    async fn test_passive_dialects_issue_no_statements() {
        for dialect in [Dialect::Derby, Dialect::Db2] {
            let lifecycle = super::super::lifecycle_for(dialect, LoadOptions::default());
            let mut conn = MockConnection::new();

            lifecycle.before_load(&mut conn, "target").await.unwrap();
            lifecycle.after_load(&mut conn, "target").await.unwrap();
            assert!(conn.executed.is_empty());
            assert!(!conn.auto_commit);
        }
    }
}
