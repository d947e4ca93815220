//! Connection lifecycle control around bulk data loads.
//!
//! A [`LoadLifecycle`] brackets a bulk load against one target connection:
//! the before-hook suspends auto-commit and disables integrity checking, the
//! after-hook restores every toggle it made. Strategies are per-dialect and
//! share no state (Strategy pattern, one instance per target dialect).
//!
//! The orchestrator must run the after-hook exactly once per successful
//! before-hook, even when the load fails; leaving a connection with
//! integrity checks disabled is a correctness hazard for everything that
//! touches it afterwards. [`with_load_bracket`] encodes that contract.

mod strategies;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::core::Dialect;
use crate::error::Result;

pub use strategies::{
    H2Lifecycle, HsqldbLifecycle, MssqlLifecycle, MysqlLifecycle, OracleLifecycle,
    PassiveLifecycle, PostgresLifecycle,
};

/// Seam to the external connection collaborator.
///
/// The crate never opens connections itself; the orchestrator hands one in
/// through this trait. Implementations are not required to be thread-safe;
/// one connection is driven by one caller at a time.
#[async_trait]
pub trait TargetConnection: Send {
    /// Execute a statement, returning the affected row count.
    async fn execute(&mut self, sql: &str) -> Result<u64>;

    /// Whether the connection currently auto-commits.
    async fn auto_commit(&mut self) -> Result<bool>;

    /// Switch auto-commit on or off.
    async fn set_auto_commit(&mut self, enabled: bool) -> Result<()>;
}

/// Configuration recognized by lifecycle controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Disable unique-constraint checking too, not just foreign keys.
    pub disable_unique_checks: bool,

    /// Identifier case-sensitivity mode to switch to for the load.
    ///
    /// A negative value means "leave unchanged". Positive values are
    /// dialect-specific (MySQL: `lower_case_table_names`).
    pub case_sensitivity_mode: i32,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            disable_unique_checks: false,
            case_sensitivity_mode: -1,
        }
    }
}

/// Per-dialect bulk-load lifecycle strategy.
#[async_trait]
pub trait LoadLifecycle: Send + Sync {
    /// The target dialect this strategy controls.
    fn dialect(&self) -> Dialect;

    /// Prepare the connection for a bulk load.
    ///
    /// Suspends auto-commit if enabled, disables referential-integrity
    /// checking, and applies the optional unique-check and case-sensitivity
    /// toggles where the dialect supports them.
    async fn before_load(
        &self,
        conn: &mut dyn TargetConnection,
        connector_id: &str,
    ) -> Result<()>;

    /// Reverse every toggle made by [`before_load`](Self::before_load).
    ///
    /// Restored values are the pre-call values, not hard-coded defaults;
    /// where the server supports it the previous value is round-tripped
    /// through a session variable so restoration survives process
    /// boundaries.
    async fn after_load(&self, conn: &mut dyn TargetConnection, connector_id: &str)
        -> Result<()>;
}

/// Build the lifecycle strategy for a target dialect.
pub fn lifecycle_for(dialect: Dialect, options: LoadOptions) -> Box<dyn LoadLifecycle> {
    match dialect {
        Dialect::Mysql => Box::new(MysqlLifecycle::new(options)),
        Dialect::Postgresql => Box::new(PostgresLifecycle),
        Dialect::Mssql => Box::new(MssqlLifecycle),
        Dialect::Oracle => Box::new(OracleLifecycle),
        Dialect::H2 => Box::new(H2Lifecycle),
        Dialect::Hsqldb => Box::new(HsqldbLifecycle),
        Dialect::Derby | Dialect::Db2 => Box::new(PassiveLifecycle::new(dialect)),
    }
}

/// Run `op` bracketed by the lifecycle hooks.
///
/// The after-hook runs exactly once per successful before-hook, even when
/// `op` fails; the `op` error takes precedence over an after-hook error so
/// the root cause is not masked.
pub async fn with_load_bracket<C, T, F>(
    lifecycle: &dyn LoadLifecycle,
    conn: &mut C,
    connector_id: &str,
    op: F,
) -> Result<T>
where
    C: TargetConnection,
    F: for<'a> FnOnce(&'a mut C) -> BoxFuture<'a, Result<T>>,
{
    lifecycle.before_load(conn, connector_id).await?;

    let result = op(conn).await;
    let restore = lifecycle.after_load(conn, connector_id).await;

    match (result, restore) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), _) => Err(e),
    }
}

/// Switch off auto-commit if it is currently on.
///
/// Shared first step of every before-hook: integrity toggles and the bulk
/// load itself must run in manual-transaction mode to be atomic.
pub(crate) async fn suspend_auto_commit(conn: &mut dyn TargetConnection) -> Result<()> {
    if conn.auto_commit().await? {
        conn.set_auto_commit(false).await?;
    }
    Ok(())
}
