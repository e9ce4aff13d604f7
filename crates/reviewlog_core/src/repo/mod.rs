//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per aggregate.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories are constructed via `try_new` and refuse connections that
//!   are not migrated or lack required tables/columns.
//! - Referential-integrity failures surface as `RepoError::ForeignKeyViolation`
//!   and are never caught or retried inside this layer.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_repo;
pub mod item_repo;
pub mod review_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Target row does not exist.
    NotFound {
        entity: &'static str,
        id: i64,
    },
    /// A foreign key reference did not resolve, or a referenced row is
    /// still in use. Raised by the storage engine, propagated unchanged.
    ForeignKeyViolation {
        message: String,
    },
    /// Connection schema version is behind what this binary requires.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ForeignKeyViolation { message } => {
                write!(f, "referential integrity violation: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                Self::ForeignKeyViolation {
                    message: message
                        .unwrap_or_else(|| "FOREIGN KEY constraint failed".to_string()),
                }
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Table/column shape a repository requires from its connection.
pub(crate) struct TableRequirement {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// Verifies the connection is migrated and carries the given tables/columns.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    requirements: &[TableRequirement],
) -> RepoResult<()> {
    let actual_version = current_user_version(conn)?;
    let expected_version = latest_version();
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for requirement in requirements {
        if !table_exists(conn, requirement.table)? {
            return Err(RepoError::MissingRequiredTable(requirement.table));
        }
        for &column in requirement.columns {
            if !table_has_column(conn, requirement.table, column)? {
                return Err(RepoError::MissingRequiredColumn {
                    table: requirement.table,
                    column,
                });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
