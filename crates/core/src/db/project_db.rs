use std::path::Path;

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::db::{GraphRecord, LabelRecord, TagRunRecord, TagRunStatus};

/// Minimum schema version we know how to handle.
///
/// `0` means "no schema yet" (fresh DB).
const MIN_SUPPORTED_SCHEMA_VERSION: i32 = 0;

/// Latest schema version this crate knows about.
pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Error type for project database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// Underlying SQLite error.
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The database was created with a newer schema version than we support.
    #[error(
        "Unsupported schema version {found}; supported range is {min_supported}..={max_supported}"
    )]
    UnsupportedSchemaVersion { found: i32, min_supported: i32, max_supported: i32 },
}

/// Convenience result type for DB operations.
pub type DbResult<T> = Result<T, DbError>;

/// SQLite-backed project database.
///
/// This is a thin wrapper around `rusqlite::Connection` that is responsible for:
/// - Opening/creating the DB file.
/// - Applying schema migrations.
/// - Providing small, testable helpers for querying and updating records.
#[derive(Debug)]
pub struct ProjectDb {
    conn: Connection,
}

impl ProjectDb {
    /// Open (or create) a project database at the given path and ensure the schema exists.
    pub fn open(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        apply_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Expose a reference to the underlying connection for advanced callers.
    /// For most code, prefer higher-level helpers.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a graph record and return its row id.
    pub fn insert_graph(&self, record: &GraphRecord) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO graphs (name, path, hash, function_count, import_count)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.name,
                record.path,
                record.hash,
                record.function_count.map(|c| c as i64),
                record.import_count.map(|c| c as i64)
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all registered graphs (ordered by id).
    pub fn list_graphs(&self) -> DbResult<Vec<GraphRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT name, path, hash, function_count, import_count
            FROM graphs
            ORDER BY id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(GraphRecord {
                name: row.get(0)?,
                path: row.get(1)?,
                hash: row.get(2)?,
                function_count: row.get::<_, Option<i64>>(3)?.map(|c| c as u32),
                import_count: row.get::<_, Option<i64>>(4)?.map(|c| c as u32),
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Insert a tagging run record and return its row id.
    pub fn insert_tag_run(&self, record: &TagRunRecord) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO tag_runs (graph, graph_hash, taxonomy_version, status, functions_tagged, started_at, finished_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.graph,
                record.graph_hash,
                record.taxonomy_version,
                record.status.as_str(),
                record.functions_tagged as i64,
                record.started_at,
                record.finished_at
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List tagging runs, optionally filtered by graph name (newest first).
    pub fn list_tag_runs(&self, graph: Option<&str>) -> DbResult<Vec<TagRunRecord>> {
        fn map_run(row: &rusqlite::Row<'_>) -> rusqlite::Result<TagRunRecord> {
            let status: String = row.get(3)?;
            Ok(TagRunRecord {
                graph: row.get(0)?,
                graph_hash: row.get(1)?,
                taxonomy_version: row.get(2)?,
                status: TagRunStatus::parse(&status),
                functions_tagged: row.get::<_, i64>(4)? as u32,
                started_at: row.get(5)?,
                finished_at: row.get(6)?,
            })
        }

        let mut out = Vec::new();
        if let Some(graph) = graph {
            let mut stmt = self.conn.prepare(
                r#"
                SELECT graph, graph_hash, taxonomy_version, status, functions_tagged, started_at, finished_at
                FROM tag_runs
                WHERE graph = ?1
                ORDER BY id DESC
                "#,
            )?;
            let rows = stmt.query_map(params![graph], |row| map_run(row))?;
            for row in rows {
                out.push(row?);
            }
        } else {
            let mut stmt = self.conn.prepare(
                r#"
                SELECT graph, graph_hash, taxonomy_version, status, functions_tagged, started_at, finished_at
                FROM tag_runs
                ORDER BY id DESC
                "#,
            )?;
            let rows = stmt.query_map([], |row| map_run(row))?;
            for row in rows {
                out.push(row?);
            }
        }
        Ok(out)
    }

    /// Most recent run id for a given graph name.
    pub fn latest_run_id(&self, graph: &str) -> DbResult<Option<i64>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id FROM tag_runs
            WHERE graph = ?1
            ORDER BY id DESC
            LIMIT 1
            "#,
        )?;
        let mut rows = stmt.query(params![graph])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    /// Persist label rows for a given run id.
    pub fn insert_labels(&self, run_id: i64, labels: &[LabelRecord]) -> DbResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT OR REPLACE INTO labels (run_id, address, old_name, new_name, xref_count)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;
            for label in labels {
                stmt.execute(params![
                    run_id,
                    label.address as i64,
                    label.old_name,
                    label.new_name,
                    label.xref_count as i64
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Load label rows for a given run id, highest xref count first.
    pub fn labels_for_run(&self, run_id: i64) -> DbResult<Vec<LabelRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT address, old_name, new_name, xref_count
            FROM labels
            WHERE run_id = ?1
            ORDER BY xref_count DESC, address
            "#,
        )?;
        let rows = stmt.query_map(params![run_id], |row| {
            Ok(LabelRecord {
                address: row.get::<_, i64>(0)? as u64,
                old_name: row.get(1)?,
                new_name: row.get(2)?,
                xref_count: row.get::<_, i64>(3)? as u32,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

/// Apply schema migrations to bring the database to the latest version.
///
/// We use `PRAGMA user_version` as the schema version indicator.
///
/// Version map:
/// - 0: no schema
/// - 1: initial schema (graphs, tag_runs)
/// - 2: add labels table
fn apply_migrations(conn: &Connection) -> DbResult<()> {
    let mut current_version = current_schema_version(conn)?;

    // Reject DBs created with a newer schema than we support.
    if current_version > CURRENT_SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            found: current_version,
            min_supported: MIN_SUPPORTED_SCHEMA_VERSION,
            max_supported: CURRENT_SCHEMA_VERSION,
        });
    }

    if current_version == 0 {
        // Initial schema.
        conn.execute_batch(
            r#"
            BEGIN;
            CREATE TABLE IF NOT EXISTS graphs (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                name           TEXT NOT NULL,
                path           TEXT NOT NULL,
                hash           TEXT,
                function_count INTEGER,
                import_count   INTEGER
            );

            CREATE TABLE IF NOT EXISTS tag_runs (
                id               INTEGER PRIMARY KEY AUTOINCREMENT,
                graph            TEXT NOT NULL,
                graph_hash       TEXT,
                taxonomy_version TEXT NOT NULL,
                status           TEXT NOT NULL,
                functions_tagged INTEGER NOT NULL DEFAULT 0,
                started_at       TEXT NOT NULL,
                finished_at      TEXT NOT NULL
            );

            PRAGMA user_version = 1;
            COMMIT;
            "#,
        )?;
        current_version = 1;
    }

    if current_version < 2 {
        conn.execute_batch(
            r#"
            BEGIN;
            CREATE TABLE IF NOT EXISTS labels (
                run_id     INTEGER NOT NULL,
                address    INTEGER NOT NULL,
                old_name   TEXT NOT NULL,
                new_name   TEXT NOT NULL,
                xref_count INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY(run_id, address)
            );
            PRAGMA user_version = 2;
            COMMIT;
            "#,
        )?;
    }

    Ok(())
}

/// Read the SQLite schema version from `PRAGMA user_version`.
fn current_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(version)
}
