mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::models::{ConOpsInput, ProjectSummary, StoredProject};

/// SQLite-backed store for saved projects.
///
/// Projects are write-once: this store exposes save, list, and get only.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "conops-builder")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("conops.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    /// Save a named snapshot of the input document. Returns the new row id.
    pub fn save_project(&self, name: &str, spec: &ConOpsInput) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let data = serde_json::to_string(spec)?;
        let now = Utc::now();

        conn.execute(
            "INSERT INTO conops_projects (name, data, created_at) VALUES (?, ?, ?)",
            (name, &data, now.to_rfc3339()),
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, created_at FROM conops_projects ORDER BY id",
        )?;

        let projects = stmt
            .query_map([], |row| {
                Ok(ProjectSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: parse_datetime(row.get::<_, String>(2)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(projects)
    }

    pub fn get_project(&self, id: i64) -> Result<Option<StoredProject>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, data, created_at FROM conops_projects WHERE id = ?",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(StoredProject {
                id: row.get(0)?,
                name: row.get(1)?,
                data: row.get(2)?,
                created_at: parse_datetime(row.get::<_, String>(3)?),
            }))
        } else {
            Ok(None)
        }
    }
}

fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
