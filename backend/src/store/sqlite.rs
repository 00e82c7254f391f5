use super::{new_id, LocationStore, NewLocation, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use common::model::location::Location;
use common::model::session::SessionUser;
use common::slug::name_key;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS locations (
        id              TEXT PRIMARY KEY NOT NULL,
        name            TEXT NOT NULL,
        name_key        TEXT NOT NULL UNIQUE,
        jam_link        TEXT NOT NULL,
        created_by      TEXT NOT NULL,
        created_by_name TEXT NOT NULL,
        updated_by      TEXT NOT NULL,
        updated_by_name TEXT NOT NULL,
        updated_at      INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS locations_updated_at ON locations (updated_at DESC);
";

const COLUMNS: &str = "id, name, jam_link, created_by, created_by_name, \
                       updated_by, updated_by_name, updated_at";

/// SQLite-backed store. One connection, opened once and shared; the mutex
/// turns every method into a single critical section.
pub struct SqliteLocationStore {
    conn: Mutex<Connection>,
}

impl SqliteLocationStore {
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn micros_to_datetime(micros: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(7, micros))
}

fn row_to_location(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        jam_link: row.get(2)?,
        created_by: row.get(3)?,
        created_by_name: row.get(4)?,
        updated_by: row.get(5)?,
        updated_by_name: row.get(6)?,
        updated_at: micros_to_datetime(row.get(7)?)?,
    })
}

fn select_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<Location>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM locations WHERE id = ?1"),
        params![id],
        row_to_location,
    )
    .optional()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

impl LocationStore for SqliteLocationStore {
    fn list_page(&self, offset: u64, limit: u64) -> StoreResult<(Vec<Location>, u64)> {
        let conn = self.conn()?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM locations", [], |row| row.get(0))?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM locations \
             ORDER BY updated_at DESC, rowid DESC LIMIT ?1 OFFSET ?2"
        ))?;
        let locations = stmt
            .query_map(
                params![
                    i64::try_from(limit).unwrap_or(i64::MAX),
                    i64::try_from(offset).unwrap_or(i64::MAX)
                ],
                row_to_location,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok((locations, u64::try_from(total).unwrap_or_default()))
    }

    fn search(&self, needle: &str) -> StoreResult<Vec<Location>> {
        let conn = self.conn()?;
        // instr() rather than LIKE so '%' and '_' in the query stay literal.
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM locations WHERE instr(name_key, ?1) > 0 \
             ORDER BY updated_at DESC, rowid DESC"
        ))?;
        let locations = stmt
            .query_map(params![needle.to_lowercase()], row_to_location)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(locations)
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Location>> {
        let conn = self.conn()?;
        Ok(select_by_id(&conn, id)?)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Location>> {
        let conn = self.conn()?;
        let location = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM locations WHERE name_key = ?1"),
                params![name_key(name)],
                row_to_location,
            )
            .optional()?;
        Ok(location)
    }

    fn insert(&self, new: NewLocation) -> StoreResult<Location> {
        let location = Location {
            id: new_id(),
            name: new.name,
            jam_link: new.jam_link,
            created_by: new.creator.email.clone(),
            created_by_name: new.creator.name.clone(),
            updated_by: new.creator.email,
            updated_by_name: new.creator.name,
            updated_at: new.created_at,
        };
        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT INTO locations (id, name, name_key, jam_link, created_by, created_by_name, \
             updated_by, updated_by_name, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                location.id,
                location.name,
                name_key(&location.name),
                location.jam_link,
                location.created_by,
                location.created_by_name,
                location.updated_by,
                location.updated_by_name,
                location.updated_at.timestamp_micros(),
            ],
        );
        match inserted {
            Ok(_) => Ok(location),
            Err(err) if is_unique_violation(&err) => Err(StoreError::Duplicate(location.name)),
            Err(err) => Err(err.into()),
        }
    }

    fn update_link(
        &self,
        id: &str,
        jam_link: &str,
        editor: &SessionUser,
        at: DateTime<Utc>,
    ) -> StoreResult<Option<Location>> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE locations SET jam_link = ?1, updated_by = ?2, updated_by_name = ?3, \
             updated_at = ?4 WHERE id = ?5",
            params![jam_link, editor.email, editor.name, at.timestamp_micros(), id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(select_by_id(&conn, id)?)
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let changed = self
            .conn()?
            .execute("DELETE FROM locations WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}
