use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use super::{RoundStore, StorageError};
use crate::model::{DEFAULT_PAR, Hole, HolesCount, Round, ShotType, User};

pub const TABLES_AND_DDL: &[(&str, &str)] = &[
    (
        "golfer",
        include_str!("../sql/schema/sqlite/00_golfer.sql"),
    ),
    ("round", include_str!("../sql/schema/sqlite/01_round.sql")),
    ("hole", include_str!("../sql/schema/sqlite/02_hole.sql")),
];

const ROUND_COLUMNS: &str = "id, course_name, holes_count, start_date, is_discarded, golfer_id";
const HOLE_COLUMNS: &str = "round_id, hole_number, par, drives, long_shots, approaches, chips, \
    putts, fairway_bunker_shots, greenside_bunker_shots, penalties";

/// Round row as sqlite hands it back, before ids and dates are parsed.
struct RoundRow {
    id: String,
    course_name: String,
    holes_count: Option<i64>,
    start_date: String,
    is_discarded: Option<bool>,
    golfer_id: Option<String>,
}

impl RoundRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            course_name: row.get("course_name")?,
            holes_count: row.get("holes_count")?,
            start_date: row.get("start_date")?,
            is_discarded: row.get("is_discarded")?,
            golfer_id: row.get("golfer_id")?,
        })
    }

    fn into_round(self, holes: Vec<Hole>) -> Result<Round, StorageError> {
        let holes_count = self
            .holes_count
            .and_then(|n| u32::try_from(n).ok())
            .map_or(Ok(HolesCount::default()), HolesCount::try_from)
            .map_err(|e| StorageError::new(format!("round {}: {e}", self.id)))?;
        let start_date = DateTime::parse_from_rfc3339(&self.start_date)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| {
                StorageError::new(format!("round {}: bad start_date '{}': {e}", self.id, self.start_date))
            })?;
        let user_id = self.golfer_id.as_deref().map(parse_uuid).transpose()?;
        Ok(Round {
            id: parse_uuid(&self.id)?,
            course_name: self.course_name,
            holes_count,
            start_date,
            is_discarded: self.is_discarded.unwrap_or(false),
            holes,
            user_id,
        })
    }
}

fn parse_uuid(value: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(value).map_err(|e| StorageError::new(format!("bad id '{value}': {e}")))
}

// Missing or NULL counters load as zero.
fn get_count(row: &Row<'_>, column: &str) -> rusqlite::Result<u32> {
    let value: Option<i64> = row.get(column)?;
    Ok(u32::try_from(value.unwrap_or(0).max(0)).unwrap_or(u32::MAX))
}

fn hole_from_row(row: &Row<'_>) -> rusqlite::Result<(String, Hole)> {
    let round_id: String = row.get("round_id")?;
    let par: Option<i64> = row.get("par")?;
    let mut hole = Hole::new(Uuid::nil(), get_count(row, "hole_number")?);
    hole.par = par
        .and_then(|p| u32::try_from(p).ok())
        .unwrap_or(DEFAULT_PAR);
    for shot in ShotType::ALL {
        hole.set_count(shot, i64::from(get_count(row, shot.key())?));
    }
    Ok((round_id, hole))
}

fn attach_round_id(round_id: &str, mut hole: Hole) -> Result<Hole, StorageError> {
    hole.round_id = parse_uuid(round_id)?;
    Ok(hole)
}

/// Round store on a single sqlite connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the schema exists.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema cannot be created
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::init(Connection::open(path)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema cannot be created
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        for (table, ddl) in TABLES_AND_DDL {
            conn.execute_batch(ddl)
                .map_err(|e| StorageError::new(format!("create table {table}: {e}")))?;
        }
        add_missing_counter_columns(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|e| StorageError::new(format!("sqlite connection lock poisoned: {e}")))
    }

    /// Runs a batch of sql in one transaction, e.g. a startup script.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails; nothing is committed then
    pub fn execute_batch(&self, sql: &str) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
        Ok(())
    }

    fn holes_by_round(conn: &Connection) -> Result<HashMap<String, Vec<Hole>>, StorageError> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {HOLE_COLUMNS} FROM hole ORDER BY round_id, hole_number"
        ))?;
        let rows = stmt.query_map([], hole_from_row)?;
        let mut holes: HashMap<String, Vec<Hole>> = HashMap::new();
        for row in rows {
            let (round_id, hole) = row?;
            let hole = attach_round_id(&round_id, hole)?;
            holes.entry(round_id).or_default().push(hole);
        }
        Ok(holes)
    }

    fn holes_for_round(conn: &Connection, round_id: &str) -> Result<Vec<Hole>, StorageError> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {HOLE_COLUMNS} FROM hole WHERE round_id = ?1 ORDER BY hole_number"
        ))?;
        let rows = stmt.query_map(params![round_id], hole_from_row)?;
        let mut holes = Vec::new();
        for row in rows {
            let (round_id, hole) = row?;
            holes.push(attach_round_id(&round_id, hole)?);
        }
        Ok(holes)
    }
}

fn add_missing_counter_columns(conn: &Connection) -> Result<(), StorageError> {
    let mut stmt = conn.prepare("PRAGMA table_info(hole)")?;
    let existing = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    for shot in ShotType::ALL {
        if existing.iter().any(|c| c == shot.key()) {
            continue;
        }
        conn.execute_batch(&format!(
            "ALTER TABLE hole ADD COLUMN {} INTEGER NOT NULL DEFAULT 0;",
            shot.key()
        ))?;
        if cfg!(debug_assertions) {
            eprintln!(
                "{}",
                json!({"store":"sqlite","added_column": shot.key()})
            );
        }
    }
    Ok(())
}

impl RoundStore for SqliteStore {
    fn fetch_rounds(&self, include_discarded: bool) -> Result<Vec<Round>, StorageError> {
        let conn = self.lock()?;
        let query = if include_discarded {
            format!("SELECT {ROUND_COLUMNS} FROM round ORDER BY rowid")
        } else {
            format!("SELECT {ROUND_COLUMNS} FROM round WHERE is_discarded = 0 ORDER BY rowid")
        };
        let mut stmt = conn.prepare(&query)?;
        let round_rows = stmt
            .query_map([], RoundRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        let mut holes = Self::holes_by_round(&conn)?;

        round_rows
            .into_iter()
            .map(|row| {
                let round_holes = holes.remove(&row.id).unwrap_or_default();
                row.into_round(round_holes)
            })
            .collect()
    }

    fn fetch_round(&self, round_id: Uuid) -> Result<Option<Round>, StorageError> {
        let conn = self.lock()?;
        let id = round_id.to_string();
        let row = conn
            .query_row(
                &format!("SELECT {ROUND_COLUMNS} FROM round WHERE id = ?1"),
                params![id],
                RoundRow::from_row,
            )
            .optional()?;
        match row {
            Some(row) => {
                let holes = Self::holes_for_round(&conn, &id)?;
                Ok(Some(row.into_round(holes)?))
            }
            None => Ok(None),
        }
    }

    fn insert_round(&self, round: &Round) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            &format!("INSERT INTO round ({ROUND_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
            params![
                round.id.to_string(),
                round.course_name,
                i64::from(round.holes_count.get()),
                round.start_date.to_rfc3339(),
                round.is_discarded,
                round.user_id.map(|id| id.to_string()),
            ],
        )?;
        for hole in &round.holes {
            upsert_hole(&tx, hole)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn fetch_hole(&self, round_id: Uuid, hole_number: u32) -> Result<Option<Hole>, StorageError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                &format!(
                    "SELECT {HOLE_COLUMNS} FROM hole WHERE round_id = ?1 AND hole_number = ?2"
                ),
                params![round_id.to_string(), i64::from(hole_number)],
                hole_from_row,
            )
            .optional()?;
        row.map(|(id, hole)| attach_round_id(&id, hole)).transpose()
    }

    fn save_hole(&self, hole: &Hole) -> Result<(), StorageError> {
        let conn = self.lock()?;
        let exists = conn
            .query_row(
                "SELECT 1 FROM round WHERE id = ?1",
                params![hole.round_id.to_string()],
                |_| Ok(()),
            )
            .optional()?;
        if exists.is_none() {
            return Err(StorageError::new(format!(
                "round {} not found",
                hole.round_id
            )));
        }
        upsert_hole(&conn, hole)
    }

    fn mark_round_discarded(&self, round_id: Uuid) -> Result<(), StorageError> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE round SET is_discarded = 1 WHERE id = ?1",
            params![round_id.to_string()],
        )?;
        if changed == 0 {
            return Err(StorageError::new(format!("round {round_id} not found")));
        }
        Ok(())
    }

    fn hard_delete_discarded_rounds(&self) -> Result<usize, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM hole WHERE round_id IN (SELECT id FROM round WHERE is_discarded = 1)",
            [],
        )?;
        let removed = tx.execute("DELETE FROM round WHERE is_discarded = 1", [])?;
        tx.commit()?;
        Ok(removed)
    }

    fn fetch_primary_user(&self) -> Result<Option<User>, StorageError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, first_name, last_name, email, phone FROM golfer ORDER BY rowid LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>("id")?,
                        row.get::<_, String>("first_name")?,
                        row.get::<_, String>("last_name")?,
                        row.get::<_, String>("email")?,
                        row.get::<_, Option<String>>("phone")?,
                    ))
                },
            )
            .optional()?;
        row.map(|(id, first_name, last_name, email, phone)| {
            Ok(User {
                id: parse_uuid(&id)?,
                first_name,
                last_name,
                email,
                phone,
            })
        })
        .transpose()
    }

    fn save_primary_user(&self, user: &User) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO golfer (id, first_name, last_name, email, phone) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             ON CONFLICT(id) DO UPDATE SET first_name = excluded.first_name, \
             last_name = excluded.last_name, email = excluded.email, phone = excluded.phone",
            params![
                user.id.to_string(),
                user.first_name,
                user.last_name,
                user.email,
                user.phone,
            ],
        )?;
        Ok(())
    }
}

fn upsert_hole(conn: &Connection, hole: &Hole) -> Result<(), StorageError> {
    conn.execute(
        &format!(
            "INSERT INTO hole ({HOLE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
             ON CONFLICT(round_id, hole_number) DO UPDATE SET par = excluded.par, \
             drives = excluded.drives, long_shots = excluded.long_shots, \
             approaches = excluded.approaches, chips = excluded.chips, putts = excluded.putts, \
             fairway_bunker_shots = excluded.fairway_bunker_shots, \
             greenside_bunker_shots = excluded.greenside_bunker_shots, \
             penalties = excluded.penalties"
        ),
        params![
            hole.round_id.to_string(),
            i64::from(hole.hole_number),
            i64::from(hole.par),
            i64::from(hole.drives),
            i64::from(hole.long_shots),
            i64::from(hole.approaches),
            i64::from(hole.chips),
            i64::from(hole.putts),
            i64::from(hole.fairway_bunker_shots),
            i64::from(hole.greenside_bunker_shots),
            i64::from(hole.penalties),
        ],
    )?;
    Ok(())
}
