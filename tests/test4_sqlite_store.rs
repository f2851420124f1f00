mod common;

use common::{exercise_store_contract, fill_hole};
use golf_shot_tracker::model::{HolesCount, ShotType, User};
use golf_shot_tracker::storage::sqlite::TABLES_AND_DDL;
use golf_shot_tracker::{MemoryStore, RoundStore, SqliteStore};
use rusqlite::{Connection, params};
use uuid::Uuid;

fn test_user(first_name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Sorenstam".to_string(),
        email: "annika@example.com".to_string(),
        phone: None,
    }
}

#[test]
fn test4_memory_store_contract() -> Result<(), Box<dyn std::error::Error>> {
    exercise_store_contract(&MemoryStore::new())
}

#[test]
fn test4_sqlite_store_contract() -> Result<(), Box<dyn std::error::Error>> {
    exercise_store_contract(&SqliteStore::open_in_memory()?)
}

#[test]
fn test4_schema_lists_every_table() {
    let tables: Vec<&str> = TABLES_AND_DDL.iter().map(|(name, _)| *name).collect();
    assert_eq!(tables, vec!["golfer", "round", "hole"]);
}

#[test]
fn test4_rounds_survive_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("golf_shots.db");

    let user = test_user("Annika");
    let (round_id, expected) = {
        let store = SqliteStore::open(&path)?;
        store.save_primary_user(&user)?;
        let round = store.create_round("Pebble", HolesCount::Eighteen, Some(&user))?;
        let mut hole = store.fetch_hole(round.id, 18)?.ok_or("hole 18")?;
        fill_hole(&mut hole, [1, 0, 1, 1, 3, 0, 1, 2]);
        store.save_hole(&hole)?;
        let stored = store.fetch_round(round.id)?.ok_or("round")?;
        (round.id, stored)
    };

    let store = SqliteStore::open(&path)?;
    let reopened = store.fetch_round(round_id)?.ok_or("round after reopen")?;
    assert_eq!(reopened, expected);
    assert_eq!(reopened.user_id, Some(user.id));
    assert_eq!(reopened.hole(18).map(|h| h.total_strokes()), Some(9));
    assert_eq!(store.fetch_primary_user()?, Some(user));
    Ok(())
}

#[test]
fn test4_old_schema_gains_counter_columns() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("old.db");
    let round_id = Uuid::new_v4();

    {
        let conn = Connection::open(&path)?;
        conn.execute_batch(
            "CREATE TABLE round (
                id TEXT PRIMARY KEY NOT NULL,
                course_name TEXT NOT NULL,
                holes_count INTEGER NOT NULL DEFAULT 18,
                start_date TEXT NOT NULL,
                is_discarded INTEGER NOT NULL DEFAULT 0,
                golfer_id TEXT
            );
            CREATE TABLE hole (
                round_id TEXT NOT NULL,
                hole_number INTEGER NOT NULL,
                par INTEGER NOT NULL DEFAULT 4,
                drives INTEGER NOT NULL DEFAULT 0,
                long_shots INTEGER NOT NULL DEFAULT 0,
                approaches INTEGER NOT NULL DEFAULT 0,
                chips INTEGER NOT NULL DEFAULT 0,
                putts INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (round_id, hole_number)
            );",
        )?;
        conn.execute(
            "INSERT INTO round (id, course_name, holes_count, start_date) VALUES (?1, ?2, ?3, ?4)",
            params![round_id.to_string(), "Old Course", 9, "2026-01-03T10:00:00+00:00"],
        )?;
        conn.execute(
            "INSERT INTO hole (round_id, hole_number, par, drives, putts) VALUES (?1, 1, 5, 2, 3)",
            params![round_id.to_string()],
        )?;
    }

    let store = SqliteStore::open(&path)?;
    let round = store.fetch_round(round_id)?.ok_or("old round")?;
    assert_eq!(round.course_name, "Old Course");
    assert_eq!(round.holes_count, HolesCount::Nine);
    assert_eq!(round.start_date.to_rfc3339(), "2026-01-03T10:00:00+00:00");
    assert_eq!(round.holes.len(), 1);

    let hole = &round.holes[0];
    assert_eq!(hole.par, 5);
    assert_eq!(hole.drives, 2);
    assert_eq!(hole.putts, 3);
    assert_eq!(hole.fairway_bunker_shots, 0);
    assert_eq!(hole.greenside_bunker_shots, 0);
    assert_eq!(hole.penalties, 0);

    // new columns are writable straight away
    let mut hole = hole.clone();
    hole.increment(ShotType::Penalties);
    store.save_hole(&hole)?;
    assert_eq!(store.fetch_hole(round_id, 1)?.map(|h| h.penalties), Some(1));

    // opening twice must not try to add the columns again
    drop(store);
    let store = SqliteStore::open(&path)?;
    assert_eq!(store.fetch_rounds(false)?.len(), 1);
    Ok(())
}

#[test]
fn test4_unknown_holes_count_is_a_read_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("odd.db");
    let store = SqliteStore::open(&path)?;
    let round_id = Uuid::new_v4();
    store.execute_batch(&format!(
        "INSERT INTO round (id, course_name, holes_count, start_date) \
         VALUES ('{round_id}', 'Pitch and Putt', 12, '2026-02-01T09:00:00+00:00');"
    ))?;

    assert!(store.fetch_round(round_id).is_err());
    assert!(store.fetch_rounds(false).is_err());
    Ok(())
}

#[test]
fn test4_primary_user_upsert_keeps_identity() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open_in_memory()?;
    let mut user = test_user("Annika");
    store.save_primary_user(&user)?;

    user.email = "a.sorenstam@example.org".to_string();
    user.phone = Some("555-0101".to_string());
    store.save_primary_user(&user)?;

    let stored = store.fetch_primary_user()?.ok_or("user")?;
    assert_eq!(stored.id, user.id);
    assert_eq!(stored, user);
    Ok(())
}

#[test]
fn test4_startup_script_runs_in_one_transaction() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open_in_memory()?;
    let id = Uuid::new_v4();

    let broken = format!(
        "INSERT INTO golfer (id, first_name, last_name, email) VALUES ('{id}', 'Se Ri', 'Pak', 'seri@example.com');
         INSERT INTO no_such_table VALUES (1);"
    );
    assert!(store.execute_batch(&broken).is_err());
    assert!(store.fetch_primary_user()?.is_none());

    store.execute_batch(&format!(
        "INSERT INTO golfer (id, first_name, last_name, email) VALUES ('{id}', 'Se Ri', 'Pak', 'seri@example.com');"
    ))?;
    let user = store.fetch_primary_user()?.ok_or("seeded user")?;
    assert_eq!(user.id, id);
    assert_eq!(user.phone, None);
    Ok(())
}

#[test]
fn test4_sqlite_keeps_creation_order() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open_in_memory()?;
    let names = ["Augusta", "Carnoustie", "Bethpage"];
    for name in names {
        store.create_round(name, HolesCount::Nine, None)?;
    }
    let stored: Vec<String> = store
        .fetch_rounds(true)?
        .into_iter()
        .map(|r| r.course_name)
        .collect();
    assert_eq!(stored, names);
    Ok(())
}
