use anyhow::{Context, Result};
use rusqlite::{Connection, Row};
use std::path::{Path, PathBuf};

use crate::models::DrawRecord;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS draws (
    draw_number   INTEGER PRIMARY KEY,
    date          TEXT NOT NULL,
    ball_1        INTEGER NOT NULL,
    ball_2        INTEGER NOT NULL,
    ball_3        INTEGER NOT NULL,
    ball_4        INTEGER NOT NULL,
    ball_5        INTEGER NOT NULL,
    ball_6        INTEGER NOT NULL,
    bonus_ball    INTEGER NOT NULL,
    ball_set      TEXT NOT NULL,
    machine       TEXT NOT NULL
);
";

const SELECT_DRAWS: &str = "
SELECT draw_number, date, ball_1, ball_2, ball_3, ball_4, ball_5, ball_6, bonus_ball, ball_set, machine
FROM draws ORDER BY date DESC, draw_number DESC";

pub fn db_path() -> PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("lotto.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer le répertoire {:?}", parent))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Impossible d'ouvrir la base {:?}", path))?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Échec de la migration")?;
    Ok(())
}

pub fn insert_draw(conn: &Connection, draw: &DrawRecord) -> Result<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO draws (draw_number, date, ball_1, ball_2, ball_3, ball_4, ball_5, ball_6, bonus_ball, ball_set, machine)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        rusqlite::params![
            draw.draw_number,
            draw.date,
            draw.balls[0],
            draw.balls[1],
            draw.balls[2],
            draw.balls[3],
            draw.balls[4],
            draw.balls[5],
            draw.bonus_ball,
            draw.ball_set,
            draw.machine,
        ],
    ).context("Échec de l'insertion")?;
    Ok(changed > 0)
}

fn row_to_draw(row: &Row<'_>) -> rusqlite::Result<DrawRecord> {
    Ok(DrawRecord {
        draw_number: row.get(0)?,
        date: row.get(1)?,
        balls: [
            row.get::<_, u8>(2)?,
            row.get::<_, u8>(3)?,
            row.get::<_, u8>(4)?,
            row.get::<_, u8>(5)?,
            row.get::<_, u8>(6)?,
            row.get::<_, u8>(7)?,
        ],
        bonus_ball: row.get(8)?,
        ball_set: row.get(9)?,
        machine: row.get(10)?,
    })
}

/// Historique complet, tirage le plus récent en premier.
pub fn fetch_all_draws(conn: &Connection) -> Result<Vec<DrawRecord>> {
    let mut stmt = conn.prepare(SELECT_DRAWS)?;
    let draws = stmt
        .query_map([], row_to_draw)?
        .collect::<Result<Vec<_>, _>>()
        .context("Lecture de l'historique impossible")?;
    Ok(draws)
}

pub fn fetch_last_draws(conn: &Connection, limit: u32) -> Result<Vec<DrawRecord>> {
    let mut stmt = conn.prepare(&format!("{SELECT_DRAWS} LIMIT ?1"))?;
    let draws = stmt
        .query_map([limit], row_to_draw)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(draws)
}

pub fn count_draws(conn: &Connection) -> Result<u32> {
    let count: u32 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
    Ok(count)
}
