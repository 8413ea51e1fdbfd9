use anyhow::{Context, Result};
use chrono::NaiveDate;
use lotto_db::rusqlite::Connection;
use std::path::Path;

use lotto_db::db::insert_draw;
use lotto_db::models::{validate_draw, DrawRecord};

// DrawDate,Ball 1,...,Ball 6,Bonus Ball,Ball Set,Machine,Raffles,DrawNumber
const COL_DATE: usize = 0;
const COL_FIRST_BALL: usize = 1;
const COL_BONUS: usize = 7;
const COL_BALL_SET: usize = 8;
const COL_MACHINE: usize = 9;
const COL_DRAW_NUMBER: usize = 11;

fn parse_record(record: &csv::StringRecord) -> Result<DrawRecord> {
    let get = |idx: usize| -> Result<String> {
        record
            .get(idx)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("Champ manquant à l'index {}", idx))
    };

    let get_u8 = |idx: usize| -> Result<u8> {
        let s = get(idx)?;
        s.parse::<u8>()
            .with_context(|| format!("Impossible de parser '{}' (index {})", s, idx))
    };

    let date = parse_date(&get(COL_DATE)?)?;

    let mut balls = [0u8; 6];
    for (i, ball) in balls.iter_mut().enumerate() {
        *ball = get_u8(COL_FIRST_BALL + i)?;
    }
    let bonus_ball = get_u8(COL_BONUS)?;
    validate_draw(&balls, bonus_ball)?;

    let raw_number = get(COL_DRAW_NUMBER)?;
    let draw_number = raw_number
        .parse::<u32>()
        .with_context(|| format!("Numéro de tirage invalide : '{}'", raw_number))?;

    Ok(DrawRecord {
        draw_number,
        date,
        balls,
        bonus_ball,
        machine: get(COL_MACHINE)?,
        ball_set: get(COL_BALL_SET)?,
    })
}

/// `18-Oct-2023` -> `2023-10-18`
fn parse_date(raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, "%d-%b-%Y")
        .with_context(|| format!("Format de date invalide: '{}'", raw))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

#[derive(Debug, Default)]
pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub errors: u32,
}

pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;

    let tx = conn.unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    let mut result = ImportResult::default();

    for record_result in reader.records() {
        result.total_records += 1;
        let line = result.total_records;
        match record_result {
            Ok(record) => match parse_record(&record) {
                Ok(draw) => match insert_draw(&tx, &draw) {
                    Ok(true) => result.inserted += 1,
                    Ok(false) => result.skipped += 1,
                    Err(e) => {
                        log::warn!("Erreur insertion tirage {}: {:#}", line, e);
                        result.errors += 1;
                    }
                },
                Err(e) => {
                    log::warn!("Erreur parsing ligne {}: {:#}", line, e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                log::warn!("Erreur lecture ligne {}: {}", line, e);
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Échec du commit")?;
    log::info!(
        "Import {:?} : {} insérés, {} doublons, {} erreurs",
        path,
        result.inserted,
        result.skipped,
        result.errors
    );
    Ok(result)
}
