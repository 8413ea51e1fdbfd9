use anyhow::Result;
use rusqlite::Connection;

use crate::db::fetch_all_draws;
use crate::models::DrawRecord;

/// Fournisseur de l'historique des tirages.
pub trait DrawSource {
    fn read_draw_history(&self) -> Result<Vec<DrawRecord>>;
}

impl DrawSource for Connection {
    fn read_draw_history(&self) -> Result<Vec<DrawRecord>> {
        let draws = fetch_all_draws(self)?;
        log::debug!("{} tirages lus depuis la base", draws.len());
        Ok(draws)
    }
}

impl DrawSource for [DrawRecord] {
    fn read_draw_history(&self) -> Result<Vec<DrawRecord>> {
        Ok(self.to_vec())
    }
}

impl DrawSource for Vec<DrawRecord> {
    fn read_draw_history(&self) -> Result<Vec<DrawRecord>> {
        Ok(self.clone())
    }
}

impl<S: DrawSource + ?Sized> DrawSource for &S {
    fn read_draw_history(&self) -> Result<Vec<DrawRecord>> {
        (**self).read_draw_history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{insert_draw, migrate};
    use crate::models::test_draw;

    #[test]
    fn test_connection_source() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        insert_draw(&conn, &test_draw(1, "2024-01-01")).unwrap();
        insert_draw(&conn, &test_draw(2, "2024-01-04")).unwrap();

        let draws = conn.read_draw_history().unwrap();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].draw_number, 2);
    }

    #[test]
    fn test_connection_source_without_schema_fails() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(conn.read_draw_history().is_err());
    }

    #[test]
    fn test_in_memory_source() {
        let history = vec![test_draw(1, "2024-01-01")];
        assert_eq!(history.read_draw_history().unwrap(), history);
        assert!(Vec::<DrawRecord>::new().read_draw_history().unwrap().is_empty());
    }
}
