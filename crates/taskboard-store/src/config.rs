use tracing::{info, instrument};

use taskboard_core::Theme;

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

/// Access to the singleton `config` row (id = 1).
pub struct ConfigRepo {
    db: Database,
}

impl ConfigRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT theme FROM config WHERE id = 1")?;
            let mut rows = stmt.query([])?;
            match rows.next()? {
                Some(row) => {
                    let raw: String = row_helpers::get(row, 0, "config", "theme")?;
                    row_helpers::parse_enum(&raw, "config", "theme")
                }
                None => Err(StoreError::NotFound("config")),
            }
        })
    }

    /// Validate `raw` against the theme set, then persist it.
    #[instrument(skip(self))]
    pub fn set_theme(&self, raw: &str) -> Result<Theme, StoreError> {
        let theme: Theme = raw
            .parse()
            .map_err(|e: taskboard_core::UnknownTheme| StoreError::Validation(e.to_string()))?;

        self.db.with_conn(|conn| {
            let rows = conn.execute("UPDATE config SET theme = ?1 WHERE id = 1", [theme.as_str()])?;
            if rows == 0 {
                return Err(StoreError::NotFound("config"));
            }
            info!(%theme, "theme updated");
            Ok(theme)
        })
    }
}
