//! # Donation Store
//!
//! Owns the location of the SQLite file and the schema of the four donation
//! tables (`Providers`, `Receivers`, `Food_Listings`, `Claims`).
//!
//! Every request opens its own short-lived connection through [`Database::connect`],
//! runs its statements and drops the connection. Nothing is cached between
//! requests, so a read issued after a successful write always observes it.

mod schema;

use crate::error::ServiceError;
use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use schema::SCHEMA;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the donation database, shared with every handler as `web::Data`.
#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens (creating if needed) the database file and makes sure all tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = db.connect()?;
        conn.execute_batch(SCHEMA)?;
        info!("Donation tables ready");
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection for one request.
    pub fn connect(&self) -> Result<Connection, ServiceError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Database;
    use tempfile::TempDir;

    /// A database in a throwaway directory. Keep the `TempDir` alive for the test.
    pub(crate) fn temp_database() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::open(dir.path().join("food_wastage.db")).unwrap();
        (dir, db)
    }
}
