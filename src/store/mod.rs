mod contacts;
mod folders;

pub use folders::NewFolder;
pub use folders::NewFolderBuilder;

use std::{
    fs::create_dir_all,
    io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use include_dir::{Dir, include_dir};
use log::debug;
use rusqlite::Connection;
use rusqlite_migration::Migrations;
use thiserror::Error;

static MIGRATIONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/migrations");

static MIGRATIONS: LazyLock<Migrations<'static>> = LazyLock::new(|| {
    Migrations::from_directory(&MIGRATIONS_DIR).expect("embedded migrations should be valid")
});

#[derive(Debug, Error)]
pub enum StoreInitError {
    #[error("IO Issue when constructing DB {0}")]
    Io(#[from] io::Error),
    #[error("opening DB failed: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("migrating DB failed: {0}")]
    Migration(#[from] rusqlite_migration::Error),
}

/// Folders and contacts of all accounts, kept in one SQLite database.
#[derive(Debug)]
pub struct Store {
    db: Connection,
}

impl Store {
    pub fn open(state_dir: &Path) -> Result<Self, StoreInitError> {
        let state_file = Self::prepare_state_file(state_dir)?;
        debug!("opening state file {}", state_file.to_string_lossy());
        let db = Connection::open(state_file)?;
        let journal_mode: String =
            db.pragma_update_and_check(None, "journal_mode", "wal", |row| row.get(0))?;
        debug!("using journal mode {journal_mode}");

        Self::migrate(db)
    }

    pub fn open_in_memory() -> Result<Self, StoreInitError> {
        Self::migrate(Connection::open_in_memory()?)
    }

    fn migrate(mut db: Connection) -> Result<Self, StoreInitError> {
        MIGRATIONS.to_latest(&mut db)?;
        db.pragma_update(None, "synchronous", 1)?;

        Ok(Self { db })
    }

    fn prepare_state_file(state_dir: &Path) -> io::Result<PathBuf> {
        create_dir_all(state_dir)?;

        Ok(state_dir.join("mailprefs.db"))
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if let Err(err) = self.db.execute_batch("pragma optimize;") {
            debug!("optimizing DB failed: {err}");
        }
    }
}
