//! # Storage Module
//!
//! The persistence port for the sales ledger, and its two backends.
//!
//! ## Persisted Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Persisted State Layout                              │
//! │                                                                         │
//! │  ONE document under ONE storage key:                                    │
//! │                                                                         │
//! │    <app-data>/boucherie-sales.json                                      │
//! │    [                                                                    │
//! │      { "id": "…", "items": [ { "product": {…}, "quantity": 2 } ],      │
//! │        "total": 3000, "amountReceived": 3500, "change": 500,            │
//! │        "employeeId": 1, "employeeName": "Aïcha",                        │
//! │        "date": "2026-08-07T10:15:00+00:00", "timestamp": … },           │
//! │      …newest first…                                                     │
//! │    ]                                                                    │
//! │                                                                         │
//! │  The whole list is rewritten on every save; last write wins. A          │
//! │  second tab/process racing on the file is a documented limitation,      │
//! │  not a supported configuration.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::StorageError;
use boucherie_core::Sale;

/// Storage key for the sales ledger; the file backend appends `.json`.
pub const STORAGE_KEY: &str = "boucherie-sales";

// =============================================================================
// Persistence Port
// =============================================================================

/// The persistence port the ledger is loaded from and saved to.
///
/// Injected into the terminal so tests substitute [`MemoryStorage`] and
/// assert atomicity and degraded-durability behavior without touching the
/// real file system.
pub trait SalesStorage: Send {
    /// Reads the full persisted sale list. A backend with no prior data
    /// returns an empty list, not an error.
    fn load(&self) -> Result<Vec<Sale>, StorageError>;

    /// Serializes and durably writes the full sale list.
    fn save(&self, sales: &[Sale]) -> Result<(), StorageError>;
}

// =============================================================================
// JSON File Backend
// =============================================================================

/// File-backed storage: the whole ledger as one JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Storage at the OS-appropriate app-data location:
    /// - Linux: `~/.local/share/boucherie-pos/boucherie-sales.json`
    /// - macOS: `~/Library/Application Support/com.boucherie.boucherie-pos/…`
    /// - Windows: `%APPDATA%\boucherie\boucherie-pos\data\…`
    pub fn at_default_location() -> Result<Self, StorageError> {
        let dirs =
            ProjectDirs::from("com", "boucherie", "boucherie-pos").ok_or(StorageError::NoDataDir)?;
        Ok(JsonFileStorage::new(
            dirs.data_dir().join(format!("{}.json", STORAGE_KEY)),
        ))
    }

    /// The file this backend reads and writes.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Sale>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // a fresh install has no prior data
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Read(e)),
        };
        serde_json::from_slice(&bytes).map_err(StorageError::Corrupt)
    }

    fn save(&self, sales: &[Sale]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }

        let json = serde_json::to_vec(sales)
            .map_err(|e| StorageError::Write(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        // write-then-rename so a crash mid-write cannot corrupt the ledger
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(StorageError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StorageError::Write)?;

        debug!(path = %self.path.display(), sales = sales.len(), "ledger saved");
        Ok(())
    }
}

// =============================================================================
// In-Memory Backend (test double)
// =============================================================================

/// In-memory storage for tests.
///
/// Holds the last saved list behind a mutex and can be switched into a
/// failing mode to exercise the degraded-durability and corrupt-load
/// paths without a real disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    sales: Mutex<Vec<Sale>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Storage pre-seeded with sales, as if a prior session had saved them.
    pub fn with_sales(sales: Vec<Sale>) -> Self {
        MemoryStorage {
            sales: Mutex::new(sales),
            ..MemoryStorage::default()
        }
    }

    /// The last saved sale list.
    pub fn saved(&self) -> Vec<Sale> {
        self.sales.lock().expect("storage mutex poisoned").clone()
    }

    /// Makes every subsequent `load` fail.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `save` fail.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl SalesStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Sale>, StorageError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Read(std::io::Error::new(
                ErrorKind::Other,
                "simulated load failure",
            )));
        }
        Ok(self.saved())
    }

    fn save(&self, sales: &[Sale]) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Write(std::io::Error::new(
                ErrorKind::Other,
                "simulated save failure",
            )));
        }
        *self.sales.lock().expect("storage mutex poisoned") = sales.to_vec();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use boucherie_core::{Cart, Catalog, Money, Quantity, Sale};

    fn sample_sale() -> Sale {
        let catalog = Catalog::butcher_shop();
        let mut cart = Cart::new();
        cart.add(catalog.get(1).unwrap(), Quantity::from_units(2)).unwrap();
        Sale::finalize(&cart, Money::from_francs(3500), 1, "Aïcha").unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("boucherie-store-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_file_round_trip() {
        let path = temp_path("round-trip");
        let storage = JsonFileStorage::new(&path);

        let sales = vec![sample_sale()];
        storage.save(&sales).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, sales);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let storage = JsonFileStorage::new(temp_path("does-not-exist"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        let sales = vec![sample_sale()];

        storage.save(&sales).unwrap();
        assert_eq!(storage.load().unwrap(), sales);
    }

    #[test]
    fn test_memory_storage_failure_switches() {
        let storage = MemoryStorage::new();
        storage.set_fail_saves(true);
        assert!(storage.save(&[]).is_err());

        storage.set_fail_saves(false);
        storage.set_fail_loads(true);
        assert!(storage.load().is_err());
    }
}
