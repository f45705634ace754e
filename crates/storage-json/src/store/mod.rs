//! Collection files: configuration, loading, and atomic persistence.

mod write_actor;

pub use write_actor::{spawn_writer, WriteHandle};

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::errors::{IntoCore, StorageError};
use glampsite_core::records::Record;
use glampsite_core::Result;

pub const CUSTOMERS_FILE: &str = "clientes.json";
pub const UNITS_FILE: &str = "glampings.json";
pub const RESERVATIONS_FILE: &str = "reservas.json";

/// Where the collection files live and how they are written.
#[derive(Debug, Clone)]
pub struct JsonStoreConfig {
    pub data_dir: PathBuf,
    /// Write 2-space indented JSON instead of a single line
    pub pretty: bool,
}

impl JsonStoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            pretty: true,
        }
    }

    pub fn collection_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

/// Creates the data directory if needed. Collection files are created on
/// first write.
pub fn init(config: &JsonStoreConfig) -> Result<()> {
    fs::create_dir_all(&config.data_dir)
        .map_err(StorageError::from)
        .into_core()?;
    debug!("Data directory in use: {}", config.data_dir.display());
    Ok(())
}

/// A persisted record shape and its conversion to the domain type.
///
/// Decoding is fallible: persisted data that does not satisfy the domain
/// invariants is reported as malformed instead of being passed through.
pub trait WireRecord: Serialize + DeserializeOwned + Send + 'static {
    type Domain: Record + Send + 'static;

    fn into_domain(self) -> std::result::Result<Self::Domain, StorageError>;
    fn from_domain(domain: &Self::Domain) -> Self;
}

/// One JSON array file holding every record of a kind.
pub struct JsonCollection<W: WireRecord> {
    path: PathBuf,
    pretty: bool,
    _wire: PhantomData<fn() -> W>,
}

impl<W: WireRecord> Clone for JsonCollection<W> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            pretty: self.pretty,
            _wire: PhantomData,
        }
    }
}

impl<W: WireRecord> JsonCollection<W> {
    pub fn new(config: &JsonStoreConfig, file_name: &str) -> Self {
        Self {
            path: config.collection_path(file_name),
            pretty: config.pretty,
            _wire: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record in file order.
    ///
    /// A missing or empty file loads as an empty collection.
    pub fn load(&self) -> Result<Vec<W::Domain>> {
        self.load_impl().into_core()
    }

    fn load_impl(&self) -> std::result::Result<Vec<W::Domain>, StorageError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Collection file {} does not exist", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let wire: Vec<W> = serde_json::from_slice(&raw).map_err(|e| {
            StorageError::Malformed(format!("{}: {}", self.path.display(), e))
        })?;
        wire.into_iter().map(WireRecord::into_domain).collect()
    }

    /// Replaces the file contents with `records`.
    ///
    /// The new contents are written to a sibling temporary file and renamed
    /// over the original, so readers see either the old or the new array.
    pub fn persist(&self, records: &[W::Domain]) -> Result<()> {
        self.persist_impl(records).into_core()
    }

    fn persist_impl(&self, records: &[W::Domain]) -> std::result::Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let wire: Vec<W> = records.iter().map(W::from_domain).collect();
        let json = if self.pretty {
            serde_json::to_string_pretty(&wire)?
        } else {
            serde_json::to_string(&wire)?
        };

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
