use std::{fmt::Debug, marker::PhantomData, result, sync::Arc};

pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocks;
pub mod version;

use log::trace;
use serde::{de::DeserializeOwned, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub use memory::MemoryStore;
#[cfg(feature = "rocksdb")]
pub use rocks::Rocks;

pub type Result<T> = result::Result<T, DBError>;

pub type KeyValue = (Vec<u8>, Vec<u8>);

/// Ordered byte-keyed storage partitioned into named column families.
///
/// Writes are visible to subsequent reads on the same handle and each
/// `put_cf` replaces the whole value stored under its key.
pub trait KeyValueStore: Debug + Send + Sync {
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>>;

    fn put_cf(&self, cf: &str, key: &[u8], value: &[u8]) -> Result<()>;

    /// Every entry of the column family in ascending key order.
    fn iter_cf(&self, cf: &str) -> Result<Vec<KeyValue>>;

    fn flush(&self) -> Result<()>;

    /// Hex encoded SHA-256 over the length-prefixed entries of `cf_names`,
    /// walked in the given order and in key order within each family.
    fn hash_db_state(&self, cf_names: &[&'static str]) -> Result<String> {
        let mut hasher = Sha256::new();

        for cf_name in cf_names {
            let entries = self.iter_cf(cf_name)?;
            trace!("hashing {} entries of column {}", entries.len(), cf_name);
            for (key, value) in entries {
                hasher.update((key.len() as u64).to_be_bytes());
                hasher.update(&key);
                hasher.update((value.len() as u64).to_be_bytes());
                hasher.update(&value);
            }
        }

        Ok(hex::encode(hasher.finalize()))
    }
}

//
// ColumnName trait. Define associated column family NAME
//
pub trait ColumnName {
    const NAME: &'static str;
}

//
// Column trait. Define associated index type
//
pub trait Column {
    type Index: Debug + Serialize;

    fn key(index: &Self::Index) -> Result<Vec<u8>> {
        bincode::serialize(index).map_err(DBError::Bincode)
    }
}

//
// TypedColumn trait. Define associated value type
//
pub trait TypedColumn: Column {
    type Type: Serialize + DeserializeOwned + Debug;
}

#[derive(Debug)]
pub struct LedgerColumn<C>
where
    C: Column + ColumnName,
{
    pub backend: Arc<dyn KeyValueStore>,
    pub column: PhantomData<C>,
}

impl<C> Clone for LedgerColumn<C>
where
    C: Column + ColumnName,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            column: PhantomData,
        }
    }
}

impl<C> LedgerColumn<C>
where
    C: Column + ColumnName,
{
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            column: PhantomData,
        }
    }

    pub fn get_bytes(&self, key: &C::Index) -> Result<Option<Vec<u8>>> {
        self.backend.get_cf(C::NAME, &C::key(key)?)
    }

    pub fn put_bytes(&self, key: &C::Index, value: &[u8]) -> Result<()> {
        self.backend.put_cf(C::NAME, &C::key(key)?, value)
    }
}

impl<C> LedgerColumn<C>
where
    C: TypedColumn + ColumnName,
{
    pub fn get(&self, key: &C::Index) -> Result<Option<C::Type>> {
        if let Some(serialized_value) = self.get_bytes(key)? {
            let value = bincode::deserialize(&serialized_value)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    pub fn put(&self, key: &C::Index, value: &C::Type) -> Result<()> {
        let serialized_value = bincode::serialize(value)?;
        self.put_bytes(key, &serialized_value)
    }
}

#[derive(Debug, Error)]
pub enum DBError {
    #[cfg(feature = "rocksdb")]
    #[error("RocksDB Error: {0}")]
    RocksDBError(#[from] rocksdb::Error),
    #[error("Bincode Error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
    #[error("Custom Error: {0}")]
    Custom(#[from] anyhow::Error),
    #[error("DB version higher than expected. Node should be updated to support new DB version.")]
    UnsupportedVersion,
}
