pub mod columns;

use std::sync::Arc;

use log::info;
use pricefeed_db::{
    version::DBVersionControl, Column, ColumnName, DBError, KeyValueStore, LedgerColumn,
    MemoryStore,
};

use self::columns::COLUMN_NAMES;
use crate::{config::PriceFeedConfig, Result};

/// Handle on the module's key-value state. Cloning shares the backend.
#[derive(Debug, Clone)]
pub struct PriceFeedStore(Arc<dyn KeyValueStore>);

impl PriceFeedStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Result<Self> {
        let store = Self(backend);
        store.startup()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(Arc::new(MemoryStore::new(&COLUMN_NAMES)))
    }

    #[cfg(feature = "rocksdb")]
    pub fn open(path: &std::path::Path) -> Result<Self> {
        let rocks = pricefeed_db::Rocks::open(path, &COLUMN_NAMES, None)?;
        Self::new(Arc::new(rocks))
    }

    #[cfg(not(feature = "rocksdb"))]
    pub fn open(path: &std::path::Path) -> Result<Self> {
        Err(crate::PriceFeedError::BackendUnavailable(path.to_path_buf()))
    }

    pub fn from_config(config: &PriceFeedConfig) -> Result<Self> {
        match &config.datadir {
            Some(path) => Self::open(path),
            None => Self::in_memory(),
        }
    }

    pub fn column<C>(&self) -> LedgerColumn<C>
    where
        C: Column + ColumnName,
    {
        LedgerColumn::new(Arc::clone(&self.0))
    }

    /// Digest of every key the module owns. Equal on all nodes that applied the same blocks.
    pub fn state_hash(&self) -> Result<String> {
        Ok(self.0.hash_db_state(&COLUMN_NAMES)?)
    }

    pub fn flush(&self) -> Result<()> {
        Ok(self.0.flush()?)
    }
}

impl DBVersionControl for PriceFeedStore {
    const CURRENT_VERSION: u32 = 1;

    fn set_version(&self, version: u32) -> pricefeed_db::Result<()> {
        self.column::<columns::Metadata>()
            .put(&Self::VERSION_KEY.to_string(), &version)?;
        self.0.flush()
    }

    fn get_version(&self) -> pricefeed_db::Result<u32> {
        let version = self
            .column::<columns::Metadata>()
            .get(&Self::VERSION_KEY.to_string())?;
        Ok(version.unwrap_or_default())
    }

    fn startup(&self) -> pricefeed_db::Result<()> {
        let version = self.get_version()?;
        if version > Self::CURRENT_VERSION {
            return Err(DBError::UnsupportedVersion);
        }
        if version < Self::CURRENT_VERSION {
            info!(
                "Stamping pricefeed store version {} (was {})",
                Self::CURRENT_VERSION,
                version
            );
            self.set_version(Self::CURRENT_VERSION)?;
        }
        Ok(())
    }
}
