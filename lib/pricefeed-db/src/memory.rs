use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::{DBError, KeyValue, KeyValueStore, Result};

type ColumnFamily = BTreeMap<Vec<u8>, Vec<u8>>;

/// In-process backend. Column families must be declared up front, the same
/// way `Rocks::open` requires its descriptors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    columns: RwLock<BTreeMap<String, ColumnFamily>>,
}

impl MemoryStore {
    pub fn new(cf_names: &[&'static str]) -> Self {
        let columns = cf_names
            .iter()
            .map(|name| (name.to_string(), ColumnFamily::new()))
            .collect();

        Self {
            columns: RwLock::new(columns),
        }
    }
}

fn unknown_column(cf: &str) -> DBError {
    DBError::UnknownColumn(cf.to_string())
}

impl KeyValueStore for MemoryStore {
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let columns = self.columns.read();
        let column = columns.get(cf).ok_or_else(|| unknown_column(cf))?;
        Ok(column.get(key).cloned())
    }

    fn put_cf(&self, cf: &str, key: &[u8], value: &[u8]) -> Result<()> {
        let mut columns = self.columns.write();
        let column = columns.get_mut(cf).ok_or_else(|| unknown_column(cf))?;
        column.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn iter_cf(&self, cf: &str) -> Result<Vec<KeyValue>> {
        let columns = self.columns.read();
        let column = columns.get(cf).ok_or_else(|| unknown_column(cf))?;
        Ok(column
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_is_rejected() {
        let store = MemoryStore::new(&["known"]);
        assert!(matches!(
            store.get_cf("unknown", b"k"),
            Err(DBError::UnknownColumn(cf)) if cf == "unknown"
        ));
        assert!(store.put_cf("unknown", b"k", b"v").is_err());
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let store = MemoryStore::new(&["cf"]);
        store.put_cf("cf", b"raw:b", b"2").unwrap();
        store.put_cf("cf", b"assets", b"0").unwrap();
        store.put_cf("cf", b"raw:a", b"1").unwrap();

        let keys: Vec<_> = store
            .iter_cf("cf")
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![b"assets".to_vec(), b"raw:a".to_vec(), b"raw:b".to_vec()]
        );
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new(&["cf"]);
        store.put_cf("cf", b"k", b"first").unwrap();
        store.put_cf("cf", b"k", b"second").unwrap();
        assert_eq!(store.get_cf("cf", b"k").unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.iter_cf("cf").unwrap().len(), 1);
    }
}
