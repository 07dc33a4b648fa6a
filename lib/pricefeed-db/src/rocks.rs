use std::path::Path;

use log::debug;
use rocksdb::{
    BlockBasedOptions, Cache, ColumnFamily, ColumnFamilyDescriptor, DBCompressionType,
    IteratorMode, Options, DB,
};

use crate::{DBError, KeyValue, KeyValueStore, Result};

fn get_db_default_options() -> Options {
    let mut block_opts = BlockBasedOptions::default();
    block_opts.set_block_size(64 << 10); // kb
    block_opts.set_block_cache(&Cache::new_lru_cache(64 << 20)); // mb
    block_opts.set_cache_index_and_filter_blocks(true);
    block_opts.set_bloom_filter(10.0, true);

    let mut opts = Options::default();
    opts.create_if_missing(true);
    opts.create_missing_column_families(true);
    opts.set_write_buffer_size(64 << 20); // mb
    opts.set_max_write_buffer_number(2);
    opts.set_enable_pipelined_write(true);

    opts.set_compression_type(DBCompressionType::Lz4);
    opts.set_bottommost_compression_type(DBCompressionType::Zstd);
    opts.set_block_based_table_factory(&block_opts);
    let n = num_cpus::get();
    opts.increase_parallelism(n as i32);
    opts.set_level_compaction_dynamic_level_bytes(true);
    opts
}

#[derive(Debug)]
pub struct Rocks(DB);

impl Rocks {
    pub fn open(path: &Path, cf_names: &[&'static str], opts: Option<Options>) -> Result<Self> {
        let cf_descriptors = cf_names
            .iter()
            .map(|cf_name| ColumnFamilyDescriptor::new(*cf_name, Options::default()));

        let db_opts = opts.unwrap_or_else(get_db_default_options);
        let db = DB::open_cf_descriptors(&db_opts, path, cf_descriptors)?;
        debug!("opened rocksdb at {} with columns {:?}", path.display(), cf_names);

        Ok(Self(db))
    }

    pub fn cf_handle(&self, cf: &str) -> Result<&ColumnFamily> {
        self.0
            .cf_handle(cf)
            .ok_or_else(|| DBError::UnknownColumn(cf.to_string()))
    }
}

impl KeyValueStore for Rocks {
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let opt = self.0.get_cf(self.cf_handle(cf)?, key)?;
        Ok(opt)
    }

    fn put_cf(&self, cf: &str, key: &[u8], value: &[u8]) -> Result<()> {
        self.0.put_cf(self.cf_handle(cf)?, key, value)?;
        Ok(())
    }

    fn iter_cf(&self, cf: &str) -> Result<Vec<KeyValue>> {
        self.0
            .iterator_cf(self.cf_handle(cf)?, IteratorMode::Start)
            .map(|item| {
                let (key, value) = item?;
                Ok((key.into_vec(), value.into_vec()))
            })
            .collect()
    }

    fn flush(&self) -> Result<()> {
        self.0.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        {
            let rocks = Rocks::open(temp_dir.path(), &["cf"], None).unwrap();
            rocks.put_cf("cf", b"assets", b"blob").unwrap();
            rocks.flush().unwrap();
        }

        let rocks = Rocks::open(temp_dir.path(), &["cf"], None).unwrap();
        assert_eq!(rocks.get_cf("cf", b"assets").unwrap(), Some(b"blob".to_vec()));
        assert_eq!(rocks.iter_cf("cf").unwrap().len(), 1);
    }
}
