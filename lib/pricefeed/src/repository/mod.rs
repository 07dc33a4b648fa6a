use crate::Result;

mod asset;
mod current_price;
mod oracle;
mod raw_price;

pub use asset::*;
pub use current_price::*;
pub use oracle::*;
pub use raw_price::*;

pub trait RepositoryOps<K, V> {
    fn get(&self, key: &K) -> Result<Option<V>>;
    fn put(&self, key: &K, value: &V) -> Result<()>;
}
