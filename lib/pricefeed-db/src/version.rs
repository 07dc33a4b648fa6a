use crate::Result;

/// Versioning of the on-disk schema.
///
/// The version number lives under `VERSION_KEY` in the store's metadata
/// column. `CURRENT_VERSION` is the latest schema this code understands; a
/// store stamped with a higher number was written by a newer node and must
/// not be opened.
pub trait DBVersionControl {
    const VERSION_KEY: &'static str = "version";
    const CURRENT_VERSION: u32;

    /// Sets the version number in the database to the specified `version`.
    ///
    /// The write is flushed immediately so a crash after the update cannot
    /// leave a stale version behind.
    fn set_version(&self, version: u32) -> Result<()>;

    /// Retrieves the current version number from the database, 0 when the
    /// store was never stamped.
    fn get_version(&self) -> Result<u32>;

    /// Startup routine to ensure the database schema is up-to-date.
    ///
    /// This should be called right after the backend is opened.
    fn startup(&self) -> Result<()>;
}
