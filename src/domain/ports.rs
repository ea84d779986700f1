use crate::utils::error::Result;

/// Byte-level storage backend for the codec. Everything here is synchronous:
/// the whole program runs on one thread and each save/load runs to completion
/// before the next user action is accepted.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn startup_file(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}
