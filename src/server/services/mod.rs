pub mod calculator;
pub mod settings_store;
pub mod storage;

pub use settings_store::SettingsStore;
pub use storage::{MemStorage, PgStorage, Storage, StorageError};
