//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod storage;
pub mod store;

pub use config::Config;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::EmotionJournalStore;
