//! Disk output for mirrored documents.
//!
//! Documents are written as plain UTF-8 text; parent directories are created
//! as needed. No temp files or atomic rename.

mod writer;

pub use writer::{persist_text, PersistOutcome};
