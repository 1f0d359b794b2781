//! Local persistence layer
//!
//! A small file-backed key-value store; every piece of dashboard state lives
//! under one of its keys.

mod kv;

pub use kv::{KvStore, Result, StorageError};
