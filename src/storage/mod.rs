//! Mempool storage access
//!
//! The pipeline's only persistent inputs live here: a directory of
//! transaction record files.

pub mod mempool;

pub use mempool::load_mempool;
