//! Storage Adapters
//!
//! Implementations of the UploadStorage port for holding uploaded clips
//! while they are analyzed.
//!
//! ## Available Adapters
//!
//! - **TempFileUploadStorage** - Named temporary files on local disk
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::TempFileUploadStorage;
//!
//! let storage = TempFileUploadStorage::new(std::env::temp_dir(), 100 * 1024 * 1024);
//! ```

mod temp_upload_storage;

pub use temp_upload_storage::TempFileUploadStorage;
