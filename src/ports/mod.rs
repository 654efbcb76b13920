//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LandmarkSource` - Turns a stored clip into pose frames
//! - `UploadStorage` - Short-lived storage for uploaded clips

mod landmark_source;
mod upload_storage;

pub use landmark_source::{LandmarkSource, LandmarkSourceError};
pub use upload_storage::{StoredUpload, UploadStorage, UploadStorageError};
