//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `landmarks` - Pose track readers and in-memory sources
//! - `storage` - Transient upload storage

pub mod http;
pub mod landmarks;
pub mod storage;

pub use http::{app_router, AnalysisAppState};
pub use landmarks::{InMemoryLandmarkSource, PoseTrackFileSource};
pub use storage::TempFileUploadStorage;
