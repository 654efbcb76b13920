//! Landmark Adapters
//!
//! Implementations of the LandmarkSource port.
//!
//! ## Available Adapters
//!
//! - **PoseTrackFileSource** - Reads pose-detector output (JSON or YAML) from disk
//! - **InMemoryLandmarkSource** - Returns preset frames (testing/development)

mod in_memory;
mod pose_track;

pub use in_memory::InMemoryLandmarkSource;
pub use pose_track::{
    NormalizedLandmark, PoseTrack, PoseTrackFileSource, TrackFormat, TrackFrame, TrackedJoints,
    DEFAULT_FPS,
};
