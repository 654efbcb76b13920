//! Analysis handlers - Turning uploaded clips into throw metrics.

mod analyze_video;

pub use analyze_video::{AnalyzeVideoCommand, AnalyzeVideoHandler};
