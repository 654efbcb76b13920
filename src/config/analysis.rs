//! Analysis pipeline configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::landmarks::DEFAULT_FPS;

/// Analysis pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Sample every Nth source frame of a clip
    #[serde(default = "default_frame_stride")]
    pub frame_stride: usize,

    /// Frame rate assumed when a pose track declares none
    #[serde(default = "default_fps")]
    pub default_fps: f64,

    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Directory for transient uploads; the OS temp dir when unset
    pub upload_dir: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Directory uploads are written to
    pub fn upload_dir_or_temp(&self) -> PathBuf {
        self.upload_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frame_stride == 0 {
            return Err(ValidationError::InvalidFrameStride);
        }
        if !self.default_fps.is_finite() || self.default_fps <= 0.0 {
            return Err(ValidationError::InvalidDefaultFps);
        }
        if self.max_upload_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_stride: default_frame_stride(),
            default_fps: default_fps(),
            max_upload_bytes: default_max_upload_bytes(),
            upload_dir: None,
        }
    }
}

fn default_frame_stride() -> usize {
    2
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.frame_stride, 2);
        assert_eq!(config.default_fps, DEFAULT_FPS);
        assert_eq!(config.max_upload_bytes, 100 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_stride_is_invalid() {
        let config = AnalysisConfig {
            frame_stride: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFrameStride));
    }

    #[test]
    fn test_non_positive_fps_is_invalid() {
        let config = AnalysisConfig {
            default_fps: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDefaultFps));
    }

    #[test]
    fn test_zero_upload_limit_is_invalid() {
        let config = AnalysisConfig {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUploadLimit));
    }

    #[test]
    fn test_upload_dir_falls_back_to_temp() {
        let config = AnalysisConfig::default();
        assert_eq!(config.upload_dir_or_temp(), std::env::temp_dir());

        let config = AnalysisConfig {
            upload_dir: Some(PathBuf::from("/var/uploads")),
            ..Default::default()
        };
        assert_eq!(config.upload_dir_or_temp(), PathBuf::from("/var/uploads"));
    }
}
