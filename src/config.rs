use crate::pose_detector::options::PoseDetectorOptions;
use crate::posture::classifier::{Policy, Thresholds};
use crate::posture::skeleton::SkeletonStyle;
use chrono::Offset;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Largest accepted camera width or height (8K).
pub const MAX_CAMERA_DIMENSION: u32 = 7680;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    #[default]
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub policy: Policy,
    pub thresholds: Thresholds,
    pub pose_detector: PoseDetectorOptions,
    pub skeleton_style: SkeletonStyle,
    pub camera_width: u32,
    pub camera_height: u32,
    pub frame_interval: Duration,
    /// Stop after this many classified frames. Runs until stopped when unset.
    pub frame_limit: Option<u64>,
    pub display: DisplayKind,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        let policy = Policy::default();
        Self {
            policy,
            thresholds: Thresholds::for_policy(policy),
            pose_detector: PoseDetectorOptions::default(),
            skeleton_style: SkeletonStyle::default(),
            camera_width: 1280,
            camera_height: 720,
            frame_interval: Duration::from_millis(33),
            frame_limit: None,
            display: DisplayKind::default(),
            logger_timezone: utc(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// On-disk shape of [`Config`]. Every field is optional; missing thresholds
/// fall back to the defaults of the chosen policy.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    policy: Option<Policy>,
    thresholds: ThresholdsFile,
    pose_detector: Option<PoseDetectorOptions>,
    skeleton_style: Option<SkeletonStyle>,
    camera_width: Option<u32>,
    camera_height: Option<u32>,
    frame_interval_ms: Option<u64>,
    frame_limit: Option<u64>,
    display: Option<DisplayKind>,
    logger_utc_offset_hours: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThresholdsFile {
    min_visibility: Option<f32>,
    standing_min_angle: Option<f32>,
    sitting_max_angle: Option<f32>,
    upright_back_min_angle: Option<f32>,
}

impl ThresholdsFile {
    fn resolve(self, policy: Policy) -> Thresholds {
        let defaults = Thresholds::for_policy(policy);
        Thresholds {
            min_visibility: self.min_visibility.unwrap_or(defaults.min_visibility),
            standing_min_angle: self
                .standing_min_angle
                .unwrap_or(defaults.standing_min_angle),
            sitting_max_angle: self.sitting_max_angle.unwrap_or(defaults.sitting_max_angle),
            upright_back_min_angle: self
                .upright_back_min_angle
                .unwrap_or(defaults.upright_back_min_angle),
        }
    }
}

impl ConfigFile {
    fn resolve(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let policy = self.policy.unwrap_or(defaults.policy);

        let logger_timezone = match self.logger_utc_offset_hours {
            Some(hours) => hours
                .checked_mul(3600)
                .and_then(chrono::FixedOffset::east_opt)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("logger_utc_offset_hours out of range: {}", hours))
                })?,
            None => defaults.logger_timezone,
        };

        Ok(Config {
            policy,
            thresholds: self.thresholds.resolve(policy),
            pose_detector: self.pose_detector.unwrap_or(defaults.pose_detector),
            skeleton_style: self.skeleton_style.unwrap_or(defaults.skeleton_style),
            camera_width: self.camera_width.unwrap_or(defaults.camera_width),
            camera_height: self.camera_height.unwrap_or(defaults.camera_height),
            frame_interval: self
                .frame_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.frame_interval),
            frame_limit: self.frame_limit.or(defaults.frame_limit),
            display: self.display.unwrap_or(defaults.display),
            logger_timezone,
        })
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = file.resolve()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if !(0.0..=1.0).contains(&t.min_visibility) {
            return Err(ConfigError::Invalid(format!(
                "thresholds.min_visibility must be within [0, 1], got {}",
                t.min_visibility
            )));
        }
        for (name, value) in [
            ("standing_min_angle", t.standing_min_angle),
            ("sitting_max_angle", t.sitting_max_angle),
            ("upright_back_min_angle", t.upright_back_min_angle),
        ] {
            if !(0.0..=180.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "thresholds.{} must be within [0, 180], got {}",
                    name, value
                )));
            }
        }
        if t.sitting_max_angle > t.standing_min_angle {
            return Err(ConfigError::Invalid(format!(
                "thresholds.sitting_max_angle ({}) is above standing_min_angle ({})",
                t.sitting_max_angle, t.standing_min_angle
            )));
        }

        self.pose_detector.validate().map_err(ConfigError::Invalid)?;

        if self.camera_width == 0 || self.camera_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "camera resolution must be non-zero, got {}x{}",
                self.camera_width, self.camera_height
            )));
        }
        if self.camera_width > MAX_CAMERA_DIMENSION || self.camera_height > MAX_CAMERA_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "camera resolution must be at most {}x{}, got {}x{}",
                MAX_CAMERA_DIMENSION, MAX_CAMERA_DIMENSION, self.camera_width, self.camera_height
            )));
        }

        Ok(())
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy, Policy::ThreeAngle);
        assert_eq!(config.thresholds.min_visibility, 0.3);
    }

    #[test]
    fn test_empty_file_matches_default() {
        let config = Config::from_toml("").unwrap();
        let defaults = Config::default();
        assert_eq!(config.policy, defaults.policy);
        assert_eq!(config.thresholds, defaults.thresholds);
        assert_eq!(config.frame_interval, defaults.frame_interval);
    }

    #[test]
    fn test_single_angle_policy_gets_its_thresholds() {
        let config = Config::from_toml(r#"policy = "single_angle""#).unwrap();
        assert_eq!(config.policy, Policy::SingleAngle);
        assert_eq!(config.thresholds.min_visibility, 0.5);
    }

    #[test]
    fn test_partial_thresholds_keep_policy_defaults() {
        let config = Config::from_toml(
            r#"
            policy = "single_angle"
            frame_limit = 10
            display = "gui"

            [thresholds]
            upright_back_min_angle = 160.0
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.upright_back_min_angle, 160.0);
        assert_eq!(config.thresholds.min_visibility, 0.5);
        assert_eq!(config.frame_limit, Some(10));
        assert_eq!(config.display, DisplayKind::Gui);
    }

    #[test]
    fn test_rejects_bad_model_complexity() {
        let result = Config::from_toml(
            r#"
            [pose_detector]
            model_complexity = 3
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_overlapping_angle_bounds() {
        let result = Config::from_toml(
            r#"
            [thresholds]
            sitting_max_angle = 170.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_oversized_resolution() {
        let result = Config::from_toml("camera_width = 65536\ncamera_height = 65536");
        assert!(matches!(result, Err(ConfigError::Invalid(m)) if m.contains("at most")));

        let config = Config::from_toml("camera_width = 7680\ncamera_height = 4320").unwrap();
        assert_eq!(config.camera_width, MAX_CAMERA_DIMENSION);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml("camera_id = 0"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_logger_offset() {
        let config = Config::from_toml("logger_utc_offset_hours = -7").unwrap();
        assert_eq!(config.logger_timezone.local_minus_utc(), -7 * 3600);
        assert!(Config::from_toml("logger_utc_offset_hours = 30").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/posture-monitor.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}
