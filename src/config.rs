use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::error::Error;

/// Which background treatment to derive for an image.
///
/// Recognized options and their defaults mirror the historical plugin
/// surface: `type: blur` with `radius: 10` and `saturation: 0.5`, or
/// `type: dominant` with an optional `border` fraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BackdropMode {
    Blur {
        /// Gaussian blur standard deviation.
        #[serde(default = "BackdropMode::default_radius")]
        radius: f32,
        /// 0 = grayscale, 1 = original colors.
        #[serde(default = "BackdropMode::default_saturation")]
        saturation: f32,
    },
    Dominant {
        /// Fraction of each dimension, per side, sampled as the outer edge.
        /// Absent means the whole image.
        #[serde(default)]
        border: Option<f64>,
    },
}

impl Default for BackdropMode {
    fn default() -> Self {
        Self::Blur {
            radius: Self::default_radius(),
            saturation: Self::default_saturation(),
        }
    }
}

impl BackdropMode {
    /// Largest border fraction `normalized` will hand out. The range is
    /// half-open: a fraction of 1 would mark the whole image as interior.
    const BORDER_LIMIT: f64 = 0.999;

    fn default_radius() -> f32 {
        10.0
    }

    fn default_saturation() -> f32 {
        0.5
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Blur { radius, saturation } => {
                ensure!(
                    radius.is_finite() && *radius >= 0.0,
                    "blur radius must be a non-negative finite number, got {radius}"
                );
                ensure!(
                    (0.0..=1.0).contains(saturation),
                    "saturation must be within 0..=1, got {saturation}"
                );
            }
            Self::Dominant {
                border: Some(border),
            } => {
                ensure!(
                    (0.0..1.0).contains(border),
                    "border fraction must be within 0..1, got {border}"
                );
            }
            Self::Dominant { border: None } => {}
        }
        Ok(())
    }

    /// Clamps every option into its documented range. The sampling and
    /// compositing layers assume this has happened and do no range checks
    /// of their own.
    pub fn normalized(self) -> Self {
        match self {
            Self::Blur { radius, saturation } => Self::Blur {
                radius: if radius.is_finite() { radius.max(0.0) } else { 0.0 },
                saturation: saturation.clamp(0.0, 1.0),
            },
            Self::Dominant { border } => Self::Dominant {
                border: border.map(|b| {
                    if b.is_finite() {
                        b.clamp(0.0, Self::BORDER_LIMIT)
                    } else {
                        0.0
                    }
                }),
            },
        }
    }

    /// Border fraction to sample with in dominant mode; zero elsewhere.
    pub fn border_fraction(&self) -> f64 {
        match self {
            Self::Dominant { border } => border.unwrap_or(0.0),
            Self::Blur { .. } => 0.0,
        }
    }
}

pub fn from_yaml_str(yaml: &str) -> Result<BackdropMode, Error> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn from_yaml_file(path: &Path) -> Result<BackdropMode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading backdrop options from {}", path.display()))?;
    from_yaml_str(&text).with_context(|| format!("parsing backdrop options from {}", path.display()))
}
