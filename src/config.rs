use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

use crate::menu::{
    GRAB_RADIUS, LABEL_PADDING, MAX_GRAB_RADIUS, MAX_LABEL_PADDING, WEDGE_HUE_SEPARATION,
    WIDTH_TOLERANCE,
};

pub const ENV_PREFIX: &str = "PIE_MENU";

/// Strategy used to pick the hue of a newly materialized wedge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Colorizer {
    /// Skips around the wheel so neighbouring wedges get dissimilar colors. Removing an
    /// entry never recolors the others.
    #[default]
    DistinctHues,
    /// Walks the wheel in `1/N` steps; a menu populated before its first layout reads as a
    /// color wheel.
    Gradient,
    /// Derived from the label text alone, so the same label gets the same color in every
    /// menu and on every machine.
    LabelHash,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "lenient_colorizer")]
    pub colorizer: Colorizer,
    #[serde(deserialize_with = "clamped_padding")]
    pub label_padding: i32,
    #[serde(deserialize_with = "clamped_grab_radius")]
    pub grab_radius: i32,
    pub hue_separation: f64,
    pub width_tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            colorizer: Colorizer::default(),
            label_padding: LABEL_PADDING,
            grab_radius: GRAB_RADIUS,
            hue_separation: WEDGE_HUE_SEPARATION,
            width_tolerance: WIDTH_TOLERANCE,
        }
    }
}

/// An unknown strategy name is not worth failing startup over.
fn lenient_colorizer<'de, D>(deserializer: D) -> Result<Colorizer, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or_else(|e| {
        log::error!(
            "invalid {}_COLORIZER: '{}' ({}), using {}",
            ENV_PREFIX,
            raw,
            e,
            Colorizer::default()
        );
        Colorizer::default()
    }))
}

fn clamped_padding<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i32::deserialize(deserializer)?;
    Ok(clamp_logged("LABEL_PADDING", value, MAX_LABEL_PADDING))
}

fn clamped_grab_radius<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i32::deserialize(deserializer)?;
    Ok(clamp_logged("GRAB_RADIUS", value, MAX_GRAB_RADIUS))
}

fn clamp_logged(name: &str, value: i32, max: i32) -> i32 {
    let clamped = value.clamp(0, max);
    if clamped != value {
        log::error!(
            "{}_{} out of range: {} (allowed 0..={}), using {}",
            ENV_PREFIX,
            name,
            value,
            max,
            clamped
        );
    }
    clamped
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Option<std::path::PathBuf> {
    ProjectDirs::from("com.github", "osndok", "piemenu")
        .map(|dirs| dirs.config_dir().join("piemenu.toml"))
}

/// Layers the optional config file under `PIE_MENU_*` environment variables.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = get_config_path() {
        builder = builder.add_source(config::File::from(path).required(false));
    }
    let s = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Settings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load pie menu settings, using defaults: {}", e);
            Settings::default()
        }
    }
}
