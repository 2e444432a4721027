//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Settings of the demo client.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and the RON catalogs.
    pub data_dir: PathBuf,
    /// Directory for the log file. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
    /// Simulation frames per second.
    pub frame_rate: u32,
    /// Hard cap on simulated frames.
    pub max_frames: u64,
    /// Overrides the battle seed from `config.toml`.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_dir: default_log_dir(),
            frame_rate: 60,
            max_frames: 60 * 60 * 10,
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `XIUXIAN_DATA_DIR` - content directory (default: `data`)
    /// - `XIUXIAN_LOG_DIR` - log directory (default: platform cache dir)
    /// - `XIUXIAN_FRAME_RATE` - frames per second (default: 60)
    /// - `XIUXIAN_MAX_FRAMES` - frame cap (default: 36000)
    /// - `XIUXIAN_SEED` - battle seed (default: from config.toml)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("XIUXIAN_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("XIUXIAN_LOG_DIR") {
            config.log_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        if let Some(rate) = read_env::<u32>(&lookup, "XIUXIAN_FRAME_RATE") {
            config.frame_rate = rate.max(1);
        }
        if let Some(frames) = read_env(&lookup, "XIUXIAN_MAX_FRAMES") {
            config.max_frames = frames;
        }
        config.seed = read_env(&lookup, "XIUXIAN_SEED");

        config
    }

    /// Length of one frame in time units.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "xiuxian").map(|dirs| dirs.cache_dir().join("logs"))
}
