// Configuration management
//
// User-facing settings persisted as TOML next to the executable. Loading
// falls back to defaults when the file is missing or malformed, so a
// fresh checkout runs without any setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "rusticom.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale factor (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target frame rate (60 for NTSC)
    pub fps: u32,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
            },
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration from a TOML file, or fall back to defaults
    ///
    /// A missing or unparsable file yields the default configuration; the
    /// file is never created implicitly.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist the configuration as TOML
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = toml::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, text)
    }
}
