use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for reelcut
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend selection and diagnostics settings
    pub general: GeneralConfig,

    /// Executable names or paths for the external tools
    pub tools: ToolsConfig,

    /// Codec settings for operations that re-encode
    pub encode: EncodeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            tools: ToolsConfig::default(),
            encode: EncodeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.general.validate()?;
        self.tools.validate()?;
        self.encode.validate()?;
        Ok(())
    }
}

/// Backend selection and diagnostics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Name of the media backend to use (`ffmpeg` or `melt`)
    pub backend: String,

    /// Directory listed in diagnostics when a backend call fails.
    /// Defaults to the process working directory.
    pub diagnostics_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            backend: "ffmpeg".to_string(),
            diagnostics_dir: None,
        }
    }
}

impl GeneralConfig {
    fn validate(&self) -> Result<()> {
        if self.backend.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "general.backend".to_string(),
                value: self.backend.clone(),
            }
            .into());
        }
        Ok(())
    }
}

/// Executable names or paths for the external tools
///
/// Plain names are resolved on PATH at startup; absolute paths are used
/// as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub ffmpeg: String,
    pub ffprobe: String,
    pub ffplay: String,
    pub melt: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            ffplay: "ffplay".to_string(),
            melt: "melt".to_string(),
        }
    }
}

impl ToolsConfig {
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("tools.ffmpeg", &self.ffmpeg),
            ("tools.ffprobe", &self.ffprobe),
            ("tools.ffplay", &self.ffplay),
            ("tools.melt", &self.melt),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Codec configuration for operations that re-encode (fades, melt consumers)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Video codec passed to the backend
    pub vcodec: String,

    /// Audio codec passed to the backend
    pub acodec: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            vcodec: "libx264".to_string(),
            acodec: "aac".to_string(),
        }
    }
}

impl EncodeConfig {
    fn validate(&self) -> Result<()> {
        if self.vcodec.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encode.vcodec".to_string(),
                value: self.vcodec.clone(),
            }
            .into());
        }
        if self.acodec.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encode.acodec".to_string(),
                value: self.acodec.clone(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.backend, "ffmpeg");
        assert_eq!(config.encode.vcodec, "libx264");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("reelcut.toml");

        let mut original = Config::default();
        original.general.backend = "melt".to_string();
        original.tools.ffmpeg = "/opt/ffmpeg/bin/ffmpeg".to_string();

        original.save_to_file(&file_path).unwrap();
        let loaded = Config::from_file(&file_path).unwrap();

        assert_eq!(loaded.general.backend, "melt");
        assert_eq!(loaded.tools.ffmpeg, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(loaded.encode.acodec, "aac");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[general]\nbackend = \"melt\"\n").unwrap();

        let loaded = Config::from_file(&file_path).unwrap();
        assert_eq!(loaded.general.backend, "melt");
        assert_eq!(loaded.tools.melt, "melt");
        assert_eq!(loaded.encode.vcodec, "libx264");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = Config::from_file("/nonexistent/reelcut.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_empty_codec_is_invalid() {
        let mut config = Config::default();
        config.encode.vcodec = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_backend_name_is_invalid() {
        let mut config = Config::default();
        config.general.backend = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
