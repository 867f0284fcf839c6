use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("{axis} is not configured and no viewport size is known")]
    MissingDimension { axis: &'static str },
    #[error("{axis} must be at least one cell")]
    ZeroDimension { axis: &'static str },
    #[error("a {width}x{height} board has too many cells")]
    TooLarge { width: u32, height: u32 },
    #[error("cell_size + cell_border must be positive")]
    ZeroCellPitch,
    #[error("min_speed {min} ms must be below max_speed {max} ms")]
    InvertedSpeedBounds { min: u64, max: u64 },
    #[error("tick_speed {speed} ms must be strictly between {min} and {max} ms")]
    SpeedOutOfRange { speed: u64, min: u64, max: u64 },
    #[error("speed_step must be positive")]
    ZeroSpeedStep,
    #[error("seed_rate must be positive")]
    ZeroSeedRate,
}

/// User-facing options, as read from a TOML file.
///
/// Every key is optional and unknown keys are ignored. The camelCase names
/// of the browser version are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Board width in cells; derived from the viewport when absent.
    #[serde(alias = "x")]
    pub width: Option<u32>,
    /// Board height in cells; derived from the viewport when absent.
    #[serde(alias = "y")]
    pub height: Option<u32>,
    /// Cell side in pixels.
    #[serde(alias = "cellSize")]
    pub cell_size: u32,
    /// Gap between cells in pixels.
    #[serde(alias = "cellBorder")]
    pub cell_border: u32,
    /// Milliseconds between generations.
    #[serde(alias = "speed")]
    pub tick_speed: u64,
    #[serde(alias = "maxSpeed")]
    pub max_speed: u64,
    #[serde(alias = "minSpeed")]
    pub min_speed: u64,
    /// Milliseconds added or removed by one speed change.
    #[serde(alias = "incSpeed")]
    pub speed_step: u64,
    /// Random seeding makes roughly one cell in `seed_rate` alive.
    #[serde(alias = "seed")]
    pub seed_rate: u32,
    /// Whether clicking a cell toggles it.
    pub interactive: bool,
    /// Seed of the random generator; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            cell_size: 12,
            cell_border: 1,
            tick_speed: 250,
            max_speed: 3000,
            min_speed: 25,
            speed_step: 25,
            seed_rate: 8,
            interactive: true,
            rng_seed: None,
        }
    }
}

impl LifeConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&data)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Board dimensions, falling back to as many cells as fit in `viewport`
    /// (in pixels).
    pub fn dimensions(&self, viewport: Option<[f32; 2]>) -> Result<(u32, u32), ConfigError> {
        let pitch = self.cell_size + self.cell_border;
        if pitch == 0 {
            return Err(ConfigError::ZeroCellPitch);
        }
        let width = Self::fit(self.width, viewport.map(|v| v[0]), pitch, "width")?;
        let height = Self::fit(self.height, viewport.map(|v| v[1]), pitch, "height")?;
        Ok((width, height))
    }

    fn fit(
        configured: Option<u32>,
        available_px: Option<f32>,
        pitch: u32,
        axis: &'static str,
    ) -> Result<u32, ConfigError> {
        match (configured, available_px) {
            (Some(n), _) => Ok(n),
            (None, Some(px)) => Ok((px.max(0.) / pitch as f32).floor() as u32),
            (None, None) => Err(ConfigError::MissingDimension { axis }),
        }
    }

    /// Validates the options and fixes the board size.
    pub fn resolve(&self, viewport: Option<[f32; 2]>) -> Result<Settings, ConfigError> {
        let (width, height) = self.dimensions(viewport)?;
        let settings = Settings {
            width,
            height,
            cell_size: self.cell_size,
            cell_border: self.cell_border,
            tick_speed: self.tick_speed,
            max_speed: self.max_speed,
            min_speed: self.min_speed,
            speed_step: self.speed_step,
            seed_rate: self.seed_rate,
            interactive: self.interactive,
            rng_seed: self.rng_seed,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Options with a fixed board size.
///
/// [`LifeConfig::resolve`] only returns valid settings; values built by hand
/// are checked again by [`crate::LifeEngine::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub cell_border: u32,
    pub tick_speed: u64,
    pub max_speed: u64,
    pub min_speed: u64,
    pub speed_step: u64,
    pub seed_rate: u32,
    pub interactive: bool,
    pub rng_seed: Option<u64>,
}

impl Settings {
    /// Default options on a `width x height` board.
    pub fn with_size(width: u32, height: u32) -> Self {
        let config = LifeConfig::default();
        Self {
            width,
            height,
            cell_size: config.cell_size,
            cell_border: config.cell_border,
            tick_speed: config.tick_speed,
            max_speed: config.max_speed,
            min_speed: config.min_speed,
            speed_step: config.speed_step,
            seed_rate: config.seed_rate,
            interactive: config.interactive,
            rng_seed: config.rng_seed,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if height == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        if width as u64 * height as u64 > u32::MAX as u64 {
            return Err(ConfigError::TooLarge { width, height });
        }
        let (min, max) = (self.min_speed, self.max_speed);
        if min >= max {
            return Err(ConfigError::InvertedSpeedBounds { min, max });
        }
        if !(min < self.tick_speed && self.tick_speed < max) {
            return Err(ConfigError::SpeedOutOfRange {
                speed: self.tick_speed,
                min,
                max,
            });
        }
        if self.speed_step == 0 {
            return Err(ConfigError::ZeroSpeedStep);
        }
        if self.seed_rate == 0 {
            return Err(ConfigError::ZeroSeedRate);
        }
        Ok(())
    }
}
