use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Records kept by the rolling window behind /api/window.
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,
    /// Used by /api/series/downsample when the request names no target.
    #[serde(default = "default_target_points")]
    pub default_target_points: usize,
    #[serde(default = "default_max_target_points")]
    pub max_target_points: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_capacity: default_window_capacity(),
            default_target_points: default_target_points(),
            max_target_points: default_max_target_points(),
        }
    }
}

fn default_window_capacity() -> usize {
    crate::window::DEFAULT_WINDOW_CAPACITY
}

fn default_target_points() -> usize {
    500
}

fn default_max_target_points() -> usize {
    10_000
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.engine.window_capacity > 0,
            "engine.window_capacity must be > 0, got {}",
            self.engine.window_capacity
        );
        anyhow::ensure!(
            self.engine.default_target_points >= 2,
            "engine.default_target_points must be >= 2, got {}",
            self.engine.default_target_points
        );
        anyhow::ensure!(
            self.engine.max_target_points >= self.engine.default_target_points,
            "engine.max_target_points must be >= engine.default_target_points ({}), got {}",
            self.engine.default_target_points,
            self.engine.max_target_points
        );
        Ok(())
    }
}
