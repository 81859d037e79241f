#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// File path, or an `http(s)://` URL
    pub location: String,
    pub user_agent: &'static str,
    /// A single attempt is made; `None` waits for it indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: "player.json".to_string(),
            user_agent: "CentralTierList/1.0",
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FallbackSettings {
    pub player_count: usize,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self { player_count: 150 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub fallback: FallbackSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            source: SourceSettings::default(),
            fallback: FallbackSettings::default(),
        }
    }

    pub fn with_source(mut self, location: impl Into<String>) -> Self {
        self.source.location = location.into();
        self
    }

    pub fn with_fallback_count(mut self, player_count: usize) -> Self {
        self.fallback.player_count = player_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.source.location, "player.json");
        assert_eq!(config.source.timeout_secs, None);
        assert_eq!(config.fallback.player_count, 150);
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = AppConfig::new()
            .with_source("https://example.org/player.json")
            .with_fallback_count(12);

        assert_eq!(config.source.location, "https://example.org/player.json");
        assert_eq!(config.fallback.player_count, 12);
    }
}
