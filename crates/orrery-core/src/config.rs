use serde::Deserialize;

use crate::layout::ProjectionMode;

/// Explorer configuration, handed over by the host page as JSON.
/// Every field is optional on the wire; missing ones take the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// Viewport widths below this are laid out compactly (default: 768).
    pub compact_breakpoint_px: f32,
    /// Key for the question-answer service. None disables it.
    pub api_key: Option<String>,
    /// Generative model name.
    pub model: String,
    /// Sampling temperature for answers (default: 0.7).
    pub temperature: f32,
    /// Base URL of the generative-language API.
    pub endpoint: String,
    /// Number of background stars (default: 200).
    pub star_count: usize,
    /// Starfield seed. The web build fills it from `Math.random()` when absent.
    pub star_seed: Option<u64>,
    /// Seconds to ease between projections (default: 1.5).
    pub transition_secs: f32,
    /// Projection shown at start.
    pub initial_mode: ProjectionMode,
    /// Whether the welcome gate is shown before the explorer accepts keys.
    pub show_welcome: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint_px: 768.0,
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            star_count: 200,
            star_seed: None,
            transition_secs: 1.5,
            initial_mode: ProjectionMode::Schematic,
            show_welcome: true,
        }
    }
}

impl ExplorerConfig {
    /// Parse from JSON. An empty string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let cfg = ExplorerConfig::from_json("").unwrap();
        assert_eq!(cfg.compact_breakpoint_px, 768.0);
        assert_eq!(cfg.star_count, 200);
        assert!(cfg.api_key.is_none());
        assert!(cfg.show_welcome);

        let cfg = ExplorerConfig::from_json("{}").unwrap();
        assert_eq!(cfg.transition_secs, 1.5);
        assert_eq!(cfg.initial_mode, ProjectionMode::Schematic);
    }

    #[test]
    fn overrides_are_camel_case() {
        let json = r#"{
            "apiKey": "secret",
            "starCount": 12,
            "starSeed": 99,
            "initialMode": "trueScale",
            "showWelcome": false,
            "temperature": 0.2
        }"#;
        let cfg = ExplorerConfig::from_json(json).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.star_count, 12);
        assert_eq!(cfg.star_seed, Some(99));
        assert_eq!(cfg.initial_mode, ProjectionMode::TrueScale);
        assert!(!cfg.show_welcome);
        assert_eq!(cfg.temperature, 0.2);
        assert_eq!(cfg.model, "gemini-3-flash-preview");
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(ExplorerConfig::from_json("{ nope").is_err());
        assert!(ExplorerConfig::from_json(r#"{"starCount": -1}"#).is_err());
    }
}
