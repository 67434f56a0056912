// crates/inference/src/config.rs
use std::time::Duration;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Simulated model latency added to every single-text prediction.
pub const DEFAULT_INFERENCE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub port: u16,
    pub inference_delay: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            inference_delay: DEFAULT_INFERENCE_DELAY,
        }
    }
}

impl InferenceConfig {
    /// Read `INFERENCE_PORT`, falling back to `PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("INFERENCE_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_port_precedence() {
        assert_eq!(InferenceConfig::from_lookup(lookup(&[])).port, 8000);
        assert_eq!(InferenceConfig::from_lookup(lookup(&[("PORT", "9000")])).port, 9000);
        let both = lookup(&[("PORT", "9000"), ("INFERENCE_PORT", "9100")]);
        assert_eq!(InferenceConfig::from_lookup(both).port, 9100);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = InferenceConfig::from_lookup(lookup(&[("INFERENCE_PORT", "http")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.inference_delay, DEFAULT_INFERENCE_DELAY);
    }
}
