//! Maps a predicted score to a risk band using configurable thresholds.

use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bands are inclusive on their lower bound: `score >= low` is Low,
    /// `medium <= score < low` is Medium, anything else High.
    pub fn from_score(score: f64, config: &RiskConfig) -> Self {
        if score >= config.low_threshold {
            RiskLevel::Low
        } else if score >= config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        RiskLevel::from_score(score, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        let engine = RiskEngine::default();
        assert_eq!(engine.classify(250.0), RiskLevel::Low);
        assert_eq!(engine.classify(249.99), RiskLevel::Medium);
        assert_eq!(engine.classify(200.0), RiskLevel::Medium);
        assert_eq!(engine.classify(199.99), RiskLevel::High);
        assert_eq!(engine.classify(-5.0), RiskLevel::High);
    }

    #[test]
    fn custom_thresholds() {
        let engine = RiskEngine::new(RiskConfig {
            low_threshold: 300.0,
            medium_threshold: 180.0,
        });
        assert_eq!(engine.classify(250.0), RiskLevel::Medium);
        assert_eq!(engine.classify(180.0), RiskLevel::Medium);
        assert_eq!(engine.classify(300.0), RiskLevel::Low);
    }
}
