use serde::{Deserialize, Serialize};

use super::statistics::HIGH_CELEBRATION_STREAK;

/// Status of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal for a round until the next draw
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// How loudly the presentation layer should celebrate a won round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelebrationIntensity {
    Normal,
    High,
}

impl CelebrationIntensity {
    pub fn for_streak(streak: u32) -> Self {
        if streak >= HIGH_CELEBRATION_STREAK {
            Self::High
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_string(&GameStatus::Playing).unwrap(), "\"playing\"");
        assert_eq!(serde_json::to_string(&GameStatus::Won).unwrap(), "\"won\"");
        assert_eq!(serde_json::to_string(&GameStatus::Lost).unwrap(), "\"lost\"");
        assert_eq!(GameStatus::Lost.to_string(), "lost");
    }

    #[test]
    fn test_status_resolution() {
        assert_eq!(GameStatus::default(), GameStatus::Playing);
        assert!(!GameStatus::Playing.is_resolved());
        assert!(GameStatus::Won.is_resolved());
        assert!(GameStatus::Lost.is_resolved());
    }

    #[test]
    fn test_celebration_tiers() {
        assert_eq!(CelebrationIntensity::for_streak(1), CelebrationIntensity::Normal);
        assert_eq!(CelebrationIntensity::for_streak(4), CelebrationIntensity::Normal);
        assert_eq!(CelebrationIntensity::for_streak(5), CelebrationIntensity::High);
        assert_eq!(CelebrationIntensity::for_streak(12), CelebrationIntensity::High);
        assert_eq!(serde_json::to_string(&CelebrationIntensity::High).unwrap(), "\"high\"");
    }
}
