use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("search depth must be at least 1")]
    DepthTooLow,
    #[error("random move probability must be within [0, 1], got {probability}")]
    InvalidProbability { probability: f64 },
}

/// How strongly the AI plays: how deep it searches, and how often it ignores
/// the search and plays a random legal move instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub label: &'static str,
    pub search_depth: u8,
    pub random_move_probability: f64,
    pub description: &'static str,
    /// RGB color used when the profile is shown to the player.
    pub color: (u8, u8, u8),
}

impl DifficultyProfile {
    pub fn new(
        label: &'static str,
        search_depth: u8,
        random_move_probability: f64,
        description: &'static str,
        color: (u8, u8, u8),
    ) -> Result<Self, ProfileError> {
        if search_depth < 1 {
            return Err(ProfileError::DepthTooLow);
        }
        if !(0.0..=1.0).contains(&random_move_probability) {
            return Err(ProfileError::InvalidProbability {
                probability: random_move_probability,
            });
        }

        Ok(Self {
            label,
            search_depth,
            random_move_probability,
            description,
            color,
        })
    }
}

pub const EASY: DifficultyProfile = DifficultyProfile {
    label: "Easy",
    search_depth: 1,
    random_move_probability: 0.4,
    description: "The AI makes frequent mistakes",
    color: (0, 255, 0),
};

pub const NORMAL: DifficultyProfile = DifficultyProfile {
    label: "Normal",
    search_depth: 3,
    random_move_probability: 0.2,
    description: "The AI plays well but not perfectly",
    color: (255, 255, 0),
};

pub const HARD: DifficultyProfile = DifficultyProfile {
    label: "Hard",
    search_depth: 6,
    random_move_probability: 0.1,
    description: "The AI plays very well",
    color: (255, 165, 0),
};

/// Full-depth search on a 3x3 board, never random.
pub const IMPOSSIBLE: DifficultyProfile = DifficultyProfile {
    label: "Impossible",
    search_depth: 9,
    random_move_probability: 0.0,
    description: "The AI never loses",
    color: (255, 0, 0),
};

/// The preset difficulty levels offered to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
            Difficulty::Impossible => &IMPOSSIBLE,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Normal
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile().label)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Difficulty {
    type Err = ParseError;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "impossible" => Ok(Difficulty::Impossible),
            _ => Err("invalid difficulty; options are: easy, normal, hard, impossible"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        let depths: Vec<_> = Difficulty::ALL
            .iter()
            .map(|d| d.profile().search_depth)
            .collect();
        let probabilities: Vec<_> = Difficulty::ALL
            .iter()
            .map(|d| d.profile().random_move_probability)
            .collect();

        assert_eq!(depths, vec![1, 3, 6, 9]);
        assert_eq!(probabilities, vec![0.4, 0.2, 0.1, 0.0]);
    }

    #[test]
    fn test_catalog_profiles_are_valid() {
        for difficulty in Difficulty::ALL.iter() {
            let p = difficulty.profile();
            assert_eq!(
                DifficultyProfile::new(p.label, p.search_depth, p.random_move_probability, p.description, p.color),
                Ok(*p)
            );
        }
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(Difficulty::from_str("easy"), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("Hard"), Ok(Difficulty::Hard));
        assert_eq!(
            Difficulty::from_str("IMPOSSIBLE"),
            Ok(Difficulty::Impossible)
        );
        assert!(Difficulty::from_str("nightmare").is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Difficulty::Normal.to_string(), "Normal");
    }

    #[test]
    fn test_rejects_invalid_profiles() {
        assert_eq!(
            DifficultyProfile::new("Broken", 0, 0.5, "", (0, 0, 0)),
            Err(ProfileError::DepthTooLow)
        );
        assert_eq!(
            DifficultyProfile::new("Broken", 3, 1.5, "", (0, 0, 0)),
            Err(ProfileError::InvalidProbability { probability: 1.5 })
        );
    }
}
