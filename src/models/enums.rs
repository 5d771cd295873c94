//! Enums used throughout Boredom Buster
//!
//! Moods map free text onto a fixed activity filter; menu choices map the
//! shell's numbered options onto catalog operations.

use std::fmt;

use super::Activity;

/// Self-reported mood used to filter activities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mood {
    Tired,      // energy <= 2
    Energetic,  // energy >= 4
    Productive, // category "Productive"
    Creative,   // category "Creative"
    Social,     // category "Social"
    Unknown(String),
}

impl Mood {
    /// Parse a mood token. Matching is exact, so "Tired" is unknown.
    pub fn parse(input: &str) -> Self {
        match input {
            "tired" => Mood::Tired,
            "energetic" => Mood::Energetic,
            "productive" => Mood::Productive,
            "creative" => Mood::Creative,
            "social" => Mood::Social,
            other => Mood::Unknown(other.to_string()),
        }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            Mood::Tired => activity.energy_level <= 2,
            Mood::Energetic => activity.energy_level >= 4,
            Mood::Productive => activity.category == "Productive",
            Mood::Creative => activity.category == "Creative",
            Mood::Social => activity.category == "Social",
            Mood::Unknown(_) => false,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Tired => "tired",
            Mood::Energetic => "energetic",
            Mood::Productive => "productive",
            Mood::Creative => "creative",
            Mood::Social => "social",
            Mood::Unknown(raw) => raw.as_str(),
        };
        f.write_str(label)
    }
}

/// Menu options offered by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Random,
    TopPriority,
    ByMood,
    ByTime,
    Add,
    ListAll,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Random,
        MenuChoice::TopPriority,
        MenuChoice::ByMood,
        MenuChoice::ByTime,
        MenuChoice::Add,
        MenuChoice::ListAll,
        MenuChoice::Exit,
    ];

    /// Parse a menu line ("1" through "7", surrounding whitespace ignored)
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Random => "Get random activity",
            MenuChoice::TopPriority => "Get highest priority activity",
            MenuChoice::ByMood => "Get activity by mood",
            MenuChoice::ByTime => "Get activity by available time",
            MenuChoice::Add => "Add custom activity",
            MenuChoice::ListAll => "View all activities",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_known() {
        assert_eq!(Mood::parse("tired"), Mood::Tired);
        assert_eq!(Mood::parse("energetic"), Mood::Energetic);
        assert_eq!(Mood::parse("productive"), Mood::Productive);
        assert_eq!(Mood::parse("creative"), Mood::Creative);
        assert_eq!(Mood::parse("social"), Mood::Social);
    }

    #[test]
    fn test_mood_parse_is_case_sensitive() {
        assert_eq!(Mood::parse("Tired"), Mood::Unknown("Tired".to_string()));
    }

    #[test]
    fn test_mood_energy_boundaries() {
        let two = Activity::new("a", "x", 2, 10, 1);
        let three = Activity::new("b", "x", 3, 10, 1);
        let four = Activity::new("c", "x", 4, 10, 1);
        assert!(Mood::Tired.matches(&two));
        assert!(!Mood::Tired.matches(&three));
        assert!(!Mood::Energetic.matches(&three));
        assert!(Mood::Energetic.matches(&four));
    }

    #[test]
    fn test_mood_category_is_exact() {
        let activity = Activity::new("a", "productive", 3, 10, 1);
        assert!(!Mood::Productive.matches(&activity));
    }

    #[test]
    fn test_unknown_mood_matches_nothing() {
        let activity = Activity::new("a", "Social", 1, 10, 1);
        assert!(!Mood::parse("nonsense").matches(&activity));
    }

    #[test]
    fn test_mood_display_round_trips_raw_text() {
        assert_eq!(Mood::Creative.to_string(), "creative");
        assert_eq!(Mood::parse("bored").to_string(), "bored");
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Random));
        assert_eq!(MenuChoice::parse(" 7\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_choice_number() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number(), i + 1);
        }
    }
}
