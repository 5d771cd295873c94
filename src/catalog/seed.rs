//! Built-in activities loaded into every new catalog.

use crate::models::Activity;

/// (name, category, energy level, minutes, priority)
type SeedRow = (&'static str, &'static str, i32, i32, i32);

const SEED_ACTIVITIES: [SeedRow; 18] = [
    // Low energy
    ("Watch a movie", "Entertainment", 1, 120, 2),
    ("Read a book", "Learning", 2, 60, 3),
    ("Listen to music", "Relaxation", 1, 30, 1),
    ("Meditate", "Wellness", 1, 15, 4),
    ("Online shopping", "Entertainment", 1, 45, 1),
    // Medium energy
    ("Cook a new recipe", "Creative", 3, 90, 3),
    ("Organize your room", "Productive", 3, 60, 4),
    ("Learn a new skill online", "Learning", 3, 120, 5),
    ("Video call a friend", "Social", 2, 45, 3),
    ("Write in a journal", "Creative", 2, 30, 4),
    // High energy
    ("Go for a run", "Exercise", 5, 45, 5),
    ("Dance to music", "Exercise", 4, 30, 3),
    ("Clean the entire house", "Productive", 4, 180, 4),
    ("Start a DIY project", "Creative", 4, 120, 3),
    ("Go hiking", "Outdoor", 5, 240, 5),
    // Social
    ("Plan a hangout with friends", "Social", 3, 30, 4),
    ("Join an online community", "Social", 2, 60, 3),
    ("Volunteer for a cause", "Social", 3, 120, 5),
];

/// Build the built-in activity list in its fixed order
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|&(name, category, energy, time, priority)| {
            Activity::new(name, category, energy, time, priority)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_count() {
        assert_eq!(seed_activities().len(), 18);
    }

    #[test]
    fn test_seed_order_and_values() {
        let seed = seed_activities();
        assert_eq!(seed[0], Activity::new("Watch a movie", "Entertainment", 1, 120, 2));
        assert_eq!(seed[9], Activity::new("Write in a journal", "Creative", 2, 30, 4));
        assert_eq!(seed[17], Activity::new("Volunteer for a cause", "Social", 3, 120, 5));
    }

    #[test]
    fn test_seed_values_are_in_conventional_ranges() {
        for activity in seed_activities() {
            assert!((1..=5).contains(&activity.energy_level), "{}", activity.name);
            assert!((1..=5).contains(&activity.priority), "{}", activity.name);
            assert!(activity.time_required > 0, "{}", activity.name);
        }
    }
}
