//! Activity records
//!
//! An activity is a plain value: it is copied into the catalog list and
//! into the priority dispenser, and never changes after creation.

/// Priority used when the user does not give one
pub const DEFAULT_PRIORITY: i32 = 1;

/// One leisure suggestion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Activity {
    pub name: String,
    pub category: String,
    /// Effort on a 1-5 scale (not enforced)
    pub energy_level: i32,
    /// Minutes
    pub time_required: i32,
    /// Higher comes out of the dispenser first
    pub priority: i32,
}

impl Activity {
    pub fn new(
        name: &str,
        category: &str,
        energy_level: i32,
        time_required: i32,
        priority: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            energy_level,
            time_required,
            priority,
        }
    }

    /// Returned instead of a real activity when the catalog is empty
    pub fn placeholder() -> Self {
        Self::new("No activities available", "None", 0, 0, 0)
    }

    /// Format the display block printed by the shell (ends with a blank line)
    pub fn format(&self) -> String {
        format!(
            "Activity: {}\nCategory: {}\nEnergy Level: {}/5\nTime Required: {} minutes\nPriority: {}\n\n",
            self.name, self.category, self.energy_level, self.time_required, self.priority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority_is_one() {
        assert_eq!(DEFAULT_PRIORITY, 1);
    }

    #[test]
    fn test_placeholder_fields() {
        let p = Activity::placeholder();
        assert_eq!(p.name, "No activities available");
        assert_eq!(p.category, "None");
        assert_eq!((p.energy_level, p.time_required, p.priority), (0, 0, 0));
    }

    #[test]
    fn test_format_block() {
        let activity = Activity::new("Go for a run", "Exercise", 5, 45, 5);
        assert_eq!(
            activity.format(),
            "Activity: Go for a run\n\
             Category: Exercise\n\
             Energy Level: 5/5\n\
             Time Required: 45 minutes\n\
             Priority: 5\n\n"
        );
    }

    #[test]
    fn test_format_keeps_out_of_range_values() {
        let activity = Activity::new("Odd", "Misc", 9, -5, -1);
        let text = activity.format();
        assert!(text.contains("Energy Level: 9/5"));
        assert!(text.contains("Time Required: -5 minutes"));
        assert!(text.contains("Priority: -1"));
    }

    #[test]
    fn test_duplicates_compare_equal() {
        let a = Activity::new("Test", "TestCat", 3, 10, 5);
        assert_eq!(a.clone(), a);
    }
}
