//! Activity catalog and selection operations.
//!
//! The catalog owns the ordered activity list (the single source of truth),
//! the priority dispenser derived from it, and the random generator used for
//! picks and shuffles. Every operation is infallible: an empty catalog
//! yields the placeholder activity or an empty list.

mod dispenser;
mod seed;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::models::{Activity, Mood};

use dispenser::PriorityDispenser;
pub use seed::seed_activities;

pub struct Catalog {
    activities: Vec<Activity>,
    dispenser: PriorityDispenser,
    rng: StdRng,
}

impl Catalog {
    /// Seeded catalog with a generator drawn from OS entropy
    pub fn new() -> Self {
        Self::from_activities(seed_activities(), StdRng::from_entropy())
    }

    /// Seeded catalog with a deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "using fixed random seed");
        Self::from_activities(seed_activities(), StdRng::seed_from_u64(seed))
    }

    /// Catalog with no activities at all
    #[cfg(test)]
    pub fn empty(rng: StdRng) -> Self {
        Self::from_activities(Vec::new(), rng)
    }

    pub fn from_activities(activities: Vec<Activity>, rng: StdRng) -> Self {
        let dispenser = PriorityDispenser::new(&activities);
        Self { activities, dispenser, rng }
    }

    /// Uniform pick over the whole list
    pub fn random_activity(&mut self) -> Activity {
        self.activities
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(Activity::placeholder)
    }

    /// Highest priority activity not yet handed out in this round
    pub fn top_priority_activity(&mut self) -> Activity {
        self.dispenser
            .next(&self.activities)
            .unwrap_or_else(Activity::placeholder)
    }

    /// Activities matching the mood, in random order
    pub fn activities_by_mood(&mut self, mood: &Mood) -> Vec<Activity> {
        let matches = self.shuffled_matches(|activity| mood.matches(activity));
        debug!(%mood, hits = matches.len(), "filtered by mood");
        matches
    }

    /// Activities that fit in `max_minutes`, in random order
    pub fn activities_by_time(&mut self, max_minutes: i32) -> Vec<Activity> {
        let matches = self.shuffled_matches(|activity| activity.time_required <= max_minutes);
        debug!(max_minutes, hits = matches.len(), "filtered by time");
        matches
    }

    /// Append an activity; the priority round restarts so it is eligible immediately
    pub fn add_activity(&mut self, activity: Activity) {
        info!(name = %activity.name, priority = activity.priority, "activity added");
        self.activities.push(activity);
        self.dispenser.refill(&self.activities);
    }

    /// All activities in insertion order
    pub fn list_all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activities left before the priority round refills
    pub fn remaining_in_round(&self) -> usize {
        self.dispenser.remaining()
    }

    fn shuffled_matches(&mut self, predicate: impl Fn(&Activity) -> bool) -> Vec<Activity> {
        let mut matches: Vec<Activity> = self
            .activities
            .iter()
            .filter(|&a| predicate(a))
            .cloned()
            .collect();
        matches.shuffle(&mut self.rng);
        matches
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
