//! Interactive menu loop.
//!
//! Each menu selection maps to exactly one catalog operation. Bad input is
//! reported and the loop continues; only the exit option (or running out
//! of input) ends it.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::prompts::{INVALID_NUMBER, parse_number, prompt_number, prompt_text, read_line};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Activity, DEFAULT_PRIORITY, MenuChoice, Mood};
use crate::theme::Theme;

/// What the loop should do after handling a choice
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct Shell<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
    theme: Theme,
    suggestion_limit: usize,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        catalog: Catalog,
        input: R,
        output: W,
        theme: Theme,
        suggestion_limit: usize,
    ) -> Self {
        Self {
            catalog,
            input,
            output,
            theme,
            suggestion_limit: suggestion_limit.max(1),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        debug!(
            activities = self.catalog.len(),
            empty = self.catalog.is_empty(),
            "catalog ready"
        );
        writeln!(self.output, "Welcome to the Boredom Buster!")?;
        writeln!(self.output, "Let's find something fun to do!")?;

        loop {
            self.display_menu()?;
            let Some(line) = read_line(&mut self.input)? else {
                debug!("input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.handle(choice)?,
                None => {
                    warn!(input = %line, "invalid menu option");
                    let message = self.theme.warning("Invalid option. Please try again.");
                    writeln!(self.output, "{}", message)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.theme.banner("=== BOREDOM BUSTER ==="))?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu selection");
        match choice {
            MenuChoice::Random => {
                let activity = self.catalog.random_activity();
                self.show_one("=== RANDOM ACTIVITY ===", &activity)?;
            }
            MenuChoice::TopPriority => {
                let activity = self.catalog.top_priority_activity();
                debug!(remaining = self.catalog.remaining_in_round(), "priority round");
                self.show_one("=== HIGH PRIORITY ACTIVITY ===", &activity)?;
            }
            MenuChoice::ByMood => return self.suggest_by_mood(),
            MenuChoice::ByTime => return self.suggest_by_time(),
            MenuChoice::Add => return self.add_custom_activity(),
            MenuChoice::ListAll => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.theme.heading("=== ALL ACTIVITIES ==="))?;
                for activity in self.catalog.list_all() {
                    write!(self.output, "{}", activity.format())?;
                }
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Thanks for using Boredom Buster! Have fun!")?;
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn suggest_by_mood(&mut self) -> Result<Flow> {
        let prompt = "How are you feeling? (tired/energetic/productive/creative/social): ";
        let Some(answer) = prompt_text(&mut self.input, &mut self.output, prompt)? else {
            return Ok(Flow::Stop);
        };
        // Only the first word counts as the mood
        let mood = Mood::parse(answer.split_whitespace().next().unwrap_or(""));
        let activities = self.catalog.activities_by_mood(&mood);
        self.show_suggestions(
            "=== ACTIVITIES FOR YOUR MOOD ===",
            "No activities found for that mood. Try another!",
            &activities,
        )?;
        Ok(Flow::Continue)
    }

    fn suggest_by_time(&mut self) -> Result<Flow> {
        let prompt = "How much time do you have? (minutes): ";
        let Some(answer) = prompt_text(&mut self.input, &mut self.output, prompt)? else {
            return Ok(Flow::Stop);
        };
        let Some(max_minutes) = parse_number(&answer) else {
            warn!(answer = %answer, "invalid time budget");
            writeln!(self.output, "{}", self.theme.warning(INVALID_NUMBER))?;
            return Ok(Flow::Continue);
        };
        let activities = self.catalog.activities_by_time(max_minutes);
        self.show_suggestions(
            "=== ACTIVITIES FOR YOUR TIME ===",
            "No activities found for that time frame.",
            &activities,
        )?;
        Ok(Flow::Continue)
    }

    fn add_custom_activity(&mut self) -> Result<Flow> {
        let input = &mut self.input;
        let output = &mut self.output;

        let Some(name) = prompt_text(input, output, "Enter activity name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(category) = prompt_text(input, output, "Enter category: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(energy) = prompt_number(input, output, "Enter energy level (1-5): ", None)? else {
            return Ok(Flow::Stop);
        };
        let minutes_prompt = "Enter time required (minutes): ";
        let Some(minutes) = prompt_number(input, output, minutes_prompt, None)? else {
            return Ok(Flow::Stop);
        };
        let priority_prompt = format!("Enter priority (1-5) [{}]: ", DEFAULT_PRIORITY);
        let answer = prompt_number(input, output, &priority_prompt, Some(DEFAULT_PRIORITY))?;
        let Some(priority) = answer else {
            return Ok(Flow::Stop);
        };

        // Name and category are kept exactly as typed
        self.catalog.add_activity(Activity::new(&name, &category, energy, minutes, priority));
        writeln!(self.output, "Activity added successfully!")?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn show_one(&mut self, heading: &str, activity: &Activity) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.theme.heading(heading))?;
        write!(self.output, "{}", activity.format())?;
        Ok(())
    }

    fn show_suggestions(
        &mut self,
        heading: &str,
        empty_message: &str,
        activities: &[Activity],
    ) -> Result<()> {
        if activities.is_empty() {
            writeln!(self.output, "{}", self.theme.warning(empty_message))?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.theme.heading(heading))?;
        for activity in activities.iter().take(self.suggestion_limit) {
            write!(self.output, "{}", activity.format())?;
        }
        Ok(())
    }
}
