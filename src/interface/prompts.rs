use dialoguer::Input;

use crate::error::Result;
use crate::models::Course;
use crate::planner::{ProposalResponse, ProposalReview};

/// Console reviewer for interactive plan generation.
///
/// Empty input or y accepts, n/r rejects the proposal for this slot attempt,
/// x skips the slot. Invalid input re-prompts here without the planner
/// consuming another draw.
pub struct ConsolePrompter;

impl ProposalReview for ConsolePrompter {
    fn review(&mut self, day: usize, slot_type: &str, course: &Course) -> Result<ProposalResponse> {
        loop {
            let reply: String = Input::new()
                .with_prompt(format!(
                    "Day {} {}: {}. Accept? [Y/n/r=replace/x=skip]",
                    day + 1,
                    slot_type,
                    course.name
                ))
                .allow_empty(true)
                .interact_text()?;

            match reply.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(ProposalResponse::Accept),
                "n" | "no" | "r" | "replace" => return Ok(ProposalResponse::Reject),
                "x" | "skip" => return Ok(ProposalResponse::Skip),
                _ => println!("Please enter Y/n/r/x"),
            }
        }
    }
}
