// ABOUTME: Multi-step form controller for posting a job
// ABOUTME: Owns the draft and the current step; forward moves are gated by validation

mod step;

pub use step::Step;

use tracing::debug;

use crate::draft::{validate_step, DraftEdit, JobDraft};

/// Result of [`FormController::previous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Moved(Step),
    /// Already on the first step; the caller abandons the whole flow.
    CancelFlow,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: JobDraft,
    step: Step,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn apply(&mut self, edit: DraftEdit) {
        self.draft = self.draft.apply(edit);
    }

    pub fn validate_current_step(&self) -> bool {
        validate_step(&self.draft, self.step)
    }

    pub fn can_advance(&self) -> bool {
        self.step.next().is_some() && self.validate_current_step()
    }

    /// Advances one step. No-op (returns false) when the current step is
    /// invalid or already the last.
    pub fn next(&mut self) -> bool {
        if !self.validate_current_step() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                debug!(from = self.step.number(), to = step.number(), "Wizard advanced");
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self) -> Retreat {
        match self.step.previous() {
            Some(step) => {
                debug!(from = self.step.number(), to = step.number(), "Wizard went back");
                self.step = step;
                Retreat::Moved(step)
            }
            None => Retreat::CancelFlow,
        }
    }

    /// Jumps to `target`. Backward jumps always succeed; forward jumps
    /// require every step before `target` to validate.
    pub fn go_to(&mut self, target: Step) -> bool {
        if target > self.step {
            let blocked = Step::ALL
                .iter()
                .take_while(|s| **s < target)
                .any(|s| !validate_step(&self.draft, *s));
            if blocked {
                return false;
            }
        }
        self.step = target;
        true
    }

    pub fn is_complete(&self) -> bool {
        Step::ALL.iter().all(|s| validate_step(&self.draft, *s))
    }

    pub fn reset(&mut self) {
        debug!("Wizard reset to defaults");
        self.draft = JobDraft::default();
        self.step = Step::Basics;
    }
}
