// ABOUTME: The six ordered steps of the job-posting wizard
// ABOUTME: Provides bounded next/previous navigation between them

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Basics,
    Location,
    Compensation,
    Description,
    Qualifications,
    Review,
}

impl Step {
    pub const ALL: &'static [Step] = &[
        Step::Basics,
        Step::Location,
        Step::Compensation,
        Step::Description,
        Step::Qualifications,
        Step::Review,
    ];

    /// 1-based position, as shown to the user.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Basics => "Basic information",
            Step::Location => "Location",
            Step::Compensation => "Compensation",
            Step::Description => "Job description",
            Step::Qualifications => "Qualifications",
            Step::Review => "Review & submit",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<Step> {
        (*self as usize)
            .checked_sub(1)
            .and_then(|i| Step::ALL.get(i).copied())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Step::ALL.len(), self.title())
    }
}
