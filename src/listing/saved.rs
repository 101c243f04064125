// ABOUTME: Saved-job set with optimistic toggles and a single-flight guard per job
// ABOUTME: A toggle is Pending until it is confirmed or rolled back

use std::collections::HashSet;

/// An optimistic flip that has been applied locally but not yet settled.
#[must_use = "a pending toggle must be confirmed or rolled back"]
#[derive(Debug, PartialEq, Eq)]
pub struct PendingToggle {
    job_id: String,
    was_saved: bool,
}

impl PendingToggle {
    /// Membership after the optimistic flip; also tells which request to send.
    pub fn now_saved(&self) -> bool {
        !self.was_saved
    }
}

#[derive(Debug, Clone, Default)]
pub struct SavedSet {
    saved: HashSet<String>,
    in_flight: HashSet<String>,
}

impl SavedSet {
    pub fn contains(&self, job_id: &str) -> bool {
        self.saved.contains(job_id)
    }

    pub fn is_pending(&self, job_id: &str) -> bool {
        self.in_flight.contains(job_id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.saved
    }

    /// Replaces membership with the server's view. Toggles still in flight
    /// keep their optimistic value.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = String>) {
        let mut fresh: HashSet<String> = ids.into_iter().collect();
        for id in &self.in_flight {
            if self.saved.contains(id) {
                fresh.insert(id.clone());
            } else {
                fresh.remove(id);
            }
        }
        self.saved = fresh;
    }

    /// Flips membership immediately. Returns `None` if a toggle for this job
    /// is already in flight.
    pub fn begin(&mut self, job_id: &str) -> Option<PendingToggle> {
        if !self.in_flight.insert(job_id.to_string()) {
            return None;
        }
        let was_saved = self.saved.contains(job_id);
        if was_saved {
            self.saved.remove(job_id);
        } else {
            self.saved.insert(job_id.to_string());
        }
        Some(PendingToggle {
            job_id: job_id.to_string(),
            was_saved,
        })
    }

    /// Keeps the optimistic value. Returns the settled membership.
    pub fn confirm(&mut self, pending: PendingToggle) -> bool {
        self.in_flight.remove(&pending.job_id);
        pending.now_saved()
    }

    /// Restores the pre-toggle value. Returns the settled membership.
    pub fn roll_back(&mut self, pending: PendingToggle) -> bool {
        self.in_flight.remove(&pending.job_id);
        if pending.was_saved {
            self.saved.insert(pending.job_id);
        } else {
            self.saved.remove(&pending.job_id);
        }
        pending.was_saved
    }
}
