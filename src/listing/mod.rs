// ABOUTME: Paginated, filtered job listing with optimistic save/unsave
// ABOUTME: Page fetches and toggles are single-flight; filter changes are debounced

mod debounce;
mod item;
mod saved;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::draft::{EmploymentType, WorkMode};
use crate::error::Result;
use crate::remote::{JobQuery, JobsApi};
use crate::session::Session;

pub use debounce::Debouncer;
pub use item::{truncate, JobListItem, DESCRIPTION_LIMIT};
pub use saved::{PendingToggle, SavedSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub search: String,
    pub location: String,
    pub employment_type: Option<EmploymentType>,
    pub work_mode: Option<WorkMode>,
}

impl JobFilters {
    pub fn to_query(&self, page: u32, limit: u32) -> JobQuery {
        fn text(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        JobQuery {
            search: text(&self.search),
            location: text(&self.location),
            employment_type: self.employment_type,
            work_mode: self.work_mode,
            limit,
            page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { added: usize },
    /// Another page fetch was in flight; nothing was sent.
    Skipped,
    /// A newer reset superseded this response; it was discarded.
    Stale,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    LoginRequired,
    /// A toggle for this job was already in flight; nothing was sent.
    Ignored,
    Confirmed { saved: bool },
    RolledBack { saved: bool, error: String },
}

/// Point-in-time copy of the listing for rendering.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    pub filters: JobFilters,
    pub items: Vec<JobListItem>,
    pub saved: HashSet<String>,
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct ListingState {
    filters: JobFilters,
    items: Vec<JobListItem>,
    page: u32,
    has_more: bool,
    error: Option<String>,
    saved: SavedSet,
    generation: u64,
    fetches_in_flight: usize,
}

pub struct ListingController<A: ?Sized> {
    api: Arc<A>,
    session: Session,
    page_size: u32,
    state: Mutex<ListingState>,
    debouncer: Mutex<Debouncer>,
}

impl<A: JobsApi + ?Sized + 'static> ListingController<A> {
    pub fn new(api: Arc<A>, session: Session, page_size: u32, debounce: Duration) -> Self {
        Self::with_filters(api, session, page_size, debounce, JobFilters::default())
    }

    pub fn with_filters(
        api: Arc<A>,
        session: Session,
        page_size: u32,
        debounce: Duration,
        filters: JobFilters,
    ) -> Self {
        Self {
            api,
            session,
            page_size,
            state: Mutex::new(ListingState {
                filters,
                ..Default::default()
            }),
            debouncer: Mutex::new(Debouncer::new(debounce)),
        }
    }

    pub async fn view(&self) -> ListingView {
        let st = self.state.lock().await;
        ListingView {
            filters: st.filters.clone(),
            items: st.items.clone(),
            saved: st.saved.ids().clone(),
            page: st.page,
            has_more: st.has_more,
            loading: st.fetches_in_flight > 0,
            error: st.error.clone(),
        }
    }

    pub async fn is_saved(&self, job_id: &str) -> bool {
        self.state.lock().await.saved.contains(job_id)
    }

    /// Seeds the saved set from the server. Anonymous users keep an empty set.
    pub async fn load_saved_ids(&self) -> Result<()> {
        let Some(token) = self.session.token() else {
            return Ok(());
        };
        match self.api.saved_job_ids(token).await {
            Ok(ids) => {
                debug!(count = ids.len(), "Loaded saved job ids");
                self.state.lock().await.saved.replace(ids);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load saved jobs");
                self.state.lock().await.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetches `page` with the current filters; `reset` replaces the list,
    /// otherwise the page is appended.
    pub async fn fetch_jobs(&self, page: u32, reset: bool) -> FetchOutcome {
        let (query, generation) = {
            let mut st = self.state.lock().await;
            if !reset && st.fetches_in_flight > 0 {
                debug!(page, "Page fetch already in flight; skipping");
                return FetchOutcome::Skipped;
            }
            if reset {
                st.generation += 1;
            }
            st.fetches_in_flight += 1;
            (st.filters.to_query(page, self.page_size), st.generation)
        };

        let result = self.api.list_jobs(&query).await;

        let mut st = self.state.lock().await;
        st.fetches_in_flight -= 1;
        if st.generation != generation {
            debug!(page, "Discarding superseded page");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(fetched) => {
                let items: Vec<JobListItem> = fetched.jobs.iter().map(JobListItem::from_job).collect();
                let added = items.len();
                if reset {
                    st.items = items;
                } else {
                    st.items.extend(items);
                }
                st.page = fetched.page;
                st.has_more = fetched.has_more();
                st.error = None;
                info!(page = fetched.page, pages = fetched.pages, added, "Jobs loaded");
                FetchOutcome::Loaded { added }
            }
            Err(e) => {
                warn!(page, error = %e, "Failed to fetch jobs");
                let message = e.to_string();
                st.error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Reloads from page 1 with the current filters.
    pub async fn refresh(&self) -> FetchOutcome {
        self.fetch_jobs(1, true).await
    }

    pub async fn load_more(&self) -> FetchOutcome {
        let next = {
            let st = self.state.lock().await;
            if !st.has_more {
                return FetchOutcome::Skipped;
            }
            st.page + 1
        };
        self.fetch_jobs(next, false).await
    }

    /// Applies `edit` to the filters now and schedules a debounced reload from page 1.
    pub async fn update_filters(self: &Arc<Self>, edit: impl FnOnce(&mut JobFilters)) {
        {
            let mut st = self.state.lock().await;
            edit(&mut st.filters);
            debug!(filters = ?st.filters, "Filters changed");
        }
        let this = Arc::clone(self);
        self.debouncer.lock().await.schedule(async move {
            let outcome = this.fetch_jobs(1, true).await;
            debug!(?outcome, "Debounced fetch finished");
        });
    }

    /// Waits for scheduled filter fetches to fire and finish. The debouncer
    /// lock is released while waiting so filter changes can still reschedule.
    pub async fn settle(&self) {
        loop {
            let pending = self.debouncer.lock().await.take_pending();
            match pending {
                Some(handle) => {
                    let _ = handle.await;
                }
                None => break,
            }
        }
    }

    /// Optimistically flips the saved state of `job_id`, then confirms it with
    /// the server or rolls it back.
    pub async fn toggle_save(&self, job_id: &str) -> ToggleOutcome {
        let Some(token) = self.session.token() else {
            return ToggleOutcome::LoginRequired;
        };

        let pending = {
            let mut st = self.state.lock().await;
            match st.saved.begin(job_id) {
                Some(pending) => pending,
                None => {
                    debug!(job_id, "Toggle already in flight; ignoring");
                    return ToggleOutcome::Ignored;
                }
            }
        };

        let result = if pending.now_saved() {
            self.api.save_job(token, job_id).await
        } else {
            self.api.unsave_job(token, job_id).await
        };

        let mut st = self.state.lock().await;
        match result {
            Ok(()) => {
                let saved = st.saved.confirm(pending);
                debug!(job_id, saved, "Toggle confirmed");
                ToggleOutcome::Confirmed { saved }
            }
            Err(e) => {
                let saved = st.saved.roll_back(pending);
                warn!(job_id, saved, error = %e, "Toggle failed; rolled back");
                let error = e.to_string();
                st.error = Some(error.clone());
                ToggleOutcome::RolledBack { saved, error }
            }
        }
    }
}
