use crate::api::AdminApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::list::ResourceItem;
use crate::resources::ResourceKind;
use crate::schema::{CollectionEntry, RunAction, SchedulerJob, SchedulerJobs};

/// One quiz or raffle with the scheduler jobs that mention its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEntry {
    pub kind: ResourceKind,
    pub item: ResourceItem,
    pub jobs: Vec<SchedulerJob>,
}

impl ScheduledEntry {
    #[must_use]
    pub const fn actions(&self) -> &'static [RunAction] {
        RunAction::available_for(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerView {
    pub running: bool,
    pub jobs: Vec<SchedulerJob>,
    pub entries: Vec<ScheduledEntry>,
}

impl SchedulerView {
    #[must_use]
    pub fn new(
        jobs: SchedulerJobs,
        quizzes: Vec<CollectionEntry>,
        raffles: Vec<CollectionEntry>,
    ) -> Self {
        let tagged = quizzes
            .into_iter()
            .map(|entry| (ResourceKind::Quiz, entry))
            .chain(raffles.into_iter().map(|entry| (ResourceKind::Raffle, entry)));
        let entries = tagged
            .map(|(kind, entry)| {
                let matching = jobs
                    .jobs
                    .iter()
                    .filter(|job| job.id.starts_with(kind.segment()) && job.id.contains(&entry.key))
                    .cloned()
                    .collect();
                ScheduledEntry {
                    kind,
                    item: ResourceItem::from(entry),
                    jobs: matching,
                }
            })
            .collect();
        Self {
            running: jobs.running,
            jobs: jobs.jobs,
            entries,
        }
    }
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_scheduler<T: Transport>(api: &AdminApi<T>) -> Result<SchedulerView, ApiError> {
    let (jobs, quizzes, raffles) = futures::try_join!(
        api.scheduler_jobs(),
        api.collection(ResourceKind::Quiz),
        api.collection(ResourceKind::Raffle)
    )?;
    Ok(SchedulerView::new(jobs, quizzes, raffles))
}
