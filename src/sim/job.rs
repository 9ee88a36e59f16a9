use super::SimError;
use crate::core::{JobId, Ticks};

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub run_time: Ticks,
    pub arrival_time: Ticks,
}

/// The immutable workload: jobs in canonical order, sorted by arrival time
/// with ties keeping their input order, ids renumbered to queue positions.
#[derive(Debug, Clone)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    pub fn new(mut jobs: Vec<Job>) -> Result<Self, SimError> {
        if jobs.is_empty() {
            return Err(SimError::EmptyJobSet);
        }
        if let Some(job) = jobs.iter().position(|job| job.run_time == 0) {
            return Err(SimError::ZeroRunTime { job });
        }

        jobs.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        for (id, job) in jobs.iter_mut().enumerate() {
            job.id = id;
        }

        Ok(Self { jobs })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn as_slice(&self) -> &[Job] {
        &self.jobs
    }

    /// Upper bound on the ticks any discipline needs: even fully sequential
    /// service of every job after the latest arrival fits within it.
    pub fn max_clock(&self) -> Ticks {
        let total_run_time: Ticks = self.jobs.iter().map(|job| job.run_time).sum();
        let last_arrival = self
            .jobs
            .iter()
            .map(|job| job.arrival_time)
            .max()
            .expect("JobSet is never empty");
        total_run_time + last_arrival
    }
}
