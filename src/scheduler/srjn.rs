use keyed_priority_queue::KeyedPriorityQueue;

use super::{AdmissionPolicy, Dispatch, Scheduler, SimConfig};
use crate::core::{JobId, SimCtx, Ticks};

#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Remaining(pub Ticks, pub JobId);

// KeyedPriorityQueue is a max-heap, so we need to flip-flop Remaining's Ord:
// least remaining service first, ties to the lowest job id.
impl PartialOrd for Remaining {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Remaining {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

// Preemptive shortest-remaining-job-next: the winner is re-evaluated every
// tick, so a shorter arrival preempts the job currently being served.
pub struct SrjnScheduler {
    runnable: KeyedPriorityQueue<JobId, Remaining>,
}

impl Scheduler for SrjnScheduler {
    const ADMISSION: AdmissionPolicy = AdmissionPolicy::AtArrival;

    fn init(_ctx: &mut SimCtx, _config: &SimConfig) -> Self {
        Self {
            runnable: KeyedPriorityQueue::new(),
        }
    }

    fn admit(&mut self, ctx: &mut SimCtx, job: JobId) {
        let remaining = ctx.task(job).remaining();
        self.runnable.push(job, Remaining(remaining, job));
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Dispatch {
        let Some((job, Remaining(remaining, _))) = self.runnable.pop() else {
            return Dispatch::Idle;
        };

        if ctx.work_on(job) {
            debug_assert_eq!(remaining, 1, "Completed job {job} left the queue early");
            Dispatch::Completed(job)
        } else {
            self.runnable.push(job, Remaining(remaining - 1, job));
            Dispatch::Worked(job)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_orders_least_first() {
        // Flipped Ord: the max-heap's greatest key is the shortest job.
        assert!(Remaining(2, 0) > Remaining(3, 0));
        assert!(Remaining(2, 1) > Remaining(5, 0));
    }

    #[test]
    fn remaining_breaks_ties_by_lowest_id() {
        assert!(Remaining(4, 0) > Remaining(4, 1));
        assert!(Remaining(4, 2) < Remaining(4, 1));
    }
}
