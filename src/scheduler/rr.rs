use std::collections::VecDeque;

use super::{AdmissionPolicy, Dispatch, Scheduler, SimConfig};
use crate::core::{JobId, SimCtx, Ticks};

// Round-robin: the front of the queue is served for at most `quantum`
// contiguous ticks per visit, then rotated to the back. A job that completes
// inside its slice is popped instead of rotated, and the completion also
// suppresses the rotation at the next quantum boundary.
pub struct RrScheduler {
    queue: VecDeque<JobId>,
    quantum: Ticks,
    // Ticks served in the current slice
    time_elapsed: Ticks,
    completed_in_slice: bool,
}

impl Scheduler for RrScheduler {
    const ADMISSION: AdmissionPolicy = AdmissionPolicy::Lookahead;

    fn init(_ctx: &mut SimCtx, config: &SimConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            quantum: config.quantum.max(1),
            time_elapsed: 0,
            completed_in_slice: false,
        }
    }

    fn admit(&mut self, _ctx: &mut SimCtx, job: JobId) {
        self.queue.push_back(job);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Dispatch {
        let Some(&job) = self.queue.front() else {
            // Idle ticks do not consume the running slice.
            return Dispatch::Idle;
        };

        self.time_elapsed += 1;
        let done = ctx.work_on(job);
        if done {
            self.queue.pop_front();
            self.completed_in_slice = true;
        }

        if self.time_elapsed == self.quantum {
            if !self.queue.is_empty() && !self.completed_in_slice {
                self.queue.rotate_left(1);
            }
            self.completed_in_slice = false;
            self.time_elapsed = 0;
        }

        if done {
            Dispatch::Completed(job)
        } else {
            Dispatch::Worked(job)
        }
    }
}
