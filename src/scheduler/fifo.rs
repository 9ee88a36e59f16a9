use super::{AdmissionPolicy, Dispatch, Scheduler, SimConfig};
use crate::core::{JobId, SimCtx};

// Non-preemptive, serves jobs strictly in canonical (arrival) order.
pub struct FifoScheduler {
    // Currently-serving position in the canonical order
    current: JobId,
}

impl Scheduler for FifoScheduler {
    const ADMISSION: AdmissionPolicy = AdmissionPolicy::AtArrival;
    const EARLY_EXIT: bool = true;

    fn init(_ctx: &mut SimCtx, _config: &SimConfig) -> Self {
        Self { current: 0 }
    }

    fn admit(&mut self, _ctx: &mut SimCtx, _job: JobId) {
        // Service order is fixed by the canonical sort; nothing to queue.
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Dispatch {
        if self.current >= ctx.tasks.len() {
            return Dispatch::Idle;
        }

        let job = self.current;
        if !ctx.task(job).is_ready() {
            // Everything earlier is done and the cursor job has not arrived.
            return Dispatch::Idle;
        }

        if ctx.work_on(job) {
            self.current += 1;
            Dispatch::Completed(job)
        } else {
            Dispatch::Worked(job)
        }
    }
}
