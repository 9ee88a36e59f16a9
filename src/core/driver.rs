use super::{
    event::SimEvent,
    observer::Observer,
    state::{JobId, SimCtx, Ticks},
};
use crate::{
    scheduler::{Dispatch, Scheduler, SimConfig},
    sim::JobSet,
};

pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(jobs: &JobSet, config: &SimConfig) -> Self {
        let mut ctx = SimCtx::new(jobs);
        let scheduler = S::init(&mut ctx, config);
        let observer = Observer::new();
        Self {
            ctx,
            scheduler,
            observer,
        }
    }

    // One simulated tick: a single work-unit dispatch, then the clock advance.
    pub fn tick(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();

        match self.scheduler.dispatch(&mut self.ctx) {
            Dispatch::Idle => events.push(SimEvent::CpuIdle),
            Dispatch::Worked(_) => {}
            Dispatch::Completed(job) => {
                // Completion lands on the tick after the final work unit.
                let completion_time = self.ctx.now + 1;
                self.ctx.mark_completed(job, completion_time);
                events.push(SimEvent::JobCompleted { job });
            }
        }

        self.ctx.advance_time(1);
        self.observer.observe(&self.ctx);
        events
    }

    pub fn wake_job(&mut self, job: JobId) {
        self.ctx.admit(job);
        self.scheduler.admit(&mut self.ctx, job);
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }
}
