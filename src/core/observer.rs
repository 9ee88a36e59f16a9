use super::state::{SimCtx, TaskState};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;
        debug_assert_eq!(self.step, ctx.now, "Observer must run once per tick");

        let mut consumed_total = 0;
        for task in &ctx.tasks {
            match task.state {
                TaskState::Pending => {
                    debug_assert_eq!(
                        task.consumed_service, 0,
                        "Pending job {} already received work",
                        task.id
                    );
                    debug_assert!(
                        task.arrival_time >= ctx.now,
                        "Job {} past its arrival tick but never admitted",
                        task.id
                    );
                }
                TaskState::Ready => {
                    debug_assert!(
                        task.consumed_service < task.required_service,
                        "Ready job {} has no outstanding service",
                        task.id
                    );
                }
                TaskState::Completed => {
                    debug_assert_eq!(
                        task.consumed_service, task.required_service,
                        "Completed job {} owes service",
                        task.id
                    );
                    let completion = task.completion_time;
                    debug_assert!(
                        completion.is_some_and(|t| t <= ctx.now),
                        "Completed job {} has completion time {completion:?} beyond now",
                        task.id
                    );
                }
            }
            consumed_total += task.consumed_service;
        }

        debug_assert_eq!(
            consumed_total,
            ctx.work_done(),
            "Work ledger out of sync with per-task accounting"
        );
    }
}
