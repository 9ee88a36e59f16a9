use crate::sim::JobSet;

// Index into the task table; always equals the job's canonical position.
pub type JobId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    // Not yet arrived.
    Pending,
    // Arrived, still owes service.
    Ready,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: JobId,
    pub state: TaskState,
    pub arrival_time: Ticks,
    pub required_service: Ticks,
    pub consumed_service: Ticks,
    pub completion_time: Option<Ticks>,
}

impl Task {
    pub fn remaining(&self) -> Ticks {
        self.required_service - self.consumed_service
    }

    pub fn is_ready(&self) -> bool {
        self.state == TaskState::Ready
    }

    pub fn is_completed(&self) -> bool {
        self.state == TaskState::Completed
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub tasks: Vec<Task>,

    // Total work units applied across the run
    work_done: Ticks,
}

impl SimCtx {
    pub fn new(jobs: &JobSet) -> Self {
        let tasks = jobs
            .iter()
            .map(|job| Task {
                id: job.id,
                state: TaskState::Pending,
                arrival_time: job.arrival_time,
                required_service: job.run_time,
                consumed_service: 0,
                completion_time: None,
            })
            .collect::<Vec<_>>();

        for (index, task) in tasks.iter().enumerate() {
            debug_assert_eq!(task.id, index, "JobId must match task table index");
        }

        Self {
            now: 0,
            tasks,
            work_done: 0,
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn task(&self, job: JobId) -> &Task {
        &self.tasks[job]
    }

    pub fn task_mut(&mut self, job: JobId) -> &mut Task {
        &mut self.tasks[job]
    }

    pub fn admit(&mut self, job: JobId) {
        let task = self.task_mut(job);
        debug_assert_eq!(
            task.state,
            TaskState::Pending,
            "Job {job} admitted more than once"
        );
        task.state = TaskState::Ready;
    }

    // Apply one work unit; true once the service requirement is met.
    pub fn work_on(&mut self, job: JobId) -> bool {
        self.work_done += 1;
        let task = self.task_mut(job);
        debug_assert!(task.is_ready(), "Job {job} must be Ready to receive work");
        task.consumed_service += 1;
        task.consumed_service == task.required_service
    }

    pub fn mark_completed(&mut self, job: JobId, completion_time: Ticks) {
        let task = self.task_mut(job);
        debug_assert!(task.is_ready(), "Job {job} must be Ready when completing");
        debug_assert_eq!(
            task.consumed_service, task.required_service,
            "Job {job} completed with outstanding service"
        );
        task.state = TaskState::Completed;
        task.completion_time = Some(completion_time);
    }

    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(Task::is_completed)
    }

    pub fn work_done(&self) -> Ticks {
        self.work_done
    }
}
