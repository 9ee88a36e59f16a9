use super::{job::JobSet, metrics::SimulationResult};
use crate::{
    core::{driver::SchedCore, SimEvent, Ticks},
    scheduler::{
        AdmissionPolicy, Algorithm, FifoScheduler, RrScheduler, Scheduler, SimConfig,
        SrjnScheduler,
    },
};

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    jobs: JobSet,
    job_cursor: usize,
    max_clock: Ticks,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(jobs: JobSet, config: &SimConfig) -> Self {
        let core = SchedCore::new(&jobs, config);
        let max_clock = jobs.max_clock();
        Self {
            core,
            jobs,
            job_cursor: 0,
            max_clock,
        }
    }

    // One tick: admissions per the discipline's policy around a single
    // work-unit dispatch.
    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        let now = self.core.now();

        match S::ADMISSION {
            AdmissionPolicy::AtArrival => self.admit_arrivals(now, &mut events),
            // Lookahead disciplines queue tick-0 arrivals before any work.
            AdmissionPolicy::Lookahead if now == 0 => self.admit_arrivals(0, &mut events),
            AdmissionPolicy::Lookahead => {}
        }

        events.extend(self.core.tick());

        if S::ADMISSION == AdmissionPolicy::Lookahead {
            // The clock has advanced; these jobs become servable next tick.
            let next = self.core.now();
            self.admit_arrivals(next, &mut events);
        }

        events
    }

    pub fn run(&mut self) {
        while self.core.now() < self.max_clock {
            self.step();
            if S::EARLY_EXIT && self.all_jobs_completed() {
                break;
            }
        }
    }

    fn admit_arrivals(&mut self, time: Ticks, events: &mut Vec<SimEvent>) {
        // Arrivals are contiguous, since jobs are sorted
        let arriving = self.jobs.as_slice()[self.job_cursor..]
            .iter()
            .take_while(|job| job.arrival_time == time);

        for job in arriving {
            self.core.wake_job(job.id);
            events.push(SimEvent::JobAdmitted { job: job.id });
            self.job_cursor += 1;
        }
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.ctx.all_completed()
    }

    pub fn max_clock(&self) -> Ticks {
        self.max_clock
    }

    /// Per-job metrics; call once the run is over.
    pub fn result(&self) -> SimulationResult {
        let mut wait_times = Vec::with_capacity(self.jobs.len());
        let mut turnaround_times = Vec::with_capacity(self.jobs.len());

        for task in &self.core.ctx.tasks {
            let completion = task
                .completion_time
                .expect("Job must complete within the clock bound");
            let turnaround = completion - task.arrival_time;
            turnaround_times.push(turnaround);
            wait_times.push(turnaround - task.required_service);
        }

        SimulationResult {
            wait_times,
            turnaround_times,
        }
    }
}

/// Run the configured discipline over the job set to completion.
pub fn simulate(jobs: JobSet, config: SimConfig) -> SimulationResult {
    match config.algorithm {
        Algorithm::Fifo => run_to_end::<FifoScheduler>(jobs, &config),
        Algorithm::Srjn => run_to_end::<SrjnScheduler>(jobs, &config),
        Algorithm::RoundRobin => run_to_end::<RrScheduler>(jobs, &config),
    }
}

fn run_to_end<S: Scheduler>(jobs: JobSet, config: &SimConfig) -> SimulationResult {
    let mut sim = Sim::<S>::new(jobs, config);
    sim.run();
    sim.result()
}
