pub mod fifo;
pub mod rr;
pub mod srjn;

use crate::core::{JobId, SimCtx, Ticks};
use std::fmt;

pub use fifo::FifoScheduler;
pub use rr::RrScheduler;
pub use srjn::SrjnScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fifo,
    Srjn,
    RoundRobin,
}

impl Algorithm {
    // Unknown selectors fall back to FIFO rather than failing.
    pub fn parse(name: &str) -> Self {
        match name {
            "FIFO" => Self::Fifo,
            "SRJN" => Self::Srjn,
            "RR" => Self::RoundRobin,
            _ => Self::Fifo,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Fifo
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Srjn => write!(f, "SRJN"),
            Self::RoundRobin => write!(f, "RR"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub algorithm: Algorithm,
    // Round-robin slice length; ignored by the other disciplines
    pub quantum: Ticks,
}

impl SimConfig {
    pub fn new(algorithm: Algorithm, quantum: Ticks) -> Self {
        Self {
            algorithm,
            quantum: quantum.max(1),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(Algorithm::default(), 1)
    }
}

// When the clock driver hands arrivals to the scheduler, relative to the
// tick's work unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionPolicy {
    // Jobs with arrival_time == now join before the work unit.
    AtArrival,
    // Jobs with arrival_time == now + 1 join after it (tick-0 arrivals are
    // queued before the first work unit).
    Lookahead,
}

// Outcome of a single work-unit dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Idle,
    Worked(JobId),
    Completed(JobId),
}

pub trait Scheduler {
    const ADMISSION: AdmissionPolicy;
    // Whether the clock loop may stop as soon as every job is completed
    const EARLY_EXIT: bool = false;

    fn init(ctx: &mut SimCtx, config: &SimConfig) -> Self;

    fn admit(&mut self, ctx: &mut SimCtx, job: JobId);

    // Select a job and apply exactly one work unit to it.
    fn dispatch(&mut self, ctx: &mut SimCtx) -> Dispatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_algorithms() {
        assert_eq!(Algorithm::parse("FIFO"), Algorithm::Fifo);
        assert_eq!(Algorithm::parse("SRJN"), Algorithm::Srjn);
        assert_eq!(Algorithm::parse("RR"), Algorithm::RoundRobin);
    }

    #[test]
    fn parse_defaults_to_fifo() {
        assert_eq!(Algorithm::parse("fifo"), Algorithm::Fifo);
        assert_eq!(Algorithm::parse("CFS"), Algorithm::Fifo);
        assert_eq!(Algorithm::parse(""), Algorithm::Fifo);
    }

    #[test]
    fn config_coerces_quantum() {
        assert_eq!(SimConfig::new(Algorithm::RoundRobin, 0).quantum, 1);
        assert_eq!(SimConfig::new(Algorithm::RoundRobin, 4).quantum, 4);
        assert_eq!(SimConfig::default().quantum, 1);
    }
}
