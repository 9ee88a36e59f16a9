use average::{Estimate, Mean};

use super::SimError;
use crate::core::Ticks;

/// Per-job metrics in canonical id order; every slot is written exactly once
/// by the time the clock loop finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub wait_times: Vec<Ticks>,
    pub turnaround_times: Vec<Ticks>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub turnaround: f64,
    pub wait: f64,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.turnaround_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turnaround_times.is_empty()
    }

    pub fn averages(&self) -> Result<Averages, SimError> {
        if self.is_empty() {
            return Err(SimError::EmptyJobSet);
        }
        Ok(Averages {
            turnaround: mean(&self.turnaround_times),
            wait: mean(&self.wait_times),
        })
    }
}

fn mean(values: &[Ticks]) -> f64 {
    values
        .iter()
        .map(|&v| v as f64)
        .collect::<Mean>()
        .estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_are_arithmetic_means() {
        let result = SimulationResult {
            wait_times: vec![0, 3],
            turnaround_times: vec![3, 8],
        };
        let avg = result.averages().unwrap();
        assert_eq!(avg.turnaround, 5.5);
        assert_eq!(avg.wait, 1.5);
    }

    #[test]
    fn averages_reject_empty_input() {
        let result = SimulationResult {
            wait_times: Vec::new(),
            turnaround_times: Vec::new(),
        };
        assert_eq!(result.averages().unwrap_err(), SimError::EmptyJobSet);
    }
}
