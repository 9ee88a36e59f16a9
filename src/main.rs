use std::{env, fs, process};

use schedsim::core::Ticks;
use schedsim::{simulate, Algorithm, Job, JobSet, SimConfig};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some((path, config)) = parse_args(&args) else {
        usage();
    };

    let jobs = match read_jobs(&path) {
        Ok(jobs) => jobs,
        Err(err) => fail(&err),
    };
    let jobs = match JobSet::new(jobs) {
        Ok(jobs) => jobs,
        Err(err) => fail(&err.to_string()),
    };

    let result = simulate(jobs, config);
    let averages = result.averages().unwrap();

    for (job, (turnaround, wait)) in result
        .turnaround_times
        .iter()
        .zip(&result.wait_times)
        .enumerate()
    {
        println!(
            "Job {job:3} -- Turnaround {:3.2}  Wait {:3.2}",
            *turnaround as f64, *wait as f64
        );
    }
    println!(
        "Average -- Turnaround {:3.2}  Wait {:3.2}",
        averages.turnaround, averages.wait
    );
}

// <job-file> then -p/-q flag pairs in either order. None means malformed
// enough to warrant the usage message; bad flag values fall back to the
// defaults instead.
fn parse_args(args: &[String]) -> Option<(String, SimConfig)> {
    let mut parts = args.iter();
    let path = parts.next()?.clone();

    let mut algorithm = Algorithm::default();
    let mut quantum = 1;
    while let Some(flag) = parts.next() {
        let value = parts.next()?;
        match flag.as_str() {
            "-p" => algorithm = Algorithm::parse(value),
            "-q" => quantum = parse_quantum(value),
            _ => return None,
        }
    }

    Some((path, SimConfig::new(algorithm, quantum)))
}

fn parse_quantum(value: &str) -> Ticks {
    match value.parse::<Ticks>() {
        Ok(quantum) if quantum >= 1 => quantum,
        _ => 1,
    }
}

// One job per line: `run_time arrival_time`, whitespace-separated.
fn read_jobs(path: &str) -> Result<Vec<Job>, String> {
    let text = fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?;

    let mut jobs = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace().map(str::parse::<Ticks>);
        match (fields.next(), fields.next()) {
            (Some(Ok(run_time)), Some(Ok(arrival_time))) => jobs.push(Job {
                id: jobs.len(),
                run_time,
                arrival_time,
            }),
            _ => {
                return Err(format!(
                    "{path}:{}: expected `run_time arrival_time`",
                    line_no + 1
                ))
            }
        }
    }

    Ok(jobs)
}

fn usage() -> ! {
    eprintln!("Usage: schedsim <job-file> [-p <FIFO|SRJN|RR>] [-q <QUANTUM>]");
    process::exit(1);
}

fn fail(message: &str) -> ! {
    eprintln!("schedsim: {message}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_in_either_order() {
        let (path, config) = parse_args(&strings(&["jobs.txt", "-q", "3", "-p", "RR"])).unwrap();
        assert_eq!(path, "jobs.txt");
        assert_eq!(config.algorithm, Algorithm::RoundRobin);
        assert_eq!(config.quantum, 3);

        let (_, config) = parse_args(&strings(&["jobs.txt", "-p", "SRJN"])).unwrap();
        assert_eq!(config.algorithm, Algorithm::Srjn);
        assert_eq!(config.quantum, 1);
    }

    #[test]
    fn bad_flag_values_fall_back_to_defaults() {
        let (_, config) = parse_args(&strings(&["jobs.txt", "-p", "MLFQ", "-q", "-2"])).unwrap();
        assert_eq!(config.algorithm, Algorithm::Fifo);
        assert_eq!(config.quantum, 1);

        assert_eq!(parse_quantum("0"), 1);
        assert_eq!(parse_quantum("nope"), 1);
        assert_eq!(parse_quantum("5"), 5);
    }

    #[test]
    fn rejects_malformed_invocations() {
        assert!(parse_args(&strings(&[])).is_none());
        assert!(parse_args(&strings(&["jobs.txt", "-p"])).is_none());
        assert!(parse_args(&strings(&["jobs.txt", "--algorithm", "RR"])).is_none());
    }
}
