use std::env;
use std::time::{Duration, Instant};

use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use yielding_lev::{Scheduler, SchedulerBuilder, Step};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("quantum_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Yielding Levenshtein Probe: Quantum Latency and Correctness");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each case is driven one step at a time, the way a cooperative host would.");
    eprintln!("  • steps: dispatch calls needed to finish");
    eprintln!("  • worst_step_us: longest single step in microseconds (quantum = {}us)", options.quantum.as_micros());
    eprintln!("  • rss_delta_kib: resident memory delta in KiB (matrix is (m+1)*(n+1)*4 bytes)");
    eprintln!("  • status: 'passed' = matches full-table baseline (up to size {})", options.verify_limit);
    eprintln!();

    let scheduler = SchedulerBuilder::new().with_quantum(options.quantum).build();
    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Balanced inputs (len x len)...");
    measurements.extend(run_cases(&scheduler, &options, &mut sys, "balanced", |len| {
        (deterministic_dna(len), deterministic_dna_offset(len, 1))
    }));
    eprintln!();

    eprintln!("[2/2] Unbalanced inputs (64*len x 8), initialization-heavy...");
    measurements.extend(run_cases(&scheduler, &options, &mut sys, "unbalanced", |len| {
        (deterministic_dna(len * 64), deterministic_dna_offset(8, 2))
    }));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("quantum_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    quantum: Duration,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;
        let mut quantum = yielding_lev::config::DEFAULT_QUANTUM;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_usize(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_usize(&value, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--quantum-us=") {
                quantum = Duration::from_micros(parse_usize(value, "quantum")? as u64);
            } else if arg == "--quantum-us" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --quantum-us".to_string())?
                    .into();
                quantum = Duration::from_micros(parse_usize(&value, "quantum")? as u64);
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            quantum,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin quantum_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum input length to verify via full-table baseline (default: 512)
  --quantum-us <N>              Quantum length in microseconds (default: 1000)
  -h, --help                    Print this help message

Examples:
  cargo run --bin quantum_probe
  cargo run --bin quantum_probe -- --format table --quantum-us 250
"
        );
    }
}

fn parse_usize(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    distance: u32,
    steps: u64,
    worst_step: Duration,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_cases<F>(
    scheduler: &Scheduler,
    options: &Options,
    sys: &mut System,
    scenario: &'static str,
    inputs: F,
) -> Vec<Measurement>
where
    F: Fn(usize) -> (Vec<u8>, Vec<u8>),
{
    const SIZES: &[usize] = &[64, 256, 512, 1024, 2048, 4096, 8192];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
            let (a, b) = inputs(len);
            let m = measure(scheduler, scenario, sys, &a, &b, options.verify_limit);
            eprintln!(
                "{} distance={}, steps={}, worst_step={}us, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.distance,
                m.steps,
                m.worst_step.as_micros(),
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn measure(
    scheduler: &Scheduler,
    scenario: &'static str,
    sys: &mut System,
    a: &[u8],
    b: &[u8],
    verify_limit: usize,
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let mut worst_step = Duration::ZERO;
    let (distance, steps) = match scheduler.begin(a, b) {
        Ok(mut handle) => loop {
            let step_start = Instant::now();
            let step = scheduler.step(&mut handle);
            worst_step = worst_step.max(step_start.elapsed());
            if let Step::Done(d) = step {
                break (d, handle.steps());
            }
        },
        Err(err) => {
            eprintln!("quantum_probe: {err}");
            std::process::exit(1);
        }
    };
    let wall = start.elapsed();
    let after = rss_kib(sys);

    let verification_status = if a.len().max(b.len()) <= verify_limit {
        if full_levenshtein(a, b) == distance {
            VerificationStatus::Passed
        } else {
            VerificationStatus::Failed
        }
    } else {
        VerificationStatus::NotChecked
    };

    Measurement {
        scenario,
        size_desc: format!("{}x{}", a.len(), b.len()),
        distance,
        steps,
        worst_step,
        wall_s: wall.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status,
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let failed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
        .count();
    let worst = measurements
        .iter()
        .map(|m| m.worst_step)
        .max()
        .unwrap_or_default();
    let over_budget = measurements
        .iter()
        .filter(|m| m.worst_step > options.quantum * 2)
        .count();

    eprintln!("  Cases: {}", measurements.len());
    eprintln!("  ✗ Failed verification: {failed}");
    eprintln!("  Worst single step: {}us", worst.as_micros());
    eprintln!("  Cases with a step over twice the quantum: {over_budget}");
    eprintln!();
    eprintln!("Interpretation:");
    eprintln!("  • a step may overshoot the quantum by up to one check interval of work");
    eprintln!("  • steps should grow with (m+1)*(n+1) while worst_step stays flat");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,distance,steps,worst_step_us,wall_s,rss_delta_kib,verification_status");
    for m in measurements {
        println!(
            "{},{},{},{},{},{:.3},{},{}",
            m.scenario,
            m.size_desc,
            m.distance,
            m.steps,
            m.worst_step.as_micros(),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>8}  {:>14}  {:>10}  {:>14}  {:>12}",
        "scenario", "size", "distance", "steps", "worst_step_us", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<10}  {:-<8}  {:-<14}  {:-<10}  {:-<14}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10}  {:>8}  {:>14}  {:>10.3}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.distance,
            m.steps,
            m.worst_step.as_micros(),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"distance\":{},\"steps\":{},\"worst_step_us\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":\"{}\"}}{}",
            m.scenario,
            m.size_desc,
            m.distance,
            m.steps,
            m.worst_step.as_micros(),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn deterministic_dna(len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len).map(|i| ALPHABET[i % ALPHABET.len()]).collect()
}

fn deterministic_dna_offset(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()])
        .collect()
}

fn full_levenshtein(s: &[u8], t: &[u8]) -> u32 {
    let mut prev: Vec<u32> = (0..=t.len() as u32).collect();
    let mut curr = vec![0u32; t.len() + 1];
    for (i, &cs) in s.iter().enumerate() {
        curr[0] = i as u32 + 1;
        for j in 1..=t.len() {
            let cost = u32::from(cs != t[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[t.len()]
}
