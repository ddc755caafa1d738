/*!
 * mpsched - Main Entry Point
 *
 * Loads a binary process file, assigns the processes to the configured
 * processors and runs one scheduler thread per processor until every
 * queue has drained.
 */

use clap::Parser;
use miette::IntoDiagnostic;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use mpsched::core::limits::{DEFAULT_AGING_THRESHOLD, DEFAULT_QUANTUM, DEFAULT_TURN_LIMIT};
use mpsched::process::write_dump;
use mpsched::simulation::parse_processor_args;
use mpsched::{init_tracing, load_records, Simulation, SimulationConfig};

/// Multiprocessor scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "mpsched")]
#[command(about = "Simulate per-processor scheduling with load balancing")]
struct Args {
    /// Binary process record file
    file: PathBuf,

    /// <ALGORITHM> <LOAD> pairs, one per processor
    /// (1 priority, 2 shortest job first, 3 round robin, 4 first come first served)
    #[arg(required_unless_present = "dump")]
    processors: Vec<String>,

    /// Work units consumed per scheduling tick
    #[arg(long, default_value_t = DEFAULT_QUANTUM)]
    quantum: i32,

    /// Round robin: consecutive quanta before the head is rotated
    #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
    turn_limit: u32,

    /// Priority: elapsed logical time between aging passes
    #[arg(long, default_value_t = DEFAULT_AGING_THRESHOLD)]
    aging_threshold: i32,

    /// Wall-clock pause per executed quantum, in milliseconds
    #[arg(long, default_value_t = 0)]
    step_delay_ms: u64,

    /// Stop reading after this many records
    #[arg(long)]
    max_processes: Option<usize>,

    /// Print the loaded records and exit
    #[arg(long)]
    dump: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_tracing();

    if args.dump {
        let records = load_records(&args.file, args.max_processes)?;
        let mut stdout = io::stdout().lock();
        write_dump(&records, &mut stdout).into_diagnostic()?;
        return stdout.flush().into_diagnostic();
    }

    let config = SimulationConfig::builder()
        .with_processors(parse_processor_args(&args.processors)?)
        .with_quantum(args.quantum)
        .with_turn_limit(args.turn_limit)
        .with_aging_threshold(args.aging_threshold)
        .with_step_delay(Duration::from_millis(args.step_delay_ms))
        .build()?;

    let records = load_records(&args.file, args.max_processes)?;
    let simulation = Simulation::new(config, records);

    info!("Starting simulation; press Ctrl+C to abort");
    let run = tokio::task::spawn_blocking(move || simulation.run());

    tokio::select! {
        joined = run => {
            let report = joined.into_diagnostic()??;
            if args.json {
                println!("{}", report.to_json().into_diagnostic()?);
            } else {
                print!("{}", report);
            }
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted; exiting without waiting for processors");
            std::process::exit(130);
        }
    }
}
