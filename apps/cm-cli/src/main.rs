use clap::{Args, Parser, Subcommand};
use cm_components::CrystalCapacitor;
use cm_sim::{run_sim, summarize, SimOptions, SimRecord, SimResult};

#[derive(Parser)]
#[command(name = "cm-cli")]
#[command(about = "crystalmem CLI - crystal dielectric memory-cell simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the summary
    Run {
        #[command(flatten)]
        options: RunArgs,
        /// Print the summary as JSON instead of human-readable lines
        #[arg(long)]
        json: bool,
    },
    /// Run a simulation and print the trace as CSV on stdout
    Trace {
        #[command(flatten)]
        options: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Number of stimulus samples (one sine cycle)
    #[arg(long, default_value_t = cm_sim::DEFAULT_STIMULUS_SAMPLES)]
    samples: usize,
    /// Stimulus amplitude
    #[arg(long, default_value_t = cm_sim::DEFAULT_STIMULUS_AMPLITUDE)]
    amplitude: f64,
    /// Relaxation steps after the stimulus
    #[arg(long, default_value_t = cm_sim::DEFAULT_RELAX_STEPS)]
    relax_steps: usize,
    /// Per-step decay factor during relaxation
    #[arg(long, default_value_t = cm_components::DEFAULT_DECAY_FACTOR)]
    decay_factor: f64,
}

impl RunArgs {
    fn to_options(&self) -> SimOptions {
        SimOptions {
            stimulus_samples: self.samples,
            stimulus_amplitude: self.amplitude,
            relax_steps: self.relax_steps,
            decay_factor: self.decay_factor,
        }
    }
}

fn main() -> SimResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { options, json } => cmd_run(&options.to_options(), json),
        Commands::Trace { options } => cmd_trace(&options.to_options()),
    }
}

fn execute(opts: &SimOptions) -> SimResult<SimRecord> {
    let mut capacitor = CrystalCapacitor::default();
    run_sim(&mut capacitor, opts)
}

fn cmd_run(opts: &SimOptions, json: bool) -> SimResult<()> {
    let record = execute(opts)?;
    let summary = summarize(&record)?;

    if json {
        let doc = serde_json::to_string_pretty(&summary).map_err(|e| {
            tracing::error!(error = %e, "summary serialization failed");
            cm_sim::SimError::InvalidArg {
                what: "summary serialization failed",
            }
        })?;
        println!("{doc}");
    } else {
        println!("✓ Run completed");
        println!("  Samples:            {}", summary.samples);
        println!("  Peak permittivity:  {:.6}", summary.peak_permittivity);
        println!("  Final permittivity: {:.6}", summary.final_permittivity);
        println!("  Final capacitance:  {:.6e} F", summary.final_capacitance_f);
    }

    Ok(())
}

fn cmd_trace(opts: &SimOptions) -> SimResult<()> {
    let record = execute(opts)?;

    // Build CSV
    let mut csv = String::from("step,permittivity\n");
    for (step, value) in record.step.iter().zip(&record.permittivity) {
        csv.push_str(&format!("{},{}\n", step, value));
    }
    print!("{}", csv);

    Ok(())
}
