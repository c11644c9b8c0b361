use std::io;
use std::path::PathBuf;

use clap::Parser;
use projectile_simulation::config;
use projectile_simulation::*;

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version)]
#[command(about = "RK4 projectile trajectory under altitude-dependent gravity", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// ALTITUDE (m) VELOCITY (m/s) ANGLE (deg) TIME_STEP (s) DURATION (s);
    /// prompts for each value unless all five are given
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    /// Directory for the output file [env: PROJECTILE_OUTPUT_DIR, default: .]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init_tracing();
    let cli = Cli::parse();

    let params = if cli.values.len() == 5 {
        LaunchParameters::from_args(cli.values.as_slice())?
    } else {
        println!("Command line arguments error/not provided.");
        Prompter::new(io::stdin().lock(), io::stdout()).read_parameters()?
    };

    println!("Running Simulation...");

    let output_dir = cli.output_dir.unwrap_or_else(config::output_dir);
    match run_to_file(&params, Integrator::default(), &output_dir) {
        Ok(report) => {
            println!(
                "Simulation complete. Output written to {}.",
                report.path.display()
            );
            println!();
            println!("{}", report.telemetry);
            Ok(())
        }
        Err(err) if err.is_create_failure() => {
            println!("Failed To Open File For Writing");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
