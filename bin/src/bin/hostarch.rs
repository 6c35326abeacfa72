use clap::Parser;
use std::process::ExitCode;

/// Prints the CPU architecture of the host machine.
#[derive(Parser, Debug)]
#[command(version, about = "hostarch command line interface", long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    match hostarch::arch::host() {
        Ok(machine) => {
            println!("CPU architecture: {}", machine.reported());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
