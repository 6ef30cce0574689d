use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::info;
use print_stack_sizes::{objdump, Objdump, Result};

/// Prints the functions with the largest stack frames in an x86-64 executable.
#[derive(Parser, Debug)]
#[command(about, author)]
struct Args {
    /// The executable to analyze.
    executable: PathBuf,

    /// The number of functions to print (non-positive values print nothing).
    #[arg(allow_negative_numbers = true)]
    num_results: i64,

    /// The disassembler to run, e.g. the objdump of a cross toolchain.
    #[arg(long, value_name = "PROGRAM", default_value = objdump::DEFAULT_PROGRAM)]
    objdump: String,

    /// Print the number of skipped malformed lines to stderr.
    #[arg(long)]
    print_skipped: bool,
}

fn run(args: &Args) -> Result<()> {
    let disassembly = Objdump::new(&args.objdump).disassemble(&args.executable)?;
    let scan = print_stack_sizes::largest_allocations(&disassembly, args.num_results);
    info!(
        "Reporting {} allocations, {} malformed lines skipped",
        scan.allocations.len(),
        scan.skipped
    );

    print_stack_sizes::write_report(&mut io::stdout().lock(), &scan.allocations)?;
    if args.print_skipped {
        eprintln!("skipped {} malformed lines", scan.skipped);
    }
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
