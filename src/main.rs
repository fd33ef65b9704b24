//! Uniqint - batch integer deduplicator
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use uniqint::cli::Args;
use uniqint::processor::{Processor, ProcessorConfig};
use uniqint::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
        print_header("Scanning input...");
        print_info(&format!("Input directory:  {:?}", args.input));
        print_info(&format!("Output directory: {:?}", args.output));
    }

    let config = ProcessorConfig::from_args(&args);

    let processor = Processor::new(config);
    processor.process()?;

    Ok(())
}
