//! Command-line interface definition for uniqint
//!
//! Provides argument parsing for the batch integer deduplicator.

use clap::Parser;
use std::path::PathBuf;

/// Batch integer deduplicator
///
/// Reads every `.txt` file in the input directory, extracts numbers from
/// each line, keeps values in [-1023, 1023], removes duplicates, sorts and
/// writes one result file per input file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "uniqint",
    author = "m0h1nd4",
    version,
    about = "Batch integer deduplicator - filter, dedup and sort numbers from text files",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════╗
║                         UNIQINT v1.0.0                           ║
║                   Batch Integer Deduplicator                     ║
╚══════════════════════════════════════════════════════════════════╝

Reads every .txt file in the input directory. Each line contributes at
most one number: either the 3rd element of the first parenthesized
3-tuple on the line (parsed as an integer, "3.7" truncates to 3), or
the bare line parsed as a float ("3.9" stays 3.9). Values outside
[-1023, 1023] are dropped, duplicates collapse by numeric value, and
the sorted result lands in <output>/<file>_result.txt.

EXAMPLES:
    # Process ./sample_inputs into ./sample_results (the defaults)
    uniqint

    # Explicit directories
    uniqint -i data/ -o results/

    # Verbose per-file reporting
    uniqint -i data/ -o results/ -v

LINE GRAMMAR:
    (1, 2, 42)      - tuple line, candidate 42
    (1, 2, 3.9)     - tuple line, candidate 3 (integer truncation)
    3.9             - bare line, candidate 3.9 (fraction kept)
    (1,2,3,4)       - not a 3-tuple, line discarded
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/uniqint"
)]
pub struct Args {
    /// Input directory containing .txt files
    #[arg(short, long, value_name = "DIR", default_value = "sample_inputs")]
    pub input: PathBuf,

    /// Output directory for result files (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "sample_results")]
    pub output: PathBuf,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - per-file value listings and debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
