//! # Uniqint
//!
//! Batch integer deduplicator: read text files containing numbers, filter
//! them to a fixed range, deduplicate, sort and write result files.
//!
//! ## Pipeline
//!
//! For every `.txt` file in the input directory:
//!
//! 1. Split the contents on newlines, trim, drop empty lines
//! 2. Extract one candidate per line (tuple 3rd element as integer, or the
//!    bare line as a float)
//! 3. Keep candidates in `[-1023, 1023]`, collapse numeric duplicates
//! 4. Sort ascending and write `<output>/<file>_result.txt`
//!
//! Failures are isolated per file; only a missing input directory aborts
//! the batch.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uniqint::processor::{Processor, ProcessorConfig};
//! use std::path::PathBuf;
//!
//! let config = ProcessorConfig {
//!     input_dir: PathBuf::from("sample_inputs"),
//!     output_dir: PathBuf::from("sample_results"),
//!     quiet: false,
//!     verbose: false,
//! };
//!
//! let processor = Processor::new(config);
//! processor.process().unwrap();
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use processor::{Processor, ProcessorConfig};
