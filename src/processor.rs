//! Core processing engine
//!
//! Scans the input directory for `.txt` files and runs the per-file
//! pipeline: read, extract, dedup, sort, write. Files are processed one at
//! a time in listing order; a single file's failure is logged and the batch
//! moves on.

use crate::cli::Args;
use crate::error::BatchError;
use crate::extract::{Extraction, LineExtractor};
use crate::output::{ensure_output_dir, ResultWriter};
use crate::progress::{create_progress_bar, print_info, print_bullet, print_warning, print_error, ProcessingStats};

use bytesize::ByteSize;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Processor configuration
pub struct ProcessorConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub quiet: bool,
    pub verbose: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_dir: args.input.clone(),
            output_dir: args.output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    extractor: LineExtractor,
    stats: Arc<ProcessingStats>,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            extractor: LineExtractor::new(),
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Run the batch over the configured input directory.
    ///
    /// A missing input directory is the only fatal error; everything else
    /// is isolated to the file it concerns.
    pub fn process(&self) -> anyhow::Result<()> {
        if !self.config.input_dir.is_dir() {
            return Err(BatchError::DirectoryNotFound {
                path: self.config.input_dir.clone(),
            }
            .into());
        }

        // Output directory is created up front, before any file is touched.
        ensure_output_dir(&self.config.output_dir)?;

        let files = self.collect_files()?;

        if files.is_empty() {
            log::warn!("No .txt files found in {:?}", self.config.input_dir);
            print_warning(&format!(
                "No .txt files found in {:?}",
                self.config.input_dir
            ));
            return Ok(());
        }

        let total_size: u64 = files.iter().map(|(_, size)| *size).sum();

        if !self.config.quiet {
            print_info(&format!(
                "Found {} files ({} total)",
                files.len(),
                ByteSize(total_size)
            ));
        }

        let pb = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_progress_bar(files.len() as u64, "Processing...")
        };

        let writer = ResultWriter::new(self.config.output_dir.clone());

        for (path, _size) in &files {
            match self.process_file(path, &writer) {
                Ok(dest) => {
                    log::info!("Finished processing {:?} -> {:?}", path, dest);
                    self.stats.complete_file();
                }
                Err(e) => {
                    log::error!("Error processing file {:?}: {}", path, e);
                    print_error(&format!("Error processing file {:?}: {}", path, e));
                    self.stats.fail_file();
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("Complete".green().to_string());

        if !self.config.quiet {
            self.stats.print_summary();
        }

        Ok(())
    }

    /// Collect `.txt` files at the top level of the input directory, in the
    /// order the directory listing provides them.
    fn collect_files(&self) -> anyhow::Result<Vec<(PathBuf, u64)>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.config.input_dir)
            .min_depth(1)
            .max_depth(1);

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            // Literal, case-sensitive suffix match on the file name.
            let is_txt = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".txt"));

            if is_txt {
                let size = fs::metadata(path)?.len();
                files.push((path.to_path_buf(), size));
                self.stats.add_file(size);
            }
        }

        Ok(files)
    }

    /// Run the pipeline for one file and write its result file.
    fn process_file(&self, path: &Path, writer: &ResultWriter) -> Result<PathBuf, BatchError> {
        log::info!("Processing file: {:?}", path);

        if !path.is_file() {
            return Err(BatchError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| BatchError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            log::warn!("File is empty: {:?}", path);
            if !self.config.quiet {
                print_warning(&format!("File is empty: {:?}", path));
            }
        }

        let extraction = self.extractor.extract_unique(&content);
        self.record(&extraction);

        let listed = extraction
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        log::info!("Unique values found: {}", extraction.values.len());
        log::info!("Unique values: {}", listed);

        if self.config.verbose && !self.config.quiet {
            print_bullet(&format!(
                "{:?}: {} unique values [{}]",
                path.file_name().unwrap_or_default(),
                extraction.values.len(),
                listed
            ));
        }

        writer.write(path, &extraction.values)
    }

    fn record(&self, extraction: &Extraction) {
        self.stats.add_lines(extraction.lines);
        self.stats
            .add_accepted(extraction.values.len() as u64 + extraction.duplicates);
        self.stats.add_duplicates(extraction.duplicates);
    }

    /// Get processing statistics
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }
}
