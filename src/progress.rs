//! Progress display module
//!
//! Provides styled console output, the batch progress bar and run statistics.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════╗
║                                                                  ║
║   ██╗   ██╗███╗   ██╗██╗ ██████╗ ██╗███╗   ██╗████████╗          ║
║   ██║   ██║████╗  ██║██║██╔═══██╗██║████╗  ██║╚══██╔══╝          ║
║   ██║   ██║██╔██╗ ██║██║██║   ██║██║██╔██╗ ██║   ██║             ║
║   ██║   ██║██║╚██╗██║██║██║▄▄ ██║██║██║╚██╗██║   ██║             ║
║   ╚██████╔╝██║ ╚████║██║╚██████╔╝██║██║ ╚████║   ██║             ║
║    ╚═════╝ ╚═╝  ╚═══╝╚═╝ ╚══▀▀═╝ ╚═╝╚═╝  ╚═══╝   ╚═╝             ║
║                                                                  ║
║                   Batch Integer Deduplicator                     ║
║                                                  v1.0.0          ║
╚══════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled progress bar over a file count
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Batch run statistics
#[derive(Debug)]
pub struct ProcessingStats {
    pub total_files: AtomicU64,
    pub processed_files: AtomicU64,
    pub failed_files: AtomicU64,
    pub total_bytes: AtomicU64,
    pub total_lines: AtomicU64,
    pub accepted_values: AtomicU64,
    pub duplicate_values: AtomicU64,
    pub start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            total_files: AtomicU64::new(0),
            processed_files: AtomicU64::new(0),
            failed_files: AtomicU64::new(0),
            total_bytes: AtomicU64::new(0),
            total_lines: AtomicU64::new(0),
            accepted_values: AtomicU64::new(0),
            duplicate_values: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_file(&self, size: u64) {
        self.total_files.fetch_add(1, Ordering::Relaxed);
        self.total_bytes.fetch_add(size, Ordering::Relaxed);
    }

    pub fn complete_file(&self) {
        self.processed_files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fail_file(&self) {
        self.failed_files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_lines(&self, count: u64) {
        self.total_lines.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_accepted(&self, count: u64) {
        self.accepted_values.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_duplicates(&self, count: u64) {
        self.duplicate_values.fetch_add(count, Ordering::Relaxed);
    }

    pub fn get_total_files(&self) -> u64 {
        self.total_files.load(Ordering::Relaxed)
    }

    pub fn get_processed_files(&self) -> u64 {
        self.processed_files.load(Ordering::Relaxed)
    }

    pub fn get_failed_files(&self) -> u64 {
        self.failed_files.load(Ordering::Relaxed)
    }

    pub fn get_total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    pub fn get_total_lines(&self) -> u64 {
        self.total_lines.load(Ordering::Relaxed)
    }

    pub fn get_accepted_values(&self) -> u64 {
        self.accepted_values.load(Ordering::Relaxed)
    }

    pub fn get_duplicate_values(&self) -> u64 {
        self.duplicate_values.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let accepted = self.get_accepted_values();
        let duplicates = self.get_duplicate_values();
        let unique = accepted.saturating_sub(duplicates);
        let failed = self.get_failed_files();

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    PROCESSING COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Files processed:".green(),
            format!("{}/{}", self.get_processed_files(), self.get_total_files()));
        println!("  {} {}", "Data processed: ".green(),
            ByteSize(self.get_total_bytes()));
        println!();

        println!("  {} {}", "Total lines:    ".green(),
            format_number(self.get_total_lines()));
        println!("  {} {}", "Accepted values:".green(),
            format_number(accepted));
        println!("  {} {}", "Duplicates:     ".yellow(),
            format_number(duplicates));
        println!("  {} {}", "Unique output:  ".green().bold(),
            format_number(unique).green().bold());

        if failed > 0 {
            println!("  {} {}", "Failed files:   ".red(),
                format_number(failed).red());
        }

        println!();
        println!("  {} {:?}", "Duration:       ".green(), self.elapsed());
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
