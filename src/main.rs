//! scandir - Directory inventory with content hashes and extension stats.
//!
//! Usage:
//!   scandir snapshot DIR [EXT...]   Snapshot a tree, hashing matching files
//!   scandir count DIR               Count every entry under a tree
//!   scandir stats DIR               Count files per extension
//!   scandir show-stats FILE         Print a saved stats file
//!   scandir --help                  Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, bail};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use scandir_core::{DirInfo, HashAlgorithm, OutputConfig, ScanConfig, parse_extensions};
use scandir_scan::DirectoryScanner;
use scandir_store::JsonStore;

#[derive(Parser)]
#[command(
    name = "scandir",
    version,
    about = "Directory inventory with content hashes and extension stats",
    long_about = "scandir walks a directory tree and records every entry it finds.\n\n\
                  Use `snapshot` to write a JSON inventory with digests of selected \
                  files, or `stats` to count files per extension."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Snapshot a directory tree, hashing files that match the extensions
    Snapshot {
        /// Directory to scan
        dir: PathBuf,

        /// Extensions selecting files to hash (e.g. ".txt" or "txt,md")
        extensions: Vec<String>,

        /// Output file
        #[arg(short, long, default_value = "snapshot_with_hash.json")]
        output: PathBuf,

        /// Digest algorithm (sha256, blake3)
        #[arg(short, long, default_value = "sha256")]
        algorithm: HashAlgorithm,

        /// JSON indentation width
        #[arg(long, default_value = "2")]
        indent: usize,
    },

    /// Count all entries under a directory, the directory itself included
    Count {
        /// Directory to scan
        dir: PathBuf,
    },

    /// Count files per extension and save the result
    Stats {
        /// Directory to scan
        dir: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "stats.json")]
        output: PathBuf,

        /// JSON indentation width
        #[arg(long, default_value = "2")]
        indent: usize,
    },

    /// Print a stats file written by `stats`
    ShowStats {
        /// Stats file to load
        #[arg(default_value = "stats.json")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Snapshot {
            dir,
            extensions,
            output,
            algorithm,
            indent,
        } => {
            run_snapshot(&dir, &extensions, &output, algorithm, indent)?;
        }
        Command::Count { dir } => {
            run_count(&dir)?;
        }
        Command::Stats {
            dir,
            output,
            indent,
        } => {
            run_stats(&dir, &output, indent)?;
        }
        Command::ShowStats { file } => {
            run_show_stats(&file)?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Snapshot a tree and write it to JSON.
fn run_snapshot(
    dir: &Path,
    extensions: &[String],
    output: &Path,
    algorithm: HashAlgorithm,
    indent: usize,
) -> Result<()> {
    ensure_directory(dir)?;

    let extensions: Vec<String> = extensions
        .iter()
        .flat_map(|arg| parse_extensions(arg))
        .collect();
    debug!(?extensions, %algorithm, "Parsed snapshot arguments");

    let config = ScanConfig::builder()
        .root(dir)
        .extensions(extensions.clone())
        .algorithm(algorithm)
        .build()
        .context("Invalid scan configuration")?;

    eprintln!("Scanning {}...", dir.display());

    let entries = DirectoryScanner::new()
        .scan(&config)
        .context("Scan failed")?;

    JsonStore::new(OutputConfig::with_indent(indent))
        .write_entries(&entries, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let hashed = entries.iter().filter(|e| e.has_hash()).count();
    let total_size: u64 = entries.iter().filter(|e| !e.is_dir).map(|e| e.size).sum();

    println!();
    println!("{}", "─".repeat(60));
    println!(" {} - {}", dir.display(), format_size(total_size));
    println!(
        " {} entries, {} hashed ({})",
        entries.len(),
        hashed,
        if extensions.is_empty() {
            "no extensions given".to_string()
        } else {
            extensions.join(", ")
        }
    );
    println!(" Written to {}", output.display());
    println!("{}", "─".repeat(60));

    Ok(())
}

/// Count entries under a tree.
fn run_count(dir: &Path) -> Result<()> {
    ensure_directory(dir)?;

    let count = DirectoryScanner::new()
        .count(dir)
        .context("Count failed")?;

    println!("{count}");
    Ok(())
}

/// Collect extension stats and save them.
fn run_stats(dir: &Path, output: &Path, indent: usize) -> Result<()> {
    ensure_directory(dir)?;

    eprintln!("Collecting stats for {}...", dir.display());

    let stats = DirectoryScanner::new()
        .stats(dir)
        .context("Stats collection failed")?;

    JsonStore::new(OutputConfig::with_indent(indent))
        .save_stats(&stats, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_stats(&stats, &dir.display().to_string());
    println!(" Written to {}", output.display());

    Ok(())
}

/// Load a stats file and print it.
fn run_show_stats(file: &Path) -> Result<()> {
    let stats = JsonStore::default()
        .load_stats(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    print_stats(&stats, &file.display().to_string());
    Ok(())
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        bail!("No such directory: {}", dir.display());
    }
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }
    Ok(())
}

/// Print an extension table, most common first.
fn print_stats(stats: &DirInfo, title: &str) {
    println!();
    println!("{}", "─".repeat(60));
    println!(" {title}");
    println!(
        " {} files, {} extensions",
        stats.total_files,
        stats.extensions.len()
    );
    println!("{}", "─".repeat(60));

    let max = stats.by_count().first().map(|(_, count)| *count).unwrap_or(1);
    for (ext, count) in stats.by_count() {
        let label = if ext.is_empty() { "(none)" } else { ext };
        let ratio = count as f64 / max as f64;
        println!(
            "   {:<16} {:>8}  {}",
            truncate(label, 16),
            count,
            make_bar(ratio, 20)
        );
    }
    println!();
}

/// Create a simple ASCII bar.
fn make_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to a maximum number of characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_snapshot() {
        let cli = Cli::try_parse_from([
            "scandir", "snapshot", "/tmp", ".txt", "md,rs", "-a", "blake3", "--indent", "4",
        ])
        .unwrap();

        match cli.command {
            Command::Snapshot {
                dir,
                extensions,
                output,
                algorithm,
                indent,
            } => {
                assert_eq!(dir, PathBuf::from("/tmp"));
                assert_eq!(extensions, vec![".txt", "md,rs"]);
                assert_eq!(output, PathBuf::from("snapshot_with_hash.json"));
                assert_eq!(algorithm, HashAlgorithm::Blake3);
                assert_eq!(indent, 4);
            }
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["scandir", "stats", "."]).unwrap();
        match cli.command {
            Command::Stats { output, indent, .. } => {
                assert_eq!(output, PathBuf::from("stats.json"));
                assert_eq!(indent, 2);
            }
            _ => panic!("expected stats command"),
        }

        assert!(Cli::try_parse_from(["scandir", "snapshot", ".", "-a", "md5"]).is_err());
    }

    #[test]
    fn test_ensure_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(ensure_directory(temp.path()).is_ok());

        let err = ensure_directory(&file).unwrap_err();
        assert!(err.to_string().starts_with("Not a directory"));

        let err = ensure_directory(&temp.path().join("missing")).unwrap_err();
        assert!(err.to_string().starts_with("No such directory"));
    }

    #[test]
    fn test_make_bar() {
        assert_eq!(make_bar(1.0, 4), "[████]");
        assert_eq!(make_bar(0.0, 4), "[░░░░]");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(".rs", 16), ".rs");
        assert_eq!(truncate(".verylongextension", 6), ".very…");
    }
}
