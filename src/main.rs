/*!
 * Command-line interface for codedump
 */

use std::process;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use codedump::assemble::{write_dump_file, Dumper};
use codedump::clipboard;
use codedump::config::{Args, Config};
use codedump::utils::{count_files, format_file_size};

fn main() {
    let args = Args::parse();
    let config = Config::from_args(args);

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> codedump::Result<()> {
    config.validate()?;

    let dumper = Dumper::new(config.clone());

    if config.split {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress.set_message(format!(
            "Splitting {} files from {}",
            count_files(&config.target_dir),
            config.target_dir.display()
        ));

        let report = dumper.split()?;
        progress.finish_and_clear();

        for failure in &report.failures {
            eprintln!(
                "Failed to write {}: {}",
                failure.dest.display(),
                failure.error
            );
        }
        println!(
            "\nAll files have been split into '{}/'. {} files written ({}).",
            config.output_dir.display(),
            report.written,
            format_file_size(report.bytes_written)
        );
    } else {
        let output = dumper.concatenate()?;
        println!("{}", output);

        if config.save && !config.list_only {
            match write_dump_file(&config.output_dir, &output) {
                Ok(path) => eprintln!("\nDump saved to '{}'.", path.display()),
                Err(e) => eprintln!("\nWarning: failed to save dump file: {}", e),
            }
        }

        if config.clip {
            match clipboard::copy(&output) {
                Ok(()) => eprintln!("\nOutput copied to clipboard."),
                Err(e) => eprintln!("\nWarning: clipboard copy failed: {}", e),
            }
        }
    }

    Ok(())
}
