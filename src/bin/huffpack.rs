use std::path::Path;
use std::process::ExitCode;

use huffpack::{compress_file, decompress_file, FileConfig};
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str = "usage: huffpack <compress|decompress> <file> [-v|--verbose] [--keep-whitespace]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let keep_whitespace = args.iter().any(|a| a == "--keep-whitespace");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .map(|a| a.as_str())
        .collect();

    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .with_target(verbose)
        .init();

    let config = FileConfig::default().with_trim_trailing_whitespace(!keep_whitespace);

    let result = match positional.as_slice() {
        ["compress", path] => compress_file(Path::new(path), &config).map(|report| {
            println!("Compressed");
            println!(
                "{} ({} -> {} bytes), codebook {}",
                report.compressed_path.display(),
                report.input_bytes,
                report.output_bytes,
                report.codebook_path.display()
            );
        }),
        ["decompress", path] => decompress_file(Path::new(path), &config).map(|output| {
            println!("Decompressed");
            println!("{}", output.display());
        }),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("huffpack: {}", e);
            ExitCode::FAILURE
        }
    }
}
