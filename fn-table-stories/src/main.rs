use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use log::error;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> ExitCode {
    let level = if env::var_os("FN_TABLE_DEBUG").is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = WriteLogger::init(level, Config::default(), std::io::stderr()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let out_dir = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("stories-out"));

    match fn_table_stories::write_stories(&out_dir) {
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
