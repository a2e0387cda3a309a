use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    process::ExitCode,
};

use anyhow::Result;
use natsort_core::{AlphanumericComparator, StringSort};
use tracing::Level;
use tracing_subscriber::{Registry, filter, fmt, layer::Layer, prelude::*};

fn main() -> Result<ExitCode> {
    let args = natsort_cli::parse();

    let var = args
        .log_level
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::var("NATSORT_LOG").unwrap_or_default());
    let log_level = match var.to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        #[cfg(debug_assertions)]
        _ => Level::TRACE,
        #[cfg(not(debug_assertions))]
        _ => Level::WARN,
    };

    let subscriber = Registry::default().with(
        fmt::layer()
            .compact()
            .without_time()
            .with_ansi(true)
            .with_writer(io::stderr)
            .with_filter(filter::LevelFilter::from_level(log_level)),
    );
    tracing::subscriber::set_global_default(subscriber).unwrap();
    tracing_log::LogTracer::init().unwrap();

    let comparator = match &args.locale {
        Some(tag) => match AlphanumericComparator::with_locale_str(tag) {
            Ok(comparator) => comparator,
            Err(err) => {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
        },
        None => AlphanumericComparator::new(),
    };

    let mut input = String::new();
    if args.files.is_empty() {
        io::stdin().lock().read_to_string(&mut input)?;
    } else {
        for path in &args.files {
            match fs::read_to_string(path) {
                Ok(text) => {
                    input.push_str(&text);
                    if !input.ends_with('\n') {
                        input.push('\n');
                    }
                }
                Err(err) => {
                    eprintln!("{}: {err}", path.to_string_lossy());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    let mut lines: Vec<&str> = input.lines().collect();
    tracing::debug!("sorting {} lines", lines.len());
    lines.string_sort(|lhs, rhs| comparator.compare(lhs, rhs));

    if args.reverse {
        lines.reverse();
    }
    if args.unique {
        lines.dedup();
    }

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);
    for line in &lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    Ok(ExitCode::SUCCESS)
}
