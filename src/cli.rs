// src/cli.rs
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use crate::config::options::{CliOptions, ExportFormat, RunSource};
use crate::{csv, runner, store};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = CliOptions::default();
    parse_cli(&mut opts)?;

    let (echo, data) = match &opts.source {
        RunSource::Cached(case) => store::load_run(case)?,
        RunSource::Remote => {
            let overrides: Vec<(&str, &str)> = opts
                .overrides
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            runner::run(&overrides, opts.case_name.as_deref())?
        }
    };

    if opts.print_echo {
        println!("{echo}");
    }

    match &opts.out {
        Some(path) => {
            let file = File::create(path)?;
            let mut out = BufWriter::new(file);
            csv::write_dataset(&mut out, &data, opts.format)?;
            out.flush()?;
            eprintln!("Wrote {} rows to {}", data.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            csv::write_dataset(stdout.lock(), &data, opts.format)?;
        }
    }

    Ok(())
}

fn parse_cli(opts: &mut CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--set" => {
                let v = args.next().ok_or("Missing value for --set")?;
                let (key, val) = v
                    .split_once('=')
                    .ok_or_else(|| format!("Expected KEY=VALUE, got: {}", v))?;
                opts.overrides
                    .push((key.trim().to_string(), val.trim().to_string()));
            }
            "-c" | "--case" => {
                opts.case_name = Some(args.next().ok_or("Missing case name for --case")?);
            }
            "-l" | "--load" => {
                let case = args.next().ok_or("Missing case name for --load")?;
                opts.source = RunSource::Cached(case);
            }
            "-o" | "--out" => {
                opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--echo" => opts.print_echo = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if matches!(opts.source, RunSource::Cached(_)) {
        if opts.case_name.is_some() {
            return Err("--load and --case are mutually exclusive".into());
        }
        if !opts.overrides.is_empty() {
            return Err("--set has no effect with --load".into());
        }
    }

    Ok(())
}
