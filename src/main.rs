use std::{
    fs::{read_to_string, File},
    io::{BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use lava::{display_error, lexer::lexer::Lexer};

/// Writes the token stream of a lava source file, one token per line.
#[derive(Parser, Debug)]
#[command(name = "lava", version, about)]
struct Args {
    /// Source file to tokenize.
    input: PathBuf,

    /// Where to write the tokens. Defaults to the input path with `--extension`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extension of the default output file.
    #[arg(long, default_value = "token")]
    extension: String,

    /// Do not print the output path when done.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.to_string_lossy().into_owned());

    let source = read_to_string(&args.input)
        .with_context(|| format!("could not read {}", args.input.display()))?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(&args.extension));
    let output = File::create(&output_path)
        .with_context(|| format!("could not create {}", output_path.display()))?;
    let mut output = BufWriter::new(output);

    let start = Instant::now();
    let mut token_count = 0;
    let mut error_count = 0;

    for result in Lexer::new(&source, Some(file_name)) {
        match result {
            Ok(token) => {
                writeln!(output, "{}", token)?;
                token_count += 1;
            }
            Err(error) => {
                display_error(&error, &source);
                error_count += 1;
            }
        }
    }

    output
        .flush()
        .with_context(|| format!("could not write {}", output_path.display()))?;

    log::info!(
        "tokenized {} tokens ({} errors) in {:?}",
        token_count,
        error_count,
        start.elapsed()
    );

    if !args.quiet {
        println!("Token file written: {}", output_path.display());
    }

    Ok(())
}
