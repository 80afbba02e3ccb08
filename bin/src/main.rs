use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
};

use clap::Parser;

use glox::{run, Options, RunError};

#[derive(clap::Parser)]
#[command(about = "Parse an expression and print its syntax tree")]
struct Args {
    /// Script to parse. Starts an interactive prompt when omitted.
    file: Option<PathBuf>,

    /// Print the scanned tokens before the tree.
    #[arg(long)]
    tokens: bool,
}

fn run_file(path: PathBuf, options: Options) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)?;
    run(&source, &mut stdout(), options)?;
    Ok(())
}

fn run_prompt(options: Options) -> anyhow::Result<()> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match run(&line, &mut stdout(), options) {
            Ok(()) => (),
            Err(RunError::Diagnostics(e)) => eprintln!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = Options { dump_tokens: args.tokens };

    match args.file {
        Some(file) => run_file(file, options),
        None => run_prompt(options),
    }
}
