use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
};

use clap::Parser;
use mathline::batch;

/// mathline analyzes a file of arithmetic expressions, one per line, and
/// writes every line back annotated with its value or with the reason it
/// could not be evaluated.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input file, containing one expression per line.
    #[arg(default_value = "input.txt")]
    input: String,

    /// Where to write the annotated result lines.
    #[arg(short, long, default_value = "output.txt")]
    output: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error reading/writing file: {e}");
        std::process::exit(1);
    }
}

/// Opens the input and output files, runs the batch, and reports
/// completion. Both files are released on every exit path; the writer is
/// flushed before the status line is printed.
fn run(args: &Args) -> io::Result<()> {
    let reader = BufReader::new(File::open(&args.input)?);
    let mut writer = BufWriter::new(File::create(&args.output)?);

    batch::process(reader, &mut writer)?;
    writer.flush()?;

    println!("{} created", args.output);
    Ok(())
}
