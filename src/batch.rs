use std::io::{self, BufRead, Write};

use crate::evaluate_line;

/// Line counts accumulated over one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that produced a numeric result.
    pub evaluated: usize,
    /// Lines that produced an error annotation.
    pub failed: usize,
}

/// Processes every line from `reader`, writing one annotated line to
/// `writer` per input line.
///
/// A line that evaluates is written as `<line> <value>`; a line that fails
/// is written as `<line>  //<message>`. Progress is mirrored to the
/// console: values on stdout, failures on stderr as an
/// `Error processing line:` / `Error message:` pair. Per-line errors never
/// stop the run.
///
/// # Parameters
/// - `reader`: Line-oriented input source.
/// - `writer`: Destination for the annotated lines.
///
/// # Returns
/// The number of evaluated and failed lines.
///
/// # Errors
/// Any I/O error from the reader or writer aborts the batch immediately
/// and is returned as-is; there is no per-line fallback for I/O failures.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use mathline::batch::process;
///
/// let mut output = Vec::new();
/// let summary = process(Cursor::new("1+1=\n5/0=\n"), &mut output).unwrap();
///
/// assert_eq!(summary.evaluated, 1);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "1+1= 2\n5/0=  //Arithmetic error\n");
/// ```
pub fn process<R: BufRead, W: Write>(reader: R, writer: &mut W) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for line in reader.lines() {
        let line = line?;

        match evaluate_line(&line) {
            Ok(value) => {
                println!("{line} {value}");
                writeln!(writer, "{line} {value}")?;
                summary.evaluated += 1;
            },
            Err(error) => {
                eprintln!("Error processing line: {line}");
                eprintln!("Error message: {error}");
                writeln!(writer, "{line}  //{error}")?;
                summary.failed += 1;
            },
        }
    }

    Ok(summary)
}
