use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use colored::Colorize;
use slog::{debug, info, Logger};

use crate::errors::FilterError;
use crate::filter::RcFilter;
use crate::samples::{SampleReader, SampleWriter};
use crate::utils;

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub samples: usize,
    /// Input lines consumed, blank ones included.
    pub lines: usize,
}

/// Filters `input_path` into `output_path` and returns the process exit status.
/// Failures are reported on stdout and logged.
pub fn run(input_path: &Path, output_path: &Path) -> i32 {
    let logger = utils::get_logger();
    let result = filter_file(&logger, input_path, output_path);
    if let Err(e) = &result {
        println!("{}", e.to_string().yellow());
        utils::error_context(&logger, "filter run failed", e);
    }
    exit_status(&result)
}

pub fn exit_status(result: &Result<RunSummary, FilterError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_status(),
    }
}

/// Opens both files and streams every input sample through one fresh filter.
pub fn filter_file(
    logger: &Logger,
    input_path: &Path,
    output_path: &Path,
) -> Result<RunSummary, FilterError> {
    debug!(logger, "starting filter run";
        "input" => input_path.display().to_string(),
        "output" => output_path.display().to_string());

    let input = open_input(logger, input_path)?;
    let output = File::create(output_path).map_err(|e| FilterError::OutputOpen {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let summary = filter_stream(BufReader::new(input), output)?;
    info!(logger, "filtered samples"; "count" => summary.samples, "lines" => summary.lines);
    Ok(summary)
}

/// Opens `input_path` for reading; a directory counts as missing.
fn open_input(logger: &Logger, input_path: &Path) -> Result<File, FilterError> {
    let not_found = || FilterError::InputNotFound { path: input_path.display().to_string() };
    let input = File::open(input_path).map_err(|e| {
        debug!(logger, "cannot open input"; "error" => e.to_string());
        not_found()
    })?;
    match input.metadata() {
        Ok(meta) if !meta.is_dir() => Ok(input),
        Ok(_) => {
            debug!(logger, "input is a directory");
            Err(not_found())
        }
        Err(e) => {
            debug!(logger, "cannot stat input"; "error" => e.to_string());
            Err(not_found())
        }
    }
}

/// Streams samples from `reader` through an `RcFilter` into `writer`.
pub fn filter_stream<R: BufRead, W: Write>(reader: R, writer: W) -> Result<RunSummary, FilterError> {
    let mut filter = RcFilter::new();
    let mut out = SampleWriter::new(writer);
    let mut source = SampleReader::new(reader);
    for sample in source.by_ref() {
        let vin = match sample {
            Ok(v) => v,
            Err(e) => {
                // keep what was already filtered
                out.finish()?;
                return Err(e);
            }
        };
        out.write_sample(filter.process(vin))?;
    }
    let summary = RunSummary { samples: out.written(), lines: source.line() };
    out.finish()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    use tempfile::tempdir;

    fn filter_text(text: &str) -> (Result<RunSummary, FilterError>, String) {
        let mut out = Vec::new();
        let result = filter_stream(Cursor::new(text.as_bytes()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn quiet() -> Logger {
        Logger::root(slog::Discard, slog::o!())
    }

    #[test]
    fn test_single_sample() {
        let (result, out) = filter_text("1.0\n");
        assert_eq!(result.unwrap().samples, 1);
        assert_eq!(out, "0.070000\n");
    }

    #[test]
    fn test_two_samples() {
        let (result, out) = filter_text("1.0\n1.0\n");
        assert_eq!(result.unwrap().samples, 2);
        assert_eq!(out, "0.070000\n0.135100\n");
    }

    #[test]
    fn test_zeros() {
        let (result, out) = filter_text("0 0 0\n0\n0.0\n");
        assert_eq!(result.unwrap().samples, 5);
        assert_eq!(out, "0.000000\n".repeat(5));
    }

    #[test]
    fn test_counts_lines_read() {
        let (result, _) = filter_text("1.0\n\n2.0 3.0\n");
        assert_eq!(result.unwrap(), RunSummary { samples: 3, lines: 3 });
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        // no spurious trailing line for an empty or newline-only file
        let (result, out) = filter_text("");
        assert_eq!(result.unwrap().samples, 0);
        assert!(out.is_empty());

        let (result, out) = filter_text("\n");
        assert_eq!(result.unwrap().samples, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_malformed_token_keeps_prefix() {
        let (result, out) = filter_text("1.0\noops\n1.0\n");
        assert!(matches!(
            result,
            Err(FilterError::MalformedToken { ref token, line: 2 }) if token == "oops"
        ));
        assert_eq!(out, "0.070000\n");
    }

    #[test]
    fn test_filter_file_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "1.0 1.0\n").unwrap();
        fs::write(&output, "stale contents that must be truncated\n").unwrap();

        let summary = filter_file(&quiet(), &input, &output).unwrap();
        assert_eq!(summary, RunSummary { samples: 2, lines: 1 });
        assert_eq!(fs::read_to_string(&output).unwrap(), "0.070000\n0.135100\n");
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nope.txt");
        let output = dir.path().join("out.txt");

        let result = filter_file(&quiet(), &input, &output);
        assert_eq!(exit_status(&result), 255);
        let err = result.unwrap_err();
        assert!(matches!(err, FilterError::InputNotFound { .. }));
        assert!(err.to_string().contains("nope.txt"));
        assert!(!output.exists());
    }

    #[test]
    fn test_directory_input_leaves_output_alone() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("samples_dir");
        fs::create_dir(&input).unwrap();
        let output = dir.path().join("out.txt");

        let result = filter_file(&quiet(), &input, &output);
        assert_eq!(exit_status(&result), 255);
        let err = result.unwrap_err();
        assert!(matches!(err, FilterError::InputNotFound { .. }));
        assert!(err.to_string().contains("samples_dir"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "1.0\n").unwrap();
        let output = dir.path().join("no_such_dir").join("out.txt");

        let result = filter_file(&quiet(), &input, &output);
        assert_eq!(exit_status(&result), 255);
        assert!(matches!(result, Err(FilterError::OutputOpen { .. })));
    }
}
