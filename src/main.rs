//! Randomized sort demonstration CLI
//!
//! Sorts its operands (or a built-in sample when none are given) by
//! shuffling until they happen to be ordered, giving up once the shuffle
//! budget runs out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

use clap::{Arg, Command};

// Import from the library modules
use random_sort::{
    config::{SortConfig, SortConfigBuilder},
    error::{SortError, SortResult},
    sort, EXIT_SUCCESS,
};

/// Fixed sample sorted when no operands are given
const DEMO_SAMPLE: &[i64] = &[3, 1, 2];

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            if matches!(e, SortError::ShuffleBudgetExceeded { .. }) {
                // Budget exhaustion is the algorithm's documented failure
                // mode; report it on stdout rather than crashing.
                println!("Sorting failed: {e}");
            } else {
                eprintln!("randsort: {e}");
            }
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;

    let values: Vec<String> = matches
        .get_many::<String>("values")
        .unwrap_or_default()
        .cloned()
        .collect();

    if values.is_empty() {
        let result = sort(&config, DEMO_SAMPLE)?;
        println!("Sorted output: {result:?}");
        return Ok(EXIT_SUCCESS);
    }

    let sorted = if config.numeric {
        let numbers = parse_numeric_values(&values)?;
        let sorted = sort(&config, &numbers)?;
        sorted.iter().map(|n| n.to_string()).collect()
    } else {
        sort(&config, &values)?
    };

    write_output(&config, &sorted)?;
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("randsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("randsort [OPTION]... [VALUE]...")
        .about("Sort values by shuffling them until they are ordered")
        .long_about(
            "Sort values by repeatedly producing random permutations until one is in \
             non-decreasing order.\n\nThis is a bogosort: expected cost is factorial in the \
             number of distinct values, so only very small inputs sort within a realistic \
             budget. With no VALUE operands the built-in sample [3, 1, 2] is sorted.",
        )
        .arg(
            Arg::new("values")
                .help("Values to sort (omit to sort the built-in sample)")
                .num_args(0..)
                .value_name("VALUE"),
        )
        .arg(
            Arg::new("numeric-sort")
                .short('n')
                .long("numeric-sort")
                .help("Compare according to string numerical value")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-attempts")
                .short('a')
                .long("max-attempts")
                .help("Give up after N random shuffles (default 10000)")
                .value_name("N"),
        )
        .arg(
            Arg::new("random-seed")
                .long("random-seed")
                .help("Seed the shuffle generator for reproducible runs")
                .value_name("SEED"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Report shuffle accounting to stderr")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new();

    if matches.get_flag("numeric-sort") {
        builder = builder.numeric();
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }

    if let Some(attempts_str) = matches.get_one::<String>("max-attempts") {
        let attempts: usize = attempts_str.parse().map_err(|_| {
            SortError::invalid_budget(&format!("invalid attempt count: {attempts_str}"))
        })?;
        builder = builder.max_attempts(attempts);
    }

    if let Some(seed_str) = matches.get_one::<String>("random-seed") {
        let seed: u64 = seed_str
            .parse()
            .map_err(|_| SortError::invalid_value(seed_str))?;
        builder = builder.seed(seed);
    }

    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output_file(output.clone());
    }

    builder.build()
}

/// Parse operands as signed integers for numeric mode
fn parse_numeric_values(values: &[String]) -> SortResult<Vec<i64>> {
    values
        .iter()
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| SortError::invalid_value(value))
        })
        .collect()
}

/// Write sorted output to the configured destination
fn write_output(config: &SortConfig, lines: &[String]) -> SortResult<()> {
    let mut output: Box<dyn Write> = if let Some(output_file) = &config.output_file {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    };

    for line in lines {
        writeln!(output, "{line}")?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_config() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["randsort", "-n", "-a", "500"])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert!(config.numeric);
        assert_eq!(config.max_attempts, 500);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_parse_seed_and_output() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["randsort", "--random-seed", "42", "-o", "out.txt", "3", "1"])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output_file, Some("out.txt".to_string()));
        assert!(!config.writing_to_stdout());

        let values: Vec<&String> = matches
            .get_many::<String>("values")
            .expect("Expected value operands")
            .collect();
        assert_eq!(values, ["3", "1"]);
    }

    #[test]
    fn test_rejects_invalid_attempt_count() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["randsort", "-a", "lots"])
            .expect("Failed to parse test arguments");

        let result = parse_config_from_matches(&matches);
        assert!(matches!(result, Err(SortError::InvalidBudget { .. })));
    }

    #[test]
    fn test_parse_numeric_values() {
        let values = vec!["3".to_string(), " -1".to_string(), "2".to_string()];
        let numbers = parse_numeric_values(&values).expect("Failed to parse numeric operands");
        assert_eq!(numbers, vec![3, -1, 2]);

        let bad = vec!["7".to_string(), "pear".to_string()];
        assert!(matches!(
            parse_numeric_values(&bad),
            Err(SortError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_demo_sample_sorts_within_default_budget() {
        let config = SortConfig::default().with_seed(Some(1));
        let result = sort(&config, DEMO_SAMPLE).expect("Demo sample must sort within budget");
        assert_eq!(result, vec![1, 2, 3]);
    }
}
