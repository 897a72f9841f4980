//! Command-line argument handling.

use aurus_steering::SteeringInput;
use thiserror::Error;

/// Number of positional arguments: track width, wheelbase, front and rear angle.
pub const ARG_COUNT: usize = 4;

const BIN: &str = env!("CARGO_BIN_NAME");

/// Errors raised while reading the command line. Both are terminal.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    /// Wrong number of positional arguments. Displays the usage message.
    #[error(
        "Usage: {bin} <track_width_x> <wheelbase_y> <front_steer_deg> <rear_steer_deg>\nExample: {bin} 1.6 2.8 15.0 -5.0",
        bin = BIN
    )]
    Count(usize),
    /// An argument is not a floating-point number.
    #[error("All arguments must be numbers.")]
    Parse {
        /// The offending argument.
        argument: String,
    },
}

impl ArgumentError {
    /// Process exit status for this error. Every argument error exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Parse the positional arguments (program name excluded) into a steering input.
///
/// # Errors
///
/// Returns `ArgumentError::Count` unless exactly four arguments are given, and
/// `ArgumentError::Parse` for the first one that is not a number.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<SteeringInput, ArgumentError> {
    let [track_width, wheelbase, front, rear] = args else {
        return Err(ArgumentError::Count(args.len()));
    };

    Ok(SteeringInput::new(
        parse_number(track_width.as_ref())?,
        parse_number(wheelbase.as_ref())?,
        parse_number(front.as_ref())?,
        parse_number(rear.as_ref())?,
    ))
}

fn parse_number(arg: &str) -> Result<f64, ArgumentError> {
    arg.trim().parse::<f64>().map_err(|_| ArgumentError::Parse {
        argument: arg.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_numbers() {
        let input = parse_args(&["1.6", "2.8", "15.0", "-5.0"]).unwrap();
        assert_eq!(input, SteeringInput::new(1.6, 2.8, 15.0, -5.0));
    }

    #[test]
    fn test_parse_integers_and_exponents() {
        let input = parse_args(&["2", "3e0", " 20 ", "-0"]).unwrap();
        assert_eq!(input, SteeringInput::new(2.0, 3.0, 20.0, 0.0));
    }

    #[test]
    fn test_wrong_count() {
        assert_eq!(parse_args(&["1.6", "2.8", "15.0"]), Err(ArgumentError::Count(3)));
        assert_eq!(
            parse_args(&["1.6", "2.8", "15.0", "-5.0", "1"]),
            Err(ArgumentError::Count(5))
        );
        assert_eq!(parse_args::<&str>(&[]), Err(ArgumentError::Count(0)));
    }

    #[test]
    fn test_non_numeric() {
        let err = parse_args(&["1.6", "abc", "15.0", "-5.0"]).unwrap_err();
        assert_eq!(err, ArgumentError::Parse { argument: "abc".into() });
        assert_eq!(err.to_string(), "All arguments must be numbers.");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_count_checked_before_parse() {
        assert_eq!(parse_args(&["abc"]), Err(ArgumentError::Count(1)));
    }

    #[test]
    fn test_usage_message() {
        let err = ArgumentError::Count(3);
        let message = err.to_string();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Usage: "));
        assert!(lines[0].ends_with("<track_width_x> <wheelbase_y> <front_steer_deg> <rear_steer_deg>"));
        assert!(lines[1].starts_with("Example: "));
        assert!(lines[1].ends_with("1.6 2.8 15.0 -5.0"));
        assert_eq!(err.exit_code(), 1);
    }
}
