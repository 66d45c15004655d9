//! Ordered parameter input.
//!
//! The legacy input contract is a flat, order-sensitive, whitespace
//! delimited sequence of numbers on standard input. Three parameterisations
//! exist:
//!
//! - `rates`: `r1 r2 p trials tag`, resetting rates taken directly
//! - `sqrt-rates`: `g1 g2 p trials tag`, the rates are `g1²` and `g2²`;
//!   the squaring happens here, never in the engine
//! - `none`: `p trials tag`, no rates; the process is the single-sided
//!   optimal protocol (instant-reset wall below the origin, target on the
//!   freely diffusing side). The probability only labels the output
//!   destination.
//!
//! All remaining physical constants (diffusion constant, target distance,
//! time step) keep their reference-study defaults.

use std::io::BufRead;

use passage_core::types::SimulationParameters;

use crate::{CliError, Result};

/// How the leading rate fields of the input are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateParameterisation {
    /// Rates given directly.
    Raw,
    /// Square roots of the rates given; squared on ingestion.
    SquareRoot,
    /// No rate fields; single-sided zero-resetting process.
    ZeroReset,
}

impl RateParameterisation {
    /// Parses the `--parameterisation` flag value.
    pub fn from_flag(flag: &str) -> Result<Self> {
        match flag {
            "rates" => Ok(Self::Raw),
            "sqrt-rates" => Ok(Self::SquareRoot),
            "none" => Ok(Self::ZeroReset),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown parameterisation: {}. Supported: rates, sqrt-rates, none",
                other
            ))),
        }
    }
}

/// A fully assembled legacy input record.
#[derive(Clone, Debug, PartialEq)]
pub struct LegacyInput {
    /// Validated physical parameters.
    pub parameters: SimulationParameters,
    /// Number of trials to run.
    pub trial_count: usize,
    /// Numeric tag for the output file name.
    pub file_tag: u32,
    /// Probability used for output-path labelling.
    ///
    /// Equal to the simulated target probability except under
    /// [`RateParameterisation::ZeroReset`], where the simulated process is
    /// single-sided and the parsed value labels the destination only.
    pub probability_label: f64,
}

/// Reads one ordered parameter record from `reader`.
///
/// Tokens may span multiple lines; any whitespace separates fields.
pub fn read_legacy<R: BufRead>(reader: R, scheme: RateParameterisation) -> Result<LegacyInput> {
    let mut tokens = Tokens::new(reader);

    let (parameters, probability_label) = match scheme {
        RateParameterisation::Raw => {
            let r1: f64 = tokens.next_value("reset_rate_positive")?;
            let r2: f64 = tokens.next_value("reset_rate_negative")?;
            let p: f64 = tokens.next_value("target_probability")?;
            (SimulationParameters::with_rates(r1, r2, p), p)
        }
        RateParameterisation::SquareRoot => {
            let g1: f64 = tokens.next_value("sqrt_reset_rate_positive")?;
            let g2: f64 = tokens.next_value("sqrt_reset_rate_negative")?;
            let p: f64 = tokens.next_value("target_probability")?;
            (SimulationParameters::with_rates(g1 * g1, g2 * g2, p), p)
        }
        RateParameterisation::ZeroReset => {
            let p: f64 = tokens.next_value("target_probability")?;
            // The simulated process is the relabelled optimal protocol:
            // target on the freely diffusing side, hard wall on the other.
            (SimulationParameters::single_sided(1.0), p)
        }
    };

    let trial_count: usize = tokens.next_value("trial_count")?;
    let file_tag: u32 = tokens.next_value("file_tag")?;

    parameters.validate()?;

    Ok(LegacyInput {
        parameters,
        trial_count,
        file_tag,
        probability_label,
    })
}

/// Whitespace tokenizer over a buffered reader.
struct Tokens<R: BufRead> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if !self.pending.is_empty() {
                return Ok(Some(self.pending.remove(0)));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_value<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or(CliError::MissingParameter(field))?;
        token.parse().map_err(|_| CliError::MalformedNumber {
            field,
            value: token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_core::types::NegativeBoundary;
    use std::io::Cursor;

    #[test]
    fn test_raw_rates() {
        let input = Cursor::new("2.0 0.5 0.25 1000 7\n");
        let legacy = read_legacy(input, RateParameterisation::Raw).unwrap();

        assert_eq!(legacy.parameters.reset_rate_positive, 2.0);
        assert_eq!(legacy.parameters.reset_rate_negative, 0.5);
        assert_eq!(legacy.parameters.target_probability, 0.25);
        assert_eq!(legacy.trial_count, 1000);
        assert_eq!(legacy.file_tag, 7);
        assert_eq!(legacy.probability_label, 0.25);
    }

    #[test]
    fn test_sqrt_rates_are_squared() {
        let input = Cursor::new("3.0 0.5 0.5 10 1\n");
        let legacy = read_legacy(input, RateParameterisation::SquareRoot).unwrap();

        assert_eq!(legacy.parameters.reset_rate_positive, 9.0);
        assert_eq!(legacy.parameters.reset_rate_negative, 0.25);
    }

    #[test]
    fn test_zero_reset_is_single_sided() {
        let input = Cursor::new("0.0 500 3\n");
        let legacy = read_legacy(input, RateParameterisation::ZeroReset).unwrap();

        assert_eq!(legacy.parameters.reset_rate_positive, 0.0);
        assert_eq!(legacy.parameters.reset_rate_negative, 0.0);
        assert_eq!(
            legacy.parameters.negative_boundary,
            NegativeBoundary::InstantReset
        );
        assert_eq!(legacy.parameters.target_probability, 1.0);
        assert_eq!(legacy.probability_label, 0.0);
        assert_eq!(legacy.trial_count, 500);
    }

    #[test]
    fn test_tokens_span_lines() {
        let input = Cursor::new("1.0\n2.0 0.5\n1000\n4\n");
        let legacy = read_legacy(input, RateParameterisation::Raw).unwrap();
        assert_eq!(legacy.parameters.reset_rate_negative, 2.0);
        assert_eq!(legacy.file_tag, 4);
    }

    #[test]
    fn test_missing_parameter() {
        let input = Cursor::new("1.0 2.0\n");
        let err = read_legacy(input, RateParameterisation::Raw).unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingParameter("target_probability")
        ));
    }

    #[test]
    fn test_malformed_number() {
        let input = Cursor::new("1.0 abc 0.5 10 1\n");
        let err = read_legacy(input, RateParameterisation::Raw).unwrap_err();
        assert!(matches!(
            err,
            CliError::MalformedNumber {
                field: "reset_rate_negative",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let input = Cursor::new("1.0 2.0 1.5 10 1\n");
        let err = read_legacy(input, RateParameterisation::Raw).unwrap_err();
        assert!(matches!(err, CliError::Parameters(_)));
    }

    #[test]
    fn test_parameterisation_flags() {
        assert_eq!(
            RateParameterisation::from_flag("rates").unwrap(),
            RateParameterisation::Raw
        );
        assert_eq!(
            RateParameterisation::from_flag("sqrt-rates").unwrap(),
            RateParameterisation::SquareRoot
        );
        assert_eq!(
            RateParameterisation::from_flag("none").unwrap(),
            RateParameterisation::ZeroReset
        );
        assert!(RateParameterisation::from_flag("gamma").is_err());
    }
}
