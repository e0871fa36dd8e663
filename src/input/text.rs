//! Pasted text source: `"0.5, 1.2, -0.3, ..."`

use super::sample::parse_value;
use super::{EegSample, InputError};

/// Parse comma-separated values into an epoch.
///
/// Every token is parsed before the count is checked, so a bad token is
/// reported even when the count is also wrong.
pub fn parse_values(text: &str) -> Result<EegSample, InputError> {
    let values = text
        .split(',')
        .map(|token| parse_value(token.trim()))
        .collect::<Result<Vec<f32>, InputError>>()?;

    EegSample::new(values)
}

/// Text that carries no input at all (empty or whitespace only)
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EEG_SAMPLE_COUNT;

    fn joined(values: &[f32], sep: &str) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }

    #[test]
    fn test_accepts_whitespace_around_tokens() {
        let values: Vec<f32> = (0..EEG_SAMPLE_COUNT).map(|i| i as f32 * 0.5 - 20.0).collect();
        let text = format!("  {}\n", joined(&values, " ,\t"));

        let sample = parse_values(&text).unwrap();
        assert_eq!(sample.as_slice(), values.as_slice());
    }

    #[test]
    fn test_wrong_count() {
        let text = joined(&[0.1; 177], ", ");
        assert_eq!(parse_values(&text), Err(InputError::InvalidCount { found: 177 }));

        let text = joined(&[0.1; 179], ",");
        assert_eq!(parse_values(&text), Err(InputError::InvalidCount { found: 179 }));
    }

    #[test]
    fn test_parse_error_wins_over_count() {
        let err = parse_values("0.1, abc, 0.3").unwrap_err();
        assert_eq!(err, InputError::Parse { token: "abc".to_string() });
    }

    #[test]
    fn test_trailing_comma_is_empty_token() {
        let text = format!("{},", joined(&[1.0; EEG_SAMPLE_COUNT], ","));
        assert!(matches!(parse_values(&text), Err(InputError::Parse { token }) if token.is_empty()));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank("0"));
    }
}
