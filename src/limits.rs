//! Range checks for command parameters with restricted domains.
//!
//! Pure functions: they either return `Ok(())` or fail with
//! [`SmaractError::InvalidArgument`] naming the offending value and the
//! accepted domain. They run before a command string is ever built, so a
//! rejected value never reaches the transport.

use crate::error::{SmaractError, SmaractResult};

/// Number of logical trigger indices.
pub const TRIGGER_INDEX_COUNT: i64 = 256;

/// Internal code for trigger index 0; logical indices 0..=255 map onto
/// codes 1792..=2047.
pub const TRIGGER_CODE_BASE: i64 = 1792;

/// Baud rates accepted by the RS-232 interface.
pub const BAUD_RATES: [u32; 5] = [9_600, 19_200, 38_400, 57_600, 115_200];

/// Check that a trigger index is one of the 256 logical slots.
pub fn check_trigger_index(index: i64) -> SmaractResult<()> {
    if (0..TRIGGER_INDEX_COUNT).contains(&index) {
        Ok(())
    } else {
        Err(SmaractError::InvalidArgument(format!(
            "trigger index {index} outside accepted range 0..=255"
        )))
    }
}

/// Check that a baud rate is in the accepted RS-232 set.
pub fn check_baud_rate(rate: u32) -> SmaractResult<()> {
    if BAUD_RATES.contains(&rate) {
        Ok(())
    } else {
        Err(SmaractError::InvalidArgument(format!(
            "baud rate {rate} not in accepted set {BAUD_RATES:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_index_bounds() {
        assert!(check_trigger_index(0).is_ok());
        assert!(check_trigger_index(255).is_ok());
        assert!(matches!(
            check_trigger_index(-1),
            Err(SmaractError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_trigger_index(256),
            Err(SmaractError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_baud_rates() {
        for rate in BAUD_RATES {
            assert!(check_baud_rate(rate).is_ok());
        }
        assert!(matches!(
            check_baud_rate(0),
            Err(SmaractError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_baud_rate(12_345),
            Err(SmaractError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validation_message_names_value_and_domain() {
        let err = check_trigger_index(300).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("0..=255"));
    }
}
