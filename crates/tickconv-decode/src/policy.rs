//! Trailing-byte truncation policy.

use tickconv_types::WireFormat;

use crate::DecodeError;

/// Handling of trailing bytes shorter than one record.
///
/// Only complete records are ever decoded; this policy decides what
/// happens to the undecodable tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncation {
    /// Fail the block with [`DecodeError::TrailingBytes`].
    Reject,
    /// Log a warning and drop the tail.
    #[default]
    Warn,
    /// Drop the tail silently.
    Silent,
}

impl Truncation {
    pub(crate) fn check(
        self,
        format: WireFormat,
        len: usize,
        trailing: usize,
    ) -> Result<(), DecodeError> {
        if trailing == 0 {
            return Ok(());
        }
        match self {
            Self::Reject => Err(DecodeError::TrailingBytes {
                format,
                len,
                trailing,
            }),
            Self::Warn => {
                tracing::warn!(
                    format = %format,
                    len,
                    trailing,
                    "dropping trailing bytes shorter than one record"
                );
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_buffer_passes_all_policies() {
        for policy in [Truncation::Reject, Truncation::Warn, Truncation::Silent] {
            assert!(policy.check(WireFormat::Bi5, 40, 0).is_ok());
        }
    }

    #[test]
    fn test_reject_fails_on_trailing() {
        let err = Truncation::Reject
            .check(WireFormat::Bi5, 25, 5)
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::TrailingBytes {
                format: WireFormat::Bi5,
                len: 25,
                trailing: 5,
            }
        );
    }

    #[test]
    fn test_warn_and_silent_pass_on_trailing() {
        assert!(Truncation::Warn.check(WireFormat::Bin, 41, 1).is_ok());
        assert!(Truncation::Silent.check(WireFormat::Bin, 41, 1).is_ok());
    }
}
