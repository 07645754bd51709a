// src/exit.rs
//! Standardized process exit codes for `codecoach`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CoachExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, catalog).
    Error = 1,
    /// Input could not be treated as text.
    InvalidInput = 2,
    /// `check` found issues at or above the configured severity.
    CheckFailed = 6,
}

impl CoachExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for CoachExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&anyhow::Error> for CoachExit {
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<crate::error::CoachError>() {
            Some(crate::error::CoachError::InvalidInput { .. }) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoachError;
    use std::path::PathBuf;

    #[test]
    fn test_codes_distinct() {
        let codes = [
            CoachExit::Success,
            CoachExit::Error,
            CoachExit::InvalidInput,
            CoachExit::CheckFailed,
        ]
        .map(CoachExit::code);
        for (i, a) in codes.iter().enumerate() {
            assert!(codes[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn test_invalid_input_maps_to_code_2() {
        let err = anyhow::Error::new(CoachError::InvalidInput {
            path: PathBuf::from("x.js"),
        });
        assert_eq!(CoachExit::from(&err), CoachExit::InvalidInput);

        let other = anyhow::anyhow!("boom");
        assert_eq!(CoachExit::from(&other), CoachExit::Error);
    }
}
