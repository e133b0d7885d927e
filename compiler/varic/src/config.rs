//! Run-time configuration assembled from command-line flags.

use vari_diagnostic::emitter::ColorMode;

/// Options shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Whether diagnostics on stderr use ANSI colors.
    pub color: ColorMode,
}

impl RunConfig {
    /// Apply one global flag, returning `false` if it is not a global flag.
    ///
    /// An unrecognized `--color=` value is an error carrying the bad value.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, String> {
        let Some(value) = arg.strip_prefix("--color=") else {
            return Ok(false);
        };
        match ColorMode::from_flag(value) {
            Some(mode) => {
                self.color = mode;
                Ok(true)
            }
            None => Err(value.to_string()),
        }
    }
}
