use thiserror::Error;

/// Errors raised while configuring validators.
///
/// Validation itself never fails with an error: every validator returns a
/// boolean or an outcome value. These errors only come from loading a custom
/// tax-office registry or parsing a preset name.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrueferError {
    /// A tax-office registry entry is malformed or duplicated.
    #[error("registry error: {0}")]
    Registry(String),

    /// A preset key does not name a known validator.
    #[error("unknown validation preset '{0}'")]
    UnknownPreset(String),

    /// Registry JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PrueferError::Registry("duplicate code 1121".into()).to_string(),
            "registry error: duplicate code 1121"
        );
        assert_eq!(
            PrueferError::UnknownPreset("vat".into()).to_string(),
            "unknown validation preset 'vat'"
        );
    }
}
