use std::fmt;

/// Errors returned by the motion core.
///
/// A failed call leaves the simulation (or session pool) untouched and the
/// caller can carry on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Body index does not reference an existing body.
    InvalidIndex { index: usize, len: usize },
    /// Body already has a color (colors are write-once), or the simulation is running.
    AlreadyAssigned { index: usize },
    /// Color value is empty or not recognised.
    InvalidColor(String),
    /// Scene configuration failed to parse or validate.
    Scene(String),
    /// Every session id is taken.
    PoolFull,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidIndex { index, len } => {
                write!(f, "invalid body index {} (simulation has {} bodies)", index, len)
            }
            SimError::AlreadyAssigned { index } => {
                write!(f, "body {} already has a color", index)
            }
            SimError::InvalidColor(value) => write!(f, "invalid color: {:?}", value),
            SimError::Scene(msg) => write!(f, "invalid scene: {}", msg),
            SimError::PoolFull => write!(f, "no free session id"),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_index() {
        let err = SimError::InvalidIndex { index: 5, len: 2 };
        assert_eq!(err.to_string(), "invalid body index 5 (simulation has 2 bodies)");
    }

    #[test]
    fn invalid_color_quotes_the_value() {
        let err = SimError::InvalidColor(String::new());
        assert_eq!(err.to_string(), "invalid color: \"\"");
    }
}
