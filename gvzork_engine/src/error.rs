//! Errors raised while assembling the game world.
//!
//! These only arise while the fixed campus is being built. Mistakes made by the
//! player at the prompt are reported through the [`View`](crate::View) instead.

use thiserror::Error;

/// Reasons a world entity (or an edge between locations) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("name cannot be blank")]
    BlankName,
    #[error("description cannot be blank")]
    BlankDescription,
    #[error("calories must be between 0 and {max} (got {0})", max = crate::item::MAX_CALORIES)]
    CaloriesOutOfRange(i32),
    #[error("weight must be between 0 and {max} (got {0})", max = crate::item::MAX_WEIGHT)]
    WeightOutOfRange(i32),
    #[error("direction cannot be blank")]
    BlankDirection,
    #[error("direction '{0}' already exists")]
    DuplicateDirection(String),
    #[error("no location with index {0}")]
    UnknownLocation(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            WorldError::CaloriesOutOfRange(1001).to_string(),
            "calories must be between 0 and 1000 (got 1001)"
        );
        assert_eq!(
            WorldError::DuplicateDirection("east".into()).to_string(),
            "direction 'east' already exists"
        );
    }
}
