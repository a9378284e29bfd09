use crate::state::{Action, GameState};

/// Failure to build a level or catalog from its declarative record.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// The record could not be decoded at all.
    Parse { source_name: String, message: String },
    /// A platform rectangle is degenerate or non-finite.
    InvalidPlatform {
        level: String,
        index: usize,
        reason: String,
    },
    /// A scalar field or entity position is out of range.
    InvalidValue {
        level: String,
        field: String,
        reason: String,
    },
    /// More crystals are required than the level contains.
    UnreachableGoal {
        level: String,
        required: u32,
        available: usize,
    },
    /// A catalog needs at least one level.
    EmptyCatalog,
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse {
                source_name,
                message,
            } => write!(f, "failed to parse {source_name}: {message}"),
            Self::InvalidPlatform {
                level,
                index,
                reason,
            } => write!(f, "level '{level}': platform #{index} {reason}"),
            Self::InvalidValue {
                level,
                field,
                reason,
            } => write!(f, "level '{level}': {field} {reason}"),
            Self::UnreachableGoal {
                level,
                required,
                available,
            } => write!(
                f,
                "level '{level}': requires {required} crystals but only {available} are placed"
            ),
            Self::EmptyCatalog => write!(f, "level catalog is empty"),
        }
    }
}

impl std::error::Error for LevelError {}

/// A state-machine action requested in a state that does not allow it.
/// Raised before any mutation, so the game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError {
    pub from: GameState,
    pub action: Action,
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot {:?} while in {:?}", self.action, self.from)
    }
}

impl std::error::Error for TransitionError {}

/// Renderer snapshot could not be encoded or decoded.
#[derive(Debug)]
pub enum SnapshotError {
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "snapshot encode error: {e}"),
            Self::Decode(e) => write!(f, "snapshot decode error: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_level() {
        let err = LevelError::UnreachableGoal {
            level: "Tutorial Valley".to_string(),
            required: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "level 'Tutorial Valley': requires 4 crystals but only 3 are placed"
        );
    }

    #[test]
    fn transition_error_names_state_and_action() {
        let err = TransitionError {
            from: GameState::Menu,
            action: Action::NextLevel,
        };
        assert_eq!(err.to_string(), "cannot NextLevel while in Menu");
    }
}
