use thiserror::Error;

use crate::core::types::{Fence, PlayerId, Position};

/// Why a fence placement was rejected, in the order the checks run
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceRejection {
    #[error("fence anchor is outside rows/columns 0..=7")]
    OutOfBounds,

    #[error("an identical fence is already placed")]
    Duplicate,

    #[error("fence shares its post with an existing fence")]
    PostOverlap,

    #[error("fence overlaps the span of a parallel fence")]
    SpanOverlap,

    #[error("fence would leave {0} without a path to its goal row")]
    BlocksPath(PlayerId),
}

#[derive(Error, Debug)]
pub enum QuoridorError {
    #[error("Illegal move: {player} cannot move to {target}")]
    IllegalMove { player: PlayerId, target: Position },

    #[error("Illegal fence {fence}: {reason}")]
    IllegalFence {
        fence: Fence,
        reason: FenceRejection,
    },

    #[error("{0} has no fences remaining")]
    NoFencesRemaining(PlayerId),

    #[error("No legal moves for {0}")]
    NoLegalMoves(PlayerId),

    #[error("It is not {0}'s turn")]
    OutOfTurn(PlayerId),

    #[error("The game is already over")]
    GameOver,

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, QuoridorError>;
