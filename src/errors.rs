//! Error Types
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, KinemaError>`.
//!
//! Errors are only produced by setup-time and user-input-time operations
//! (building a mixer, locking it, changing the time scale). The per-frame
//! paths (`ClipPlayer::advance`, `FollowController::update`) never fail:
//! any inconsistency found mid-frame degrades to a no-op instead.

use thiserror::Error;

/// The main error type for the kinema core.
#[derive(Error, Debug)]
pub enum KinemaError {
    /// Operation invoked outside the valid lifecycle stage of its receiver,
    /// e.g. adding a track to a locked mixer or locking a mixer twice.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Argument rejected where no sane clamp exists, e.g. a non-positive
    /// time scale or a keyframe track with non-increasing times.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
