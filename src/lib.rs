#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod controls;
pub mod errors;
pub mod scene;
pub mod utils;

pub use animation::{AnimationClip, ClipPlayer, LoopMode, Mixer, TargetPath, Track};
pub use controls::{Coupling, FollowController, FollowState};
pub use errors::{KinemaError, Result};
pub use scene::{Node, NodeHandle, Scene, Transform};
pub use utils::time::Timer;
