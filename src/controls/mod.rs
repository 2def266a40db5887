//! Camera controls
//!
//! Controllers own no scene data; they hold node handles and are invoked by
//! the render loop and the GUI between frames.

pub mod follow;

pub use follow::{Coupling, FollowController, FollowState};
