//! Animation module
//!
//! Keyframe tracks are assembled into a clip through the [`Mixer`] builder;
//! locking the mixer resolves track bindings against the scene and returns a
//! running [`ClipPlayer`], the sole owner of playback time.

pub mod binder;
pub mod binding;
pub mod clip;
pub mod mixer;
pub mod player;
pub mod tracks;
pub mod values;

pub use binder::Binder;
pub use binding::{PropertyBinding, TargetPath};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use mixer::Mixer;
pub use player::{ClipPlayer, LoopMode};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
