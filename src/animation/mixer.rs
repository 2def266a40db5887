use std::sync::Arc;

use crate::animation::binder::Binder;
use crate::animation::clip::{AnimationClip, Track};
use crate::animation::player::ClipPlayer;
use crate::errors::{KinemaError, Result};
use crate::scene::Scene;

/// Append-only clip builder.
///
/// Tracks are accumulated during scene construction, then [`Mixer::lock`]
/// turns them into an immutable [`AnimationClip`] plus a running
/// [`ClipPlayer`]. Locking is one-way: afterwards, [`Mixer::add_track`] and
/// a second `lock` fail with [`KinemaError::InvalidState`].
pub struct Mixer {
    name: String,
    tracks: Vec<Track>,
    locked: bool,
}

impl Mixer {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tracks: Vec::new(),
            locked: false,
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Appends a track to the unlocked clip.
    ///
    /// Keyframe times must be non-negative and strictly increasing
    /// (duplicate times are rejected, not deduplicated), and the value count
    /// must match the time count. A track whose `(node, target)` pair
    /// duplicates an earlier track is accepted; since tracks are applied in
    /// registration order every frame, the last-registered track wins.
    pub fn add_track(&mut self, track: Track) -> Result<()> {
        if self.locked {
            return Err(KinemaError::InvalidState(
                "cannot add a track to a locked mixer".to_string(),
            ));
        }

        Self::validate_track(&track)?;
        self.tracks.push(track);
        Ok(())
    }

    /// Locks the mixer: builds the clip (duration derived from the tracks),
    /// resolves bindings against `scene`, and returns a player that starts
    /// out playing from time 0 at scale 1 in repeat mode.
    pub fn lock(&mut self, scene: &Scene) -> Result<ClipPlayer> {
        if self.locked {
            return Err(KinemaError::InvalidState(
                "mixer is already locked".to_string(),
            ));
        }
        self.locked = true;

        let clip = AnimationClip::new(self.name.clone(), std::mem::take(&mut self.tracks));
        log::debug!(
            "Locked clip '{}': {} tracks, duration {:.3}s",
            clip.name,
            clip.tracks.len(),
            clip.duration
        );

        let clip = Arc::new(clip);
        let bindings = Binder::bind(scene, &clip);
        Ok(ClipPlayer::new(clip, bindings))
    }

    fn validate_track(track: &Track) -> Result<()> {
        let times = track.data.times();

        if times.is_empty() {
            return Err(KinemaError::InvalidArgument(
                "track has no keyframes".to_string(),
            ));
        }
        if times[0] < 0.0 {
            return Err(KinemaError::InvalidArgument(
                "keyframe times must be non-negative".to_string(),
            ));
        }
        if times.windows(2).any(|w| w[1] <= w[0]) {
            return Err(KinemaError::InvalidArgument(
                "keyframe times must be strictly increasing".to_string(),
            ));
        }
        if track.data.value_count() != times.len() {
            return Err(KinemaError::InvalidArgument(format!(
                "track has {} keyframe times but {} values",
                times.len(),
                track.data.value_count()
            )));
        }

        Ok(())
    }
}
