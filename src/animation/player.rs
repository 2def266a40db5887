use std::sync::Arc;

use crate::animation::binding::{PropertyBinding, TargetPath};
use crate::animation::clip::{AnimationClip, TrackData};
use crate::animation::tracks::KeyframeCursor;
use crate::errors::{KinemaError, Result};
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Repeat,
}

/// Stateful playback engine for one [`AnimationClip`].
///
/// The player is the sole mutator of playback time. The render loop calls
/// [`ClipPlayer::advance`] once per frame with real (unscaled) elapsed time;
/// the GUI calls the transport operations between frames. Everything runs on
/// one thread, so GUI mutations from the previous event dispatch are always
/// visible to the next `advance`.
///
/// `time` is unscaled clip time in `[0, duration]`, which is exactly what a
/// UI time slider displays; `time_scale` only changes how fast it advances.
#[derive(Debug)]
pub struct ClipPlayer {
    clip: Arc<AnimationClip>,
    bindings: Vec<PropertyBinding>,
    track_cursors: Vec<KeyframeCursor>,

    time: f32,
    time_scale: f32,
    loop_mode: LoopMode,
    playing: bool,
}

impl ClipPlayer {
    #[must_use]
    pub(crate) fn new(clip: Arc<AnimationClip>, bindings: Vec<PropertyBinding>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            bindings,
            track_cursors: vec![KeyframeCursor::default(); track_count],
            time: 0.0,
            time_scale: 1.0,
            loop_mode: LoopMode::Repeat,
            playing: true,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Unscaled clip time, in `[0, duration]`.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clip.duration
    }

    #[must_use]
    pub fn playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    #[must_use]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Resumes playback without altering `time`.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Suspends playback without altering `time`.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Replaces the time scale. Rejects non-positive and non-finite factors;
    /// there is no sane clamp for "play at zero speed".
    pub fn set_time_scale(&mut self, factor: f32) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(KinemaError::InvalidArgument(format!(
                "time scale must be positive and finite, got {factor}"
            )));
        }
        self.time_scale = factor;
        Ok(())
    }

    /// Changes the loop mode.
    ///
    /// Switching `Once` -> `Repeat` while the player sits at the end
    /// restarts playback from 0, so re-enabling looping after a finished
    /// once-through plays again. `Repeat` -> `Once` never truncates; it only
    /// affects future overflow.
    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        if self.loop_mode == LoopMode::Once
            && mode == LoopMode::Repeat
            && self.time >= self.clip.duration
        {
            self.time = 0.0;
            self.playing = true;
        }
        self.loop_mode = mode;
    }

    /// Scrubs to clip time `t`, clamped into `[0, duration]`, without
    /// changing `playing`. Track values are re-sampled immediately, so
    /// scrubbing while paused still moves the scene.
    pub fn seek(&mut self, t: f32, scene: &mut Scene) {
        self.time = t.clamp(0.0, self.clip.duration);
        self.apply_tracks(scene);
    }

    /// Advances clip time by `dt * time_scale` and writes the sampled track
    /// values into the scene. `dt` is real elapsed wall-clock time since the
    /// previous frame; negative values are clamped to 0.
    ///
    /// No-op when paused. Overflow wraps under [`LoopMode::Repeat`] and
    /// clamps-and-pauses under [`LoopMode::Once`]. Never fails: a clip with
    /// zero duration pins time to 0, and stale bindings are skipped.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene) {
        if !self.playing {
            return;
        }

        let duration = self.clip.duration;
        let next = self.time + dt.max(0.0) * self.time_scale;

        if duration <= 0.0 {
            if next > 0.0 && self.loop_mode == LoopMode::Once {
                self.playing = false;
            }
            self.time = 0.0;
            self.apply_tracks(scene);
            return;
        }

        self.time = if next > duration {
            match self.loop_mode {
                LoopMode::Repeat => next % duration,
                LoopMode::Once => {
                    self.playing = false;
                    duration
                }
            }
        } else {
            next
        };

        self.apply_tracks(scene);
    }

    /// Samples every bound track at the current time and assigns the value
    /// to its target property. Applied in registration order, so when two
    /// tracks animate the same property the last-registered one wins.
    fn apply_tracks(&mut self, scene: &mut Scene) {
        let time = self.time;

        for binding in &self.bindings {
            let Some(track) = self.clip.tracks.get(binding.track_index) else {
                continue;
            };
            let Some(cursor) = self.track_cursors.get_mut(binding.track_index) else {
                continue;
            };
            let Some(node) = scene.get_node_mut(binding.node) else {
                continue;
            };

            match (&track.data, binding.target) {
                (TrackData::Vector3(t), TargetPath::Translation) => {
                    node.transform.position = t.sample_with_cursor(time, cursor);
                }
                (TrackData::Vector3(t), TargetPath::Scale) => {
                    node.transform.scale = t.sample_with_cursor(time, cursor);
                }
                (TrackData::Quaternion(t), TargetPath::Rotation) => {
                    node.transform.rotation = t.sample_with_cursor(time, cursor);
                }
                (TrackData::Color(t), TargetPath::Color) => {
                    node.color = t.sample_with_cursor(time, cursor);
                }
                (TrackData::Scalar(t), TargetPath::Opacity) => {
                    node.opacity = t.sample_with_cursor(time, cursor);
                }
                _ => {
                    // Payload/target mismatch; nothing sensible to assign.
                }
            }
        }
    }
}
