use glam::{Quat, Vec3, Vec4};

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;

/// What a track animates: which node, which property.
#[derive(Debug, Clone)]
pub struct TrackMeta {
    pub node_name: String,
    pub target: TargetPath,
}

/// Keyframe payload, one variant per animatable value type.
#[derive(Debug, Clone)]
pub enum TrackData {
    Scalar(KeyframeTrack<f32>),
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
    Color(KeyframeTrack<Vec4>),
}

impl TrackData {
    #[must_use]
    pub fn times(&self) -> &[f32] {
        match self {
            TrackData::Scalar(t) => &t.times,
            TrackData::Vector3(t) => &t.times,
            TrackData::Quaternion(t) => &t.times,
            TrackData::Color(t) => &t.times,
        }
    }

    #[must_use]
    pub fn value_count(&self) -> usize {
        match self {
            TrackData::Scalar(t) => t.values.len(),
            TrackData::Vector3(t) => t.values.len(),
            TrackData::Quaternion(t) => t.values.len(),
            TrackData::Color(t) => t.values.len(),
        }
    }
}

/// Complete track definition: metadata plus keyframe data.
#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

impl Track {
    /// Time of the track's last keyframe, or 0 when empty.
    #[must_use]
    pub fn last_time(&self) -> f32 {
        self.data.times().last().copied().unwrap_or(0.0)
    }
}

/// A named, immutable set of tracks sharing one time domain.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Builds a clip with the duration derived as the maximum keyframe time
    /// across all tracks (0 for an empty clip).
    #[must_use]
    pub fn new(name: String, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(Track::last_time)
            .fold(0.0_f32, f32::max);

        Self {
            name,
            duration,
            tracks,
        }
    }

    /// Builds a clip with an explicit duration override instead of the
    /// derived maximum.
    #[must_use]
    pub fn with_duration(name: String, tracks: Vec<Track>, duration: f32) -> Self {
        Self {
            name,
            duration,
            tracks,
        }
    }
}
