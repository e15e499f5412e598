//! Swipe gesture classification.
//!
//! The discovery deck resolves every released drag into exactly one of three
//! outcomes. The classifier is pure and total: any pair of finite offset and
//! velocity values maps to a [`Decision`], and there is no error condition.

use crate::domain::{Decision, GestureSample};

/// Horizontal distance (layout px) a drag must exceed to decide a card.
pub const SWIPE_OFFSET_THRESHOLD: f32 = 100.0;

/// Release speed (layout px/s) a flick must exceed to decide a card.
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 500.0;

/// Offset at which a swipe indicator starts to fade in.
const INDICATOR_FADE_START: f32 = 20.0;

/// Offset at which a swipe indicator is fully opaque.
const INDICATOR_FADE_END: f32 = 100.0;

/// Classifies released swipe gestures and derives the presentation values
/// that track an in-progress drag.
pub struct SwipeClassifier;

impl SwipeClassifier {
    /// Classifies a released gesture. The rules are checked in order and the
    /// first match wins:
    ///
    /// 1. offset > 100 or velocity > 500 → [`Decision::Accept`]
    /// 2. offset < -100 or velocity < -500 → [`Decision::Reject`]
    /// 3. otherwise → [`Decision::Cancel`]
    ///
    /// Comparisons are strict, so a gesture landing exactly on a threshold
    /// snaps back. Accept is checked before Reject, so a far-right drag
    /// released with a hard leftward flick still accepts.
    pub fn classify(sample: GestureSample) -> Decision {
        if sample.offset > SWIPE_OFFSET_THRESHOLD || sample.velocity > SWIPE_VELOCITY_THRESHOLD {
            Decision::Accept
        } else if sample.offset < -SWIPE_OFFSET_THRESHOLD
            || sample.velocity < -SWIPE_VELOCITY_THRESHOLD
        {
            Decision::Reject
        } else {
            Decision::Cancel
        }
    }

    /// Card tilt in degrees for a live drag offset, mapping [-200, 200] to
    /// [-25, 25] and clamping beyond that range.
    pub fn card_rotation(offset: f32) -> f32 {
        (offset / 200.0 * 25.0).clamp(-25.0, 25.0)
    }

    /// Opacity of the "LIKE" indicator: 0 at offset 20, 1 at offset 100,
    /// linear in between.
    pub fn like_opacity(offset: f32) -> f32 {
        ((offset - INDICATOR_FADE_START) / (INDICATOR_FADE_END - INDICATOR_FADE_START))
            .clamp(0.0, 1.0)
    }

    /// Opacity of the "NOPE" indicator, symmetric over [-20, -100].
    pub fn nope_opacity(offset: f32) -> f32 {
        Self::like_opacity(-offset)
    }
}
