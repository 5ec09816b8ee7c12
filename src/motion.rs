//! Animation timing and the visual-state table for the landing page.
//!
//! Every transition in the app shares one fixed duration and one ease-out
//! curve; the caption's exit fade uses a separate cubic-bezier opacity ease.
//! All sampling functions here are pure functions of elapsed time so they can
//! be tested without a UI runtime.

/// Duration of every entrance/exit transition, in seconds.
pub const DURATION: f64 = 0.3;

/// Delay before the panel's visible state is applied, equal to [`DURATION`].
pub const DELAY: f64 = DURATION;

/// Vertical displacement of an exiting panel, in points.
pub const EXIT_Y_OFFSET: f32 = -150.0;

/// Scale applied to a panel before entrance and during exit.
pub const COMPACT_SCALE: f32 = 0.9;

/// Vertical offset a sponsor card starts its entrance from, in points.
pub const CARD_ENTRY_Y_OFFSET: f32 = 20.0;

/// Named visual states of the sequenced content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Pre-entrance appearance: slightly scaled down, in place.
    Hidden,
    /// Steady state after the entrance completes.
    Visible,
    /// Departure appearance: displaced upward and scaled down.
    Exit,
}

impl AnimationState {
    /// Returns the target transform for this state.
    pub fn transform(self) -> Transform {
        match self {
            AnimationState::Hidden => Transform { scale: COMPACT_SCALE, y_offset: 0.0 },
            AnimationState::Visible => Transform { scale: 1.0, y_offset: 0.0 },
            AnimationState::Exit => Transform { scale: COMPACT_SCALE, y_offset: EXIT_Y_OFFSET },
        }
    }
}

/// Visual transform of the content panel: uniform scale plus vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub y_offset: f32,
}

impl Transform {
    /// Component-wise linear interpolation between two transforms.
    ///
    /// Exact at the endpoints so settled states compare equal.
    pub fn lerp(self, other: Transform, t: f32) -> Transform {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Transform {
            scale: self.scale + (other.scale - self.scale) * t,
            y_offset: self.y_offset + (other.y_offset - self.y_offset) * t,
        }
    }
}

// ===== Easing =====

/// Quadratic ease-out over a normalized progress value in `[0, 1]`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic-bezier ease used by the caption's exit fade: (0.25, 0.46, 0.45, 0.94).
///
/// Solves the bezier x(u) = t for u by bisection, then evaluates y(u). The
/// curve is monotonic in x for these control points, so bisection converges.
pub fn ease_out_opacity(t: f32) -> f32 {
    const X1: f32 = 0.25;
    const Y1: f32 = 0.46;
    const X2: f32 = 0.45;
    const Y2: f32 = 0.94;

    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    let bezier = |p1: f32, p2: f32, u: f32| {
        let v = 1.0 - u;
        3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
    };

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut u = t;
    for _ in 0..24 {
        if bezier(X1, X2, u) < t {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) * 0.5;
    }
    bezier(Y1, Y2, u)
}

/// Normalized eased progress of a transition that started at `since`.
///
/// Returns 0.0 before `delay` has elapsed and 1.0 once `delay + DURATION`
/// has passed.
pub fn progress(now: f64, since: f64, delay: f64) -> f32 {
    let elapsed = now - since - delay;
    if elapsed <= 0.0 {
        return 0.0;
    }
    ease_out((elapsed / DURATION) as f32)
}

// ===== Sampling =====

/// Panel transform during entrance: holds [`AnimationState::Hidden`] for
/// [`DELAY`], then eases toward [`AnimationState::Visible`].
pub fn entrance_transform(now: f64, since: f64) -> Transform {
    let p = progress(now, since, DELAY);
    AnimationState::Hidden
        .transform()
        .lerp(AnimationState::Visible.transform(), p)
}

/// Panel transform during exit: eases from `start` toward
/// [`AnimationState::Exit`] with no delay.
///
/// `start` is the transform the panel had when it was retired; a panel
/// retired mid-entrance animates out from where it was instead of popping
/// to the visible transform first.
pub fn exit_transform(start: Transform, now: f64, since: f64) -> Transform {
    let p = progress(now, since, 0.0);
    start.lerp(AnimationState::Exit.transform(), p)
}

/// Entrance of a single sponsor card: opacity 0→1 and y-offset 20→0.
///
/// Cards are not gated by the first-render rule; they always animate in.
/// Returns `(opacity, y_offset)`.
pub fn card_entrance(now: f64, since: f64) -> (f32, f32) {
    let p = progress(now, since, 0.0);
    (p, CARD_ENTRY_Y_OFFSET * (1.0 - p))
}

/// Opacity of the caption below the cards during entrance.
///
/// The fade shares the panel's delay; `suppressed` (set on the very first
/// render) forces full opacity with no fade.
pub fn caption_opacity(now: f64, since: f64, suppressed: bool) -> f32 {
    if suppressed {
        return 1.0;
    }
    progress(now, since, DELAY)
}

/// Opacity of the caption during exit, using the bezier opacity ease.
pub fn caption_exit_opacity(now: f64, since: f64) -> f32 {
    let elapsed = now - since;
    if elapsed <= 0.0 {
        return 1.0;
    }
    1.0 - ease_out_opacity((elapsed / DURATION) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_table_matches_fixed_transforms() {
        assert_eq!(
            AnimationState::Hidden.transform(),
            Transform { scale: 0.9, y_offset: 0.0 }
        );
        assert_eq!(
            AnimationState::Visible.transform(),
            Transform { scale: 1.0, y_offset: 0.0 }
        );
        assert_eq!(
            AnimationState::Exit.transform(),
            Transform { scale: 0.9, y_offset: -150.0 }
        );
    }

    #[test]
    fn ease_out_endpoints_and_shape() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        // Ease-out front-loads progress
        assert!(ease_out(0.5) > 0.5);
        // Clamped outside [0, 1]
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn opacity_bezier_endpoints() {
        assert_eq!(ease_out_opacity(0.0), 0.0);
        assert_eq!(ease_out_opacity(1.0), 1.0);
        let mid = ease_out_opacity(0.5);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn entrance_holds_hidden_during_delay() {
        let since = 10.0;
        // Inside the delay window the transform stays at Hidden
        assert_eq!(entrance_transform(since + DELAY * 0.5, since), AnimationState::Hidden.transform());
        // Fully settled after delay + duration
        assert_eq!(
            entrance_transform(since + DELAY + DURATION + 0.01, since),
            AnimationState::Visible.transform()
        );
    }

    #[test]
    fn exit_reaches_exit_transform_after_duration() {
        let since = 3.0;
        let visible = AnimationState::Visible.transform();
        assert_eq!(exit_transform(visible, since, since), visible);
        let done = exit_transform(visible, since + DURATION + 0.01, since);
        assert_eq!(done, AnimationState::Exit.transform());
        // Midway the panel is displaced but not yet at -150
        let mid = exit_transform(visible, since + DURATION * 0.5, since);
        assert!(mid.y_offset < 0.0 && mid.y_offset > EXIT_Y_OFFSET);
    }

    #[test]
    fn exit_starts_from_the_given_transform() {
        let since = 0.0;
        let partial = Transform { scale: 0.93, y_offset: 0.0 };
        // No pop to the visible transform at the start of the exit
        assert_eq!(exit_transform(partial, since, since), partial);
        assert_eq!(
            exit_transform(partial, since + DURATION, since),
            AnimationState::Exit.transform()
        );
    }

    #[test]
    fn card_entrance_fades_in_and_settles() {
        let since = 0.0;
        let (o0, y0) = card_entrance(since, since);
        assert_eq!((o0, y0), (0.0, CARD_ENTRY_Y_OFFSET));
        let (o1, y1) = card_entrance(since + DURATION + 0.01, since);
        assert_eq!((o1, y1), (1.0, 0.0));
    }

    #[test]
    fn caption_suppression_forces_full_opacity() {
        let since = 5.0;
        assert_eq!(caption_opacity(since, since, true), 1.0);
        // Without suppression the caption is invisible until the delay passes
        assert_eq!(caption_opacity(since + DELAY * 0.9, since, false), 0.0);
        assert_eq!(caption_opacity(since + DELAY + DURATION + 0.01, since, false), 1.0);
    }
}
