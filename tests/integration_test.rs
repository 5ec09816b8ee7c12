use clubdeck::{motion, AnimationState, Phase, Presence, Transform, DELAY, DURATION, SPONSORS};

const FRAME: f64 = 1.0 / 60.0;

/// Drives the sequencer like the GUI does: sync the requested key, advance,
/// and sample the transform of every live entry. Returns the per-frame
/// samples between `from` and `to`.
fn run_and_sample(
    presence: &mut Presence<&'static str>,
    requested: &'static str,
    from: f64,
    to: f64,
) -> Vec<Vec<(&'static str, Phase, Transform)>> {
    let mut frames = Vec::new();
    let mut now = from;
    while now <= to {
        presence.sync(requested, now);
        presence.advance(now);
        frames.push(
            presence
                .entries()
                .iter()
                .map(|e| (*e.key(), e.phase(), e.transform_at(now)))
                .collect(),
        );
        now += FRAME;
    }
    frames
}

#[test]
fn first_render_panel_paints_at_visible_with_no_transition() {
    let mut presence = Presence::new(false);
    let frames = run_and_sample(&mut presence, "sponsors", 0.0, 1.0);

    let visible = AnimationState::Visible.transform();
    for frame in &frames {
        assert_eq!(frame.len(), 1);
        let (key, phase, transform) = frame[0];
        assert_eq!(key, "sponsors");
        assert_eq!(phase, Phase::Visible);
        assert_eq!(transform, visible, "first paint must never animate");
    }

    // Caption opacity is 1 from the very first sample
    let entry = &presence.entries()[0];
    assert!(entry.instant());
    assert_eq!(motion::caption_opacity(0.0, entry.mounted_at(), entry.instant()), 1.0);
}

#[test]
fn re_entry_runs_hidden_to_visible_with_one_duration_delay() {
    let mut presence = Presence::new(false);
    run_and_sample(&mut presence, "sponsors", 0.0, 1.0);
    let switch_at = 1.0 + FRAME;
    let frames = run_and_sample(&mut presence, "about", switch_at, switch_at + 1.0);

    let hidden = AnimationState::Hidden.transform();
    let visible = AnimationState::Visible.transform();

    // The incoming panel's transform over time: hidden throughout the delay,
    // then monotonically toward visible, then settled.
    let incoming: Vec<(f64, Transform)> = frames
        .iter()
        .enumerate()
        .filter_map(|(i, frame)| {
            frame
                .iter()
                .find(|(key, _, _)| *key == "about")
                .map(|(_, _, tf)| (i as f64 * FRAME, *tf))
        })
        .collect();
    assert!(!incoming.is_empty());

    for (elapsed, tf) in &incoming {
        if *elapsed < DELAY {
            assert_eq!(*tf, hidden, "panel must hold the hidden state through the delay");
        }
        if *elapsed > DELAY + DURATION + FRAME {
            assert_eq!(*tf, visible);
        }
    }

    // Scale never decreases during entrance
    let mut last_scale = 0.0_f32;
    for (_, tf) in &incoming {
        assert!(tf.scale >= last_scale);
        last_scale = tf.scale;
    }
}

#[test]
fn outgoing_panel_stays_in_tree_through_its_exit() {
    let mut presence = Presence::new(false);
    run_and_sample(&mut presence, "sponsors", 0.0, 1.0);
    let switch_at = 1.0 + FRAME;
    let frames = run_and_sample(&mut presence, "about", switch_at, switch_at + 1.0);

    let exit = AnimationState::Exit.transform();
    let mut saw_midflight_exit = false;
    let mut frames_with_outgoing = 0usize;

    for frame in &frames {
        if let Some((_, phase, tf)) = frame.iter().find(|(key, _, _)| *key == "sponsors") {
            frames_with_outgoing += 1;
            assert!(matches!(phase, Phase::Exiting { .. }));
            if tf.y_offset < -1.0 && tf.y_offset > exit.y_offset {
                saw_midflight_exit = true;
            }
        }
    }

    assert!(saw_midflight_exit, "outgoing panel must render displaced mid-exit");
    // Present for roughly DURATION worth of frames, then gone
    let expected = (DURATION / FRAME) as usize;
    assert!(frames_with_outgoing >= expected - 2 && frames_with_outgoing <= expected + 2);
    assert!(frames
        .last()
        .unwrap()
        .iter()
        .all(|(key, _, _)| *key != "sponsors"));
}

#[test]
fn preview_mode_never_shows_intermediate_states() {
    let mut presence = Presence::new(true);
    let mut frames = run_and_sample(&mut presence, "sponsors", 0.0, 0.5);
    frames.extend(run_and_sample(&mut presence, "about", 0.5 + FRAME, 1.0));
    frames.extend(run_and_sample(&mut presence, "sponsors", 1.0 + FRAME, 1.5));

    let visible = AnimationState::Visible.transform();
    for frame in &frames {
        // Exactly the requested content, always settled
        assert_eq!(frame.len(), 1);
        let (_, phase, transform) = frame[0];
        assert_eq!(phase, Phase::Visible);
        assert_eq!(transform, visible);
    }
}

#[test]
fn first_render_flag_is_one_way() {
    let mut presence = Presence::new(false);
    let mut flag_history = Vec::new();

    for (key, at) in [("sponsors", 0.0), ("about", 1.0), ("sponsors", 2.0), ("about", 3.0)] {
        run_and_sample(&mut presence, key, at, at + 0.9);
        flag_history.push(presence.is_first_render());
    }

    assert_eq!(flag_history, vec![true, false, false, false]);
}

#[test]
fn sponsor_list_renders_identically_across_passes() {
    let pass = || -> Vec<(&str, Vec<&str>)> {
        SPONSORS
            .iter()
            .map(|s| (s.name, s.link_targets()))
            .collect()
    };

    let first = pass();
    let second = pass();
    assert_eq!(first, second);

    // No duplicated targets within a pass
    let mut all_targets: Vec<&str> = first.iter().flat_map(|(_, t)| t.clone()).collect();
    let total = all_targets.len();
    all_targets.sort_unstable();
    all_targets.dedup();
    assert_eq!(all_targets.len(), total);
}
