//! Mount/unmount sequencing for the content panel.
//!
//! The sequencer keeps an explicit transition record per visible item instead
//! of relying on a UI runtime's exit-animation lifecycle: each entry is
//! `Entering`, `Visible`, or `Exiting`, and exiting entries stay in the set
//! (and therefore in the rendered tree) until their transition duration has
//! elapsed.
//!
//! Two flags shape the choreography:
//! - `first_render` suppresses the entrance on the very first content, so the
//!   first paint never animates in. It latches false the first time an entry
//!   is retired and never resets for this sequencer instance; content mounted
//!   again later animates normally.
//! - `preview` (set once at construction) bypasses the choreography entirely:
//!   content swaps are applied within a single `sync` call with no
//!   intermediate state.

use crate::motion::{self, Transform, DELAY, DURATION};

/// Transition phase of a single presented item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Mounted and animating in; `since` is the mount timestamp.
    Entering { since: f64 },
    /// Settled at the visible transform.
    Visible,
    /// Retired and animating out; removed once the duration elapses.
    /// `from` is the transform captured at retirement, so a panel retired
    /// mid-entrance exits from where it was.
    Exiting { since: f64, from: Transform },
}

/// A presented item plus its transition phase.
#[derive(Debug, Clone)]
pub struct PresenceEntry<K> {
    key: K,
    phase: Phase,
    mounted_at: f64,
    instant: bool,
}

impl<K> PresenceEntry<K> {
    /// The content key this entry presents.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current transition phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Timestamp this entry was mounted; child entrances are timed from it.
    pub fn mounted_at(&self) -> f64 {
        self.mounted_at
    }

    /// True when the entry was mounted during the first render and therefore
    /// skipped its entrance; the caption mirrors this to skip its fade.
    pub fn instant(&self) -> bool {
        self.instant
    }

    /// True once the entry has been retired and is animating out.
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Samples the panel transform for this entry at `now`.
    pub fn transform_at(&self, now: f64) -> Transform {
        match self.phase {
            Phase::Entering { since } => motion::entrance_transform(now, since),
            Phase::Visible => motion::AnimationState::Visible.transform(),
            Phase::Exiting { since, from } => motion::exit_transform(from, now, since),
        }
    }
}

/// Presentation sequencer: decides, per render pass, whether content enters
/// animated or instantly, and keeps outgoing content alive through its exit.
#[derive(Debug)]
pub struct Presence<K> {
    entries: Vec<PresenceEntry<K>>,
    first_render: bool,
    preview: bool,
}

impl<K: PartialEq> Presence<K> {
    /// Creates a sequencer. `preview` is resolved once by the caller (from
    /// the embed-host signal) and is immutable for the sequencer's lifetime.
    pub fn new(preview: bool) -> Self {
        Self {
            entries: Vec::new(),
            first_render: true,
            preview,
        }
    }

    // ===== Queries =====

    /// Live entries, exiting ones included, in mount order.
    pub fn entries(&self) -> &[PresenceEntry<K>] {
        &self.entries
    }

    /// True until the first retirement; one-way.
    pub fn is_first_render(&self) -> bool {
        self.first_render
    }

    /// True when running inside an embedded preview host.
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// True while any entry still has a transition in flight at `now`.
    ///
    /// Entries mounted directly visible (first render, preview swaps) still
    /// run their card and caption fades, so they count as animating until
    /// one delay plus one duration after mount. Used by the GUI to keep
    /// requesting repaints during animation.
    pub fn is_animating(&self, now: f64) -> bool {
        self.entries.iter().any(|e| match e.phase {
            Phase::Visible => now - e.mounted_at < DELAY + DURATION,
            Phase::Entering { since } => now - since < DELAY + DURATION,
            Phase::Exiting { since, .. } => now - since < DURATION,
        })
    }

    // ===== Operations =====

    /// Reconciles the live set against the requested content key.
    ///
    /// In standalone mode a key change retires the current entry (it keeps
    /// rendering through its exit) and mounts the incoming key entering. The
    /// very first content is mounted directly visible. In preview mode the
    /// set is replaced in place with no intermediate state.
    pub fn sync(&mut self, key: K, now: f64) {
        if self.preview {
            if self.entries.iter().any(|e| e.key == key) {
                return;
            }
            // Instant swap: removal of old content and insertion of new
            // content land in the same render pass.
            if !self.entries.is_empty() {
                self.first_render = false;
                self.entries.clear();
            }
            self.entries.push(PresenceEntry {
                key,
                phase: Phase::Visible,
                mounted_at: now,
                instant: self.first_render,
            });
            return;
        }

        if self.entries.iter().any(|e| e.key == key && !e.is_exiting()) {
            return;
        }

        let mut retired_any = false;
        for entry in &mut self.entries {
            if !entry.is_exiting() {
                let from = entry.transform_at(now);
                entry.phase = Phase::Exiting { since: now, from };
                retired_any = true;
            }
        }
        if retired_any {
            // Teardown has begun; the suppression window is over for good.
            self.first_render = false;
        }

        let phase = if self.first_render {
            // First paint must not animate in.
            Phase::Visible
        } else {
            Phase::Entering { since: now }
        };
        self.entries.push(PresenceEntry {
            key,
            phase,
            mounted_at: now,
            instant: self.first_render,
        });
    }

    /// Advances transitions: settles entrances whose delay and duration have
    /// elapsed and drops exits whose duration has elapsed.
    pub fn advance(&mut self, now: f64) {
        for entry in &mut self.entries {
            if let Phase::Entering { since } = entry.phase {
                if now - since >= DELAY + DURATION {
                    entry.phase = Phase::Visible;
                }
            }
        }
        self.entries.retain(|e| match e.phase {
            Phase::Exiting { since, .. } => now - since < DURATION,
            _ => true,
        });
    }
}
