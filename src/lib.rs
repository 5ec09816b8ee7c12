pub mod motion;
pub mod presence;
pub mod sponsors;
pub mod theme;

// Export animation core
pub use motion::{
    AnimationState, Transform,
    DURATION, DELAY, EXIT_Y_OFFSET, COMPACT_SCALE, CARD_ENTRY_Y_OFFSET,
};

// Export the presentation sequencer
pub use presence::{Presence, PresenceEntry, Phase};

// Export sponsor content
pub use sponsors::{Sponsor, SponsorLink, LinkKind, SPONSORS};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
