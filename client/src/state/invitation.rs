//! Intro overlay gate.
//!
//! DESIGN
//! ======
//! The page content stays mounted but inert behind a full-screen overlay
//! until the guest opens the invitation. The overlay then fades for
//! `OVERLAY_FADE_MS` before it is removed from the tree.

#[cfg(test)]
#[path = "invitation_test.rs"]
mod invitation_test;

/// Overlay fade-out duration.
pub const OVERLAY_FADE_MS: u32 = 700;
/// Default label of the open button.
pub const DEFAULT_OPEN_LABEL: &str = "Buka Undangan";

/// Overlay lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Visible,
    Fading,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvitationState {
    pub opened: bool,
    pub overlay: OverlayPhase,
}

impl InvitationState {
    /// Open the invitation. Returns `true` only on the first call, which is
    /// when the fade timer must be started.
    pub fn open(&mut self) -> bool {
        if self.opened {
            return false;
        }
        self.opened = true;
        self.overlay = OverlayPhase::Fading;
        true
    }

    /// Called when the fade timer elapses.
    pub fn finish_fade(&mut self) {
        if self.overlay == OverlayPhase::Fading {
            self.overlay = OverlayPhase::Hidden;
        }
    }

    /// Document scrolling is blocked until the invitation is opened.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.opened
    }

    #[must_use]
    pub fn overlay_mounted(&self) -> bool {
        self.overlay != OverlayPhase::Hidden
    }
}
