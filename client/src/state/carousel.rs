//! Gallery carousel position model.
//!
//! DESIGN
//! ======
//! The thumbnail strip renders the image list `DUPLICATES` times. The active
//! slot is tracked as a *virtual index* into that extended strip and rests in
//! the middle copy, `[n, 2n - 1]`. Stepping past either edge is followed by a
//! silent shift of one full list length: the index moves by `n` and the strip
//! scroll offset moves by `n * ITEM_TOTAL`, so the visible thumbnail never
//! changes and the loop looks continuous.
//!
//! Timers live in the component; this model only hands out generation tokens
//! so stale timer callbacks can be recognized and ignored.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Thumbnail width in CSS pixels.
pub const THUMB_WIDTH: f64 = 120.0;
/// Gap between thumbnails in CSS pixels.
pub const THUMB_GAP: f64 = 12.0;
/// Horizontal stride of one thumbnail slot.
pub const ITEM_TOTAL: f64 = THUMB_WIDTH + THUMB_GAP;
/// Number of copies of the image list in the thumbnail strip.
pub const DUPLICATES: usize = 3;
/// Delay before the carousel advances on its own.
pub const AUTO_ADVANCE_MS: u32 = 6_000;
/// Idle time after the last interaction before auto-advance resumes.
pub const INTERACTION_IDLE_MS: u32 = 3_000;

/// One slot of the extended thumbnail strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedSlot {
    pub original_index: usize,
    pub virtual_index: usize,
}

/// Build the tripled slot list for `len` images.
#[must_use]
pub fn extended_slots(len: usize) -> Vec<ExtendedSlot> {
    if len == 0 {
        return Vec::new();
    }
    (0..len * DUPLICATES)
        .map(|virtual_index| ExtendedSlot { original_index: virtual_index % len, virtual_index })
        .collect()
}

/// Manual navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// How the strip should move to its next target offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Instant,
    Smooth,
}

/// Scroll work the component applies to the thumbnail viewport after a
/// position change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Offset to add to the current `scrollLeft` before scrolling, set when
    /// the virtual index was shifted by one list length.
    pub shift_by: Option<f64>,
    /// Absolute `scrollLeft` that centers the active thumbnail.
    pub left: f64,
    pub motion: ScrollMotion,
}

/// Snapshot of carousel position used to validate a pending auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
}

/// Carousel position and interaction state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    virtual_index: usize,
    interacting: bool,
    interaction_seq: u64,
    generation: u64,
    instant_scroll: bool,
}

impl CarouselState {
    /// Start at the first image of the middle copy.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            virtual_index: len,
            interacting: false,
            interaction_seq: 0,
            generation: 0,
            instant_scroll: true,
        }
    }

    /// Replace the image count, resetting to the middle copy's first slot.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.virtual_index = len;
        self.instant_scroll = true;
        self.bump();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn virtual_index(&self) -> usize {
        self.virtual_index
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Prev/next controls are only useful with more than one image.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    /// Index of the visible image in the original list.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (self.len > 0).then(|| self.virtual_index % self.len)
    }

    #[must_use]
    pub fn is_active_slot(&self, virtual_index: usize) -> bool {
        self.virtual_index == virtual_index
    }

    /// `NN/TT` position label, 1-based and zero-padded.
    #[must_use]
    pub fn counter_label(&self) -> String {
        match self.active_index() {
            Some(index) => format!("{:02}/{:02}", index + 1, self.len),
            None => String::new(),
        }
    }

    /// Width of one full copy of the image list in the strip.
    #[must_use]
    pub fn list_width(&self) -> f64 {
        usize_to_f64(self.len) * ITEM_TOTAL
    }

    /// Step one slot with the prev/next buttons.
    pub fn step(&mut self, direction: Direction) {
        if self.len == 0 {
            return;
        }
        match direction {
            Direction::Prev => self.virtual_index = self.virtual_index.saturating_sub(1),
            Direction::Next => self.virtual_index += 1,
        }
        self.bump();
    }

    /// Jump to a thumbnail by its original index, landing in the middle copy.
    pub fn select(&mut self, original_index: usize) {
        if original_index >= self.len {
            return;
        }
        self.instant_scroll = false;
        self.virtual_index = self.len + original_index;
        self.bump();
    }

    /// Mark user interaction and return the token the idle timer must present
    /// to end it.
    pub fn begin_interaction(&mut self) -> u64 {
        self.interacting = true;
        self.interaction_seq += 1;
        self.interaction_seq
    }

    /// End the interaction started with `token`. Ignored when a newer
    /// interaction has started since.
    pub fn end_interaction(&mut self, token: u64) -> bool {
        if token != self.interaction_seq || !self.interacting {
            return false;
        }
        self.interacting = false;
        self.bump();
        true
    }

    /// End any interaction immediately (pointer left the gallery).
    pub fn cancel_interaction(&mut self) {
        self.interaction_seq += 1;
        if self.interacting {
            self.interacting = false;
            self.bump();
        }
    }

    /// Ticket for an auto-advance countdown, or `None` when auto-advance is
    /// paused or pointless.
    #[must_use]
    pub fn advance_ticket(&self) -> Option<AdvanceTicket> {
        (self.len > 1 && !self.interacting).then_some(AdvanceTicket { generation: self.generation })
    }

    /// Advance one slot if nothing changed since `ticket` was issued.
    pub fn auto_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket.generation != self.generation || self.interacting || self.len <= 1 {
            return false;
        }
        self.virtual_index += 1;
        self.bump();
        true
    }

    /// Bring the virtual index back into the middle copy, returning the strip
    /// offset shift that keeps the same thumbnail under the viewport.
    ///
    /// Only the shift is meant to be applied instantly; the motion of the
    /// step that crossed the edge is left as it was.
    pub fn wrap(&mut self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        let min = self.len;
        let max = self.len * 2 - 1;
        let shift = if self.virtual_index > max {
            self.virtual_index -= self.len;
            -self.list_width()
        } else if self.virtual_index < min {
            self.virtual_index += self.len;
            self.list_width()
        } else {
            return None;
        };
        self.bump();
        Some(shift)
    }

    /// Scroll offset that centers the active thumbnail in a viewport of
    /// `client_width`.
    #[must_use]
    pub fn target_scroll_left(&self, client_width: f64) -> f64 {
        (usize_to_f64(self.virtual_index) * ITEM_TOTAL - (client_width - THUMB_WIDTH) / 2.0).max(0.0)
    }

    /// Wrap if needed and produce the scroll work for the viewport.
    pub fn settle(&mut self, client_width: f64) -> ScrollCommand {
        let shift_by = self.wrap();
        let motion = if std::mem::take(&mut self.instant_scroll) {
            ScrollMotion::Instant
        } else {
            ScrollMotion::Smooth
        };
        ScrollCommand { shift_by, left: self.target_scroll_left(client_width), motion }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[allow(clippy::cast_precision_loss)]
fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
