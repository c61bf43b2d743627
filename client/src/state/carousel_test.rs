use super::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

// =============================================================
// Extended strip
// =============================================================

#[test]
fn extended_slots_triples_the_list() {
    let slots = extended_slots(4);
    assert_eq!(slots.len(), 12);
    assert_eq!(slots[0], ExtendedSlot { original_index: 0, virtual_index: 0 });
    assert_eq!(slots[5], ExtendedSlot { original_index: 1, virtual_index: 5 });
    assert_eq!(slots[11], ExtendedSlot { original_index: 3, virtual_index: 11 });
}

#[test]
fn extended_slots_empty_for_no_images() {
    assert!(extended_slots(0).is_empty());
}

// =============================================================
// Position
// =============================================================

#[test]
fn starts_in_middle_copy() {
    let c = CarouselState::new(5);
    assert_eq!(c.virtual_index(), 5);
    assert_eq!(c.active_index(), Some(0));
    assert_eq!(c.counter_label(), "01/05");
}

#[test]
fn empty_carousel_has_no_active_image() {
    let mut c = CarouselState::new(0);
    c.step(Direction::Next);
    c.step(Direction::Prev);
    assert_eq!(c.active_index(), None);
    assert_eq!(c.counter_label(), "");
    assert_eq!(c.wrap(), None);
    assert!(!c.can_navigate());
}

#[test]
fn active_index_is_always_valid() {
    let len = 7;
    let mut c = CarouselState::new(len);
    for _ in 0..50 {
        c.step(Direction::Next);
        assert!(c.active_index().is_some_and(|i| i < len));
        c.settle(600.0);
    }
    for _ in 0..50 {
        c.step(Direction::Prev);
        assert!(c.active_index().is_some_and(|i| i < len));
        c.settle(600.0);
    }
}

#[test]
fn single_image_cannot_navigate_or_advance() {
    let c = CarouselState::new(1);
    assert!(!c.can_navigate());
    assert!(c.advance_ticket().is_none());
}

#[test]
fn select_lands_in_middle_copy_with_smooth_scroll() {
    let mut c = CarouselState::new(4);
    c.settle(500.0);
    c.select(2);
    assert_eq!(c.virtual_index(), 6);
    assert_eq!(c.active_index(), Some(2));
    assert_eq!(c.settle(500.0).motion, ScrollMotion::Smooth);
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut c = CarouselState::new(3);
    c.select(3);
    assert_eq!(c.virtual_index(), 3);
}

#[test]
fn counter_label_tracks_steps() {
    let mut c = CarouselState::new(15);
    c.step(Direction::Prev);
    c.settle(800.0);
    assert_eq!(c.counter_label(), "15/15");
}

// =============================================================
// Wraparound
// =============================================================

#[test]
fn wrap_past_end_shifts_back_one_list() {
    let mut c = CarouselState::new(3);
    c.select(2);
    c.step(Direction::Next);
    assert_eq!(c.virtual_index(), 6);
    let shift = c.wrap().expect("should wrap");
    assert_close(shift, -3.0 * ITEM_TOTAL);
    assert_eq!(c.virtual_index(), 3);
    assert_eq!(c.active_index(), Some(0));
}

#[test]
fn wrap_before_start_shifts_forward_one_list() {
    let mut c = CarouselState::new(3);
    c.step(Direction::Prev);
    assert_eq!(c.virtual_index(), 2);
    let shift = c.wrap().expect("should wrap");
    assert_close(shift, 3.0 * ITEM_TOTAL);
    assert_eq!(c.virtual_index(), 5);
    assert_eq!(c.active_index(), Some(2));
}

#[test]
fn wrap_inside_middle_copy_is_noop() {
    let mut c = CarouselState::new(3);
    c.step(Direction::Next);
    assert_eq!(c.wrap(), None);
}

#[test]
fn wrap_keeps_visual_continuity() {
    let client_width = 480.0;
    let mut c = CarouselState::new(6);
    c.select(5);
    c.settle(client_width);
    c.step(Direction::Next);
    let before = c.target_scroll_left(client_width);
    let image_before = c.active_index();

    let cmd = c.settle(client_width);
    let shift = cmd.shift_by.expect("should wrap");

    assert_close(before + shift, cmd.left);
    assert_eq!(c.active_index(), image_before);
    assert_eq!(cmd.motion, ScrollMotion::Smooth);
}

#[test]
fn wrapping_step_scrolls_like_any_other_step() {
    let mut c = CarouselState::new(4);
    c.select(3);
    c.settle(600.0);

    c.step(Direction::Next);
    let wrapped = c.settle(600.0);
    assert!(wrapped.shift_by.is_some());
    assert_eq!(wrapped.motion, ScrollMotion::Smooth);

    c.step(Direction::Next);
    let normal = c.settle(600.0);
    assert!(normal.shift_by.is_none());
    assert_eq!(wrapped.motion, normal.motion);
}

#[test]
fn auto_advance_across_edge_stays_smooth() {
    let mut c = CarouselState::new(3);
    c.select(2);
    c.settle(400.0);
    let ticket = c.advance_ticket().expect("ticket");
    assert!(c.auto_advance(ticket));
    let cmd = c.settle(400.0);
    assert!(cmd.shift_by.is_some());
    assert_eq!(cmd.motion, ScrollMotion::Smooth);
}

#[test]
fn settle_after_wrap_goes_back_to_smooth() {
    let mut c = CarouselState::new(2);
    c.step(Direction::Prev);
    assert!(c.settle(300.0).shift_by.is_some());
    c.step(Direction::Prev);
    let cmd = c.settle(300.0);
    assert!(cmd.shift_by.is_none());
    assert_eq!(cmd.motion, ScrollMotion::Smooth);
}

#[test]
fn first_settle_is_instant() {
    let mut c = CarouselState::new(4);
    assert_eq!(c.settle(400.0).motion, ScrollMotion::Instant);
}

#[test]
fn target_scroll_left_centers_and_clamps() {
    let mut c = CarouselState::new(4);
    assert_close(c.target_scroll_left(400.0), 4.0 * ITEM_TOTAL - 140.0);
    c.reset(1);
    c.step(Direction::Prev);
    assert_close(c.target_scroll_left(2_000.0), 0.0);
}

// =============================================================
// Auto-advance and interaction
// =============================================================

#[test]
fn auto_advance_moves_one_slot() {
    let mut c = CarouselState::new(4);
    let ticket = c.advance_ticket().expect("ticket");
    assert!(c.auto_advance(ticket));
    assert_eq!(c.virtual_index(), 5);
}

#[test]
fn stale_ticket_is_ignored_after_manual_step() {
    let mut c = CarouselState::new(4);
    let ticket = c.advance_ticket().expect("ticket");
    c.step(Direction::Next);
    assert!(!c.auto_advance(ticket));
    assert_eq!(c.virtual_index(), 5);
}

#[test]
fn interaction_pauses_auto_advance() {
    let mut c = CarouselState::new(4);
    let ticket = c.advance_ticket().expect("ticket");
    c.begin_interaction();
    assert!(c.advance_ticket().is_none());
    assert!(!c.auto_advance(ticket));
}

#[test]
fn idle_timeout_only_honours_latest_interaction() {
    let mut c = CarouselState::new(4);
    let first = c.begin_interaction();
    let second = c.begin_interaction();
    assert!(!c.end_interaction(first));
    assert!(c.is_interacting());
    assert!(c.end_interaction(second));
    assert!(!c.is_interacting());
    assert!(c.advance_ticket().is_some());
}

#[test]
fn cancel_interaction_invalidates_pending_idle_timer() {
    let mut c = CarouselState::new(4);
    let token = c.begin_interaction();
    c.cancel_interaction();
    assert!(!c.is_interacting());
    assert!(!c.end_interaction(token));
}

#[test]
fn reset_returns_to_middle_copy() {
    let mut c = CarouselState::new(4);
    c.step(Direction::Next);
    c.reset(6);
    assert_eq!(c.len(), 6);
    assert_eq!(c.virtual_index(), 6);
    assert_eq!(c.settle(500.0).motion, ScrollMotion::Instant);
}
