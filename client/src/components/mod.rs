//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are theme-agnostic: colors and fonts arrive through CSS custom
//! properties set by the page, and behavior state comes from `crate::state`.

pub mod floating_nav;
pub mod invitation_shell;
pub mod navbar;
pub mod qr_modal;
pub mod reveal_section;
pub mod wedding_gallery;
pub mod wish_board;
