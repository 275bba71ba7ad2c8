//! Pointer interaction and screen-space overlays for the exploration scene.
//!
//! Creature picking feeds a small selection state machine, which in turn
//! drives the detail panel. The remaining overlays follow the app state:
//! loading placeholder, error fallback and usage hints.
//!
//! ## Interaction Flow
//!
//! ```text
//! Pointer<Click> on creature body
//!   └─> SelectionEvent(Creature)
//!       └─> apply_selection_events()
//!           └─> SelectionState::Viewing
//!               └─> refresh_info_panel()
//!
//! Close button
//!   └─> SelectionEvent(Close) ─> SelectionState::Idle
//! ```
//!
//! Clicks on terrain produce `SelectionInput::Terrain`, which never changes
//! the selection.

/// Fallback screen shown in the failed state with a full-reload retry.
pub mod error_fallback;

/// Static usage hints mounted alongside the scene.
pub mod help_overlay;

/// Detail panel for the selected creature with its close button.
pub mod info_panel;

/// Pointer observers for creature and terrain picking, hover markers and
/// camera input capture while a press is held on a creature.
pub mod interaction;

/// Loading placeholder with progress percentage.
pub mod loading_screen;

/// Selection state machine: `Idle` or `Viewing` one creature.
pub mod selection;
