//! Component system for the Folio TUI.
//!
//! Components own their local UI behavior, read shared state from [`App`]
//! and report side effects as [`Effect`]s instead of mutating navigation state
//! directly. The runtime applies those effects in order.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::{App, Effect};

/// A UI element with its own event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events()` and
///    `handle_mouse_events()`
/// 2. **Rendering**: `render()` draws into the provided area and records any
///    hit-test geometry on `App`
pub(crate) trait Component {
    /// Handle key events while this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events while this component has focus.
    ///
    /// Hit testing uses the areas recorded during the previous render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording the geometry they drew.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
