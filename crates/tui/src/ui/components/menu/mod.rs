//! Section menu overlay for narrow terminals.

mod menu_component;
mod state;

pub use menu_component::MenuComponent;
pub use state::MenuOverlayState;
