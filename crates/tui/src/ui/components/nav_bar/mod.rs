//! Top navigation bar.
//!
//! Shows the brand, one link per section with the active one underlined, and
//! a "Hire Me" button. Narrow terminals get a menu button that opens the
//! section menu overlay instead of the links. The bar hides while the reader
//! scrolls down and returns on any upward scroll.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::NavBarState;
