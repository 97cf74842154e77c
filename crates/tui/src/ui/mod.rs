//! UI rendering module for the Folio TUI.
//!
//! This module provides the component tree, the event loop, the theme
//! catalog, and layout utilities.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
