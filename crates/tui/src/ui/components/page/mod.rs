//! The scrolling portfolio page.

mod page_component;
pub mod sections;

pub use page_component::PageComponent;
