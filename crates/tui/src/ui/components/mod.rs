//! UI components: splash, page, navigation bar and section menu.

pub mod common;
pub mod component;
pub mod loading;
pub mod menu;
pub mod nav_bar;
pub mod page;

pub(crate) use component::Component;
pub use loading::LoadingComponent;
pub use menu::MenuComponent;
pub use nav_bar::NavBarComponent;
pub use page::PageComponent;
