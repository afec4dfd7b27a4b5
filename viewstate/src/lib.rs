pub mod config;
pub mod contact;
pub mod debounce;
pub mod header;
pub mod lazy;
pub mod menu;
pub mod reveal;
pub mod sections;
pub mod theme;
pub mod throttle;
pub mod view;

pub use view::ViewState;
