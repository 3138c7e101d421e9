pub mod dispatch;
pub mod scroll;
pub mod style;

pub use dispatch::{
    activate, follow, use_smart_navigation, LinkTarget, Navigator, SmartNavigation,
};
pub use scroll::watch_window_scroll;
pub use style::{is_scrolled, MenuState, NavStyle, SCROLL_THRESHOLD};
