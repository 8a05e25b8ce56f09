pub mod cards;
pub mod icon;
pub mod magnetic;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod styles;

pub use icon::{Icon, icons};
pub use magnetic::MagneticButton;
pub use nav::{Header, MobileMenu, NavContext, provide_nav_context, use_nav_context};
pub use reveal::Reveal;
pub use scroll::{ScrollContext, provide_scroll_context, use_scroll_context};
pub use styles::SiteStyles;
