//! Core interaction and animation state for the NEXUS page
//!
//! Pure state machines and function tables with no DOM dependency; the
//! `ui` layer binds them to browser events.

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod motion;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod schedule;
