//! Browser bindings for the motion and theme logic. Every subscription made
//! here is owned by a guard that releases it on drop.

pub mod cursor;
pub mod frame;
pub mod listener;
pub mod observer;
pub mod parallax;
pub mod reveal;
pub mod theme;
