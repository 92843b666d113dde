//! Browser-free motion logic: reveal state, parallax math, springs and the
//! cursor follower.

pub mod cursor;
pub mod parallax;
pub mod reveal;
pub mod spring;
