//! Avatar Pile Core
//!
//! Geometry and layout for "avatar piles": rows of circular or rounded-square
//! avatars where each one is partially hidden behind the next. It includes:
//!
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Colors**: CSS color parsing for fills ([`color::Color`])
//! - **Shapes**: Shape kinds and their corner rounding ([`shape`] module)
//! - **Layout**: The engine computing mask geometry and rows ([`layout`] module)
//!
//! The layout engine is pure: it holds no state and performs no I/O, so it
//! can be called from any number of threads at once.

pub mod color;
pub mod geometry;
pub mod layout;
pub mod shape;
