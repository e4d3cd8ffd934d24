//! Parameter collection for avatar piles.
//!
//! Users describe a pile with a handful of textual parameters (`shape`,
//! `size`, `gap`, `instances` and the optional `depth` and
//! `useFullEndCap`). This crate parses and validates them, suggests
//! completions while they are typed, and resolves defaults into an
//! [`avatar_pile_core::layout::LayoutConfig`]. Range checks happen here and
//! only here; the layout engine trusts its input.

pub mod error;
pub mod suggest;
pub mod value;

mod key;
mod resolve;

pub use error::ParamError;
pub use key::ParameterKey;
pub use resolve::{DEFAULT_DEPTH_PERCENT, Defaults, RawParameters, resolve};
