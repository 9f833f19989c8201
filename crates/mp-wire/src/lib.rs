#![warn(clippy::pedantic)]

//! Byte-framing layer for the MessagePack decoder: the [`Channel`] contract
//! a byte source must satisfy, two reference implementations of it, the
//! classic-format tag constants, and the wire-level error type.
//!
//! Nothing in this crate knows what a "value" is — that semantic layer
//! lives in `mp-decoder`.

pub mod channel;
pub mod error;
pub mod tag;

pub use channel::{Channel, ReaderChannel, SliceChannel};
pub use error::WireError;
