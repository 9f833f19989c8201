#![warn(clippy::pedantic)]
//! Semantic decoding layer for classic MessagePack: turns the byte-framing
//! primitives in `mp-wire` into a streaming, typed token reader.

pub mod acceptor;
pub mod config;
pub mod error;
pub mod value_type;

mod cache;
mod decoder;

pub use acceptor::{
    Acceptor, ArrayAcceptor, BigIntegerAcceptor, BooleanAcceptor, ByteArrayAcceptor,
    DoubleAcceptor, IntAcceptor, LongAcceptor, MapAcceptor, NilAcceptor, StringAcceptor,
};
pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use error::{DecodeError, SizeLimitKind};
pub use value_type::ValueType;
