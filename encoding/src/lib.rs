#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! Encoding and decoding primitives of the ingest codec.
//!
//! This crate provides the [chunked byte streams](stream)
//! holding the bytes of a file,
//! the [transfer syntax] specifier with its consistency check,
//! and the element header [decoder](decode) and [encoder](encode).
//!
//! All APIs are synchronous and operate on in-memory chunks.
//!
//! [transfer syntax]: transfer_syntax

pub mod decode;
pub mod encode;
pub mod stream;
pub mod transfer_syntax;

pub use decode::{decode_header, DecodedHeader, VrContext};
pub use encode::{encode_header, encode_value};
pub use stream::{Chunk, ChunkChain, Cursor, InputStream, OutputStream};
pub use transfer_syntax::{Endianness, PixelEncoding, TransferSyntax, TypeTagging};

// re-export crates that are part of the public API
pub use byteordered;
