// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! # Ontio IO
//!
//! Byte-level building blocks shared by the script builder and the transaction
//! model:
//!
//! - [`ByteArray`]: an append-only byte buffer with hex text round-trip.
//! - [`OntEncode`] / [`OntDecode`]: the Ontology binary wire format, built on
//!   the [`OntWrite`] / [`OntRead`] writer and reader abstractions.
//! - [`write_varint`] / [`read_varint`]: the variable-length integer used for
//!   every count and length prefix on the wire.
//!
//! ```rust
//! use ontio_io::{ByteArray, ToHex};
//!
//! let mut buf = ByteArray::new();
//! buf.push_var_bytes(b"ont");
//! assert_eq!(buf.to_hex(), "036f6e74");
//! ```

pub mod bytes;
pub mod encoding;
pub mod error;

pub use bytes::ByteArray;
pub use encoding::*;
pub use error::{DecodeError, DecodeResult};
