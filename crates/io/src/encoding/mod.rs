// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod hex;
mod primitives;
mod reader;
mod traits;
mod varint;

#[cfg(test)]
mod tests;

pub use self::hex::*;
pub use reader::SliceReader;
pub use traits::{OntDecode, OntEncode, OntRead, OntWrite};
pub use varint::{read_varint, varint_size, write_varint};
