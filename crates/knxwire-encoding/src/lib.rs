//! Byte-level read/write primitives for KNX wire codecs.
//!
//! This is the lowest layer of knxwire. Frame codecs build on the
//! primitives here instead of calling `std::io` directly, so that short
//! reads, interrupted syscalls, and byte accounting are handled in one
//! place:
//! - Exact reads either fill the requested buffer completely or fail.
//! - Writes retry `Interrupted`/`WouldBlock` and never report partial
//!   success.
//! - Every operation reports the number of bytes it moved.

pub mod error;
pub mod read;
pub mod write;

pub use error::{EncodingError, Result};
pub use read::{read_bytes, read_exact, read_to_end, read_u16_be, read_u8};
pub use write::{write_all, write_u16_be, write_u8};
