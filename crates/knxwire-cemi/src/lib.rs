//! CEMI frame codec for KNX link-layer telegrams.
//!
//! The Common External Message Interface (CEMI) is the frame format used to
//! exchange link-layer telegrams between a host application and a KNX
//! interface device, typically carried inside KNXnet/IP tunnelling or
//! bus-monitor connections. Every frame starts with a message code and a
//! length-prefixed ancillary-info field:
//!
//! ```text
//! ┌──────────────┬─────────────┬────────────┬──────────────────────┐
//! │ Message code │ Info length │ Info bytes │ Body                 │
//! │ (1B)         │ n (1B)      │ (n bytes)  │ (code-dependent)     │
//! └──────────────┴─────────────┴────────────┴──────────────────────┘
//! ```
//!
//! The message code selects how the body is interpreted: a bus-monitor
//! indication carries a raw captured link-layer frame, the `L_Data` codes
//! carry a structured link-data body, and every other code round-trips as
//! opaque bytes. Unknown codes are preserved, never rejected.
//!
//! The codec assumes it is handed exactly one frame's worth of stream
//! (one datagram, or an `io::Take` sized by the transport); it does no
//! framing or reassembly of its own.

pub mod addr;
pub mod code;
pub mod codec;
pub mod errcode;
pub mod error;
pub mod ldata;
pub mod reader;
pub mod writer;

pub use addr::{GroupAddress, IndividualAddress};
pub use code::{Dispatch, MessageCode};
pub use codec::{decode_frame, encode_frame, Body, CemiFrame, HEADER_SIZE, MAX_INFO_LEN};
pub use errcode::ErrorCode;
pub use error::{CemiError, Result};
pub use ldata::{ControlField1, ControlField2, LData, Priority};
pub use reader::FrameReader;
pub use writer::FrameWriter;
