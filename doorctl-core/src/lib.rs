//! Wire codec and transport for a family of LAN-attached door-access
//! controllers: the framed envelope, the per-function message catalog with
//! its bit-packed date/time and "printed-decimal-as-hex" encodings, and a
//! TCP unicast / UDP broadcast-discovery transport client.

pub mod client;
pub mod codec;
pub mod datetime;
pub mod envelope;
pub mod error;
pub mod io;
pub mod messages;
pub mod udp;

pub use client::{Client, ClientConfig, Protocol};
pub use datetime::{insane_b10_to_b16, insane_b16_to_b10, WireDateTime};
pub use envelope::{decode_envelope, encode_envelope, Envelope};
pub use error::Error;
pub use io::{Reader, Writer};
pub use messages::{decode_request, decode_response, Record, RequestPayload, ResponsePayload, WireDecode, WireEncode};
