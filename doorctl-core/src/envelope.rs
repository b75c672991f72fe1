//! Envelope framing.
//!
//! Byte-for-byte grounded on `original_source/wire/envelope.go`:
//! `0x7E` start marker, `board_address`/`function` (LE u16), payload padded
//! to a 26-byte inner region, additive u16 checksum, `0x0D` end marker.

use crate::error::Error;
use crate::io::{Reader, Writer};

pub const START_BYTE: u8 = 0x7E;
pub const END_BYTE: u8 = 0x0D;
pub const MIN_INNER_LEN: usize = 26;

/// The transport frame: a board address, a function opcode, and an opaque
/// payload. Never stored; constructed per request and per response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
	pub board_address: u16,
	pub function: u16,
	pub contents: Vec<u8>,
}

pub fn encode_envelope(e: &Envelope) -> Vec<u8> {
	let mut inner = Writer::new();
	inner.write_u16(e.board_address);
	inner.write_u16(e.function);
	inner.write_bytes(&e.contents);
	// Pad the contents to 26 bytes. More than 26 bytes is fine.
	let padding = MIN_INNER_LEN.saturating_sub(4 + e.contents.len());
	for _ in 0..padding {
		inner.write_u8(0);
	}

	let inner_bytes = inner.into_bytes();
	let checksum = additive_checksum(&inner_bytes);

	let mut out = Writer::new();
	out.write_u8(START_BYTE);
	out.write_bytes(&inner_bytes);
	out.write_u16(checksum);
	out.write_u8(END_BYTE);
	out.into_bytes()
}

pub fn decode_envelope(data: &[u8]) -> Result<Envelope, Error> {
	let mut r = Reader::new(data);

	let start = r.read_u8()?;
	if start != START_BYTE {
		return Err(Error::InvalidFrame(format!(
			"invalid start byte: 0x{start:02x} (expected 0x{START_BYTE:02x})"
		)));
	}

	if r.length() < 3 {
		return Err(Error::InvalidFrame(format!(
			"frame too short: {} byte(s) remain after start marker",
			r.length()
		)));
	}
	let inner_len = r.length() - 3; // 2 bytes checksum + 1 byte end marker.
	let inner_bytes = r.read_bytes(inner_len)?;

	let expected_checksum = r.read_u16()?;
	let end = r.read_u8()?;
	if end != END_BYTE {
		return Err(Error::InvalidFrame(format!(
			"invalid end byte: 0x{end:02x} (expected 0x{END_BYTE:02x})"
		)));
	}
	if r.length() != 0 {
		return Err(Error::InvalidFrame(format!(
			"trailing data after frame: {} byte(s)",
			r.length()
		)));
	}

	let actual_checksum = additive_checksum(inner_bytes);
	if actual_checksum != expected_checksum {
		return Err(Error::ChecksumMismatch {
			actual: actual_checksum,
			expected: expected_checksum,
		});
	}

	let mut payload = Reader::new(inner_bytes);
	let board_address = payload.read_u16()?;
	let function = payload.read_u16()?;
	let contents = payload.read_bytes(payload.length())?.to_vec();

	Ok(Envelope {
		board_address,
		function,
		contents,
	})
}

fn additive_checksum(data: &[u8]) -> u16 {
	let mut checksum: u16 = 0;
	for &b in data {
		checksum = checksum.wrapping_add(u16::from(b));
	}
	checksum
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hex(s: &str) -> Vec<u8> {
		(0..s.len())
			.step_by(2)
			.map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
			.collect()
	}

	fn to_hex(b: &[u8]) -> String {
		b.iter().map(|x| format!("{x:02x}")).collect()
	}

	#[test]
	fn e1_envelope_round_trip() {
		let input = hex("7E57F282100000000000000000000000000000000000000000000000000000DB010D");
		let e = decode_envelope(&input).unwrap();
		assert_eq!(e.board_address, 0xF257);
		assert_eq!(e.function, 0x1082);
		assert_eq!(e.contents, vec![0u8; 26]);
		assert_eq!(to_hex(&encode_envelope(&e)), to_hex(&input));
	}

	#[test]
	fn encoded_inner_region_is_at_least_26_bytes() {
		let e = Envelope {
			board_address: 1,
			function: 2,
			contents: vec![9, 9, 9],
		};
		let encoded = encode_envelope(&e);
		// start(1) + inner + checksum(2) + end(1)
		assert!(encoded.len() - 4 >= MIN_INNER_LEN);
		let decoded = decode_envelope(&encoded).unwrap();
		assert_eq!(decoded.board_address, e.board_address);
		assert_eq!(decoded.function, e.function);
		assert!(decoded.contents.starts_with(&e.contents));
	}

	#[test]
	fn flipped_bit_fails_checksum() {
		let mut input = hex("7E57F282100000000000000000000000000000000000000000000000000000DB010D");
		input[5] ^= 0x01;
		match decode_envelope(&input) {
			Err(Error::ChecksumMismatch { .. }) => {}
			other => panic!("expected ChecksumMismatch, got {other:?}"),
		}
	}

	#[test]
	fn bad_start_byte_is_invalid_frame() {
		let mut input = hex("7E57F282100000000000000000000000000000000000000000000000000000DB010D");
		input[0] = 0x00;
		match decode_envelope(&input) {
			Err(Error::InvalidFrame(_)) => {}
			other => panic!("expected InvalidFrame, got {other:?}"),
		}
	}
}
