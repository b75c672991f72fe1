//! Shared tag semantics.
//!
//! These free functions implement, once, the parts of the tag language in
//! that aren't specific to any one message: the optional-nested-value
//! sentinel, the trailing-zero guard, and byte-sequence reads. Each message
//! struct's own `encode`/`decode` (see `messages.rs`) is a short sequence of
//! calls into these plus `io::Reader`/`io::Writer`, in the teacher's
//! `msg.rs` per-variant style, rather than a from-scratch reimplementation
//! of the tag semantics at each call site.

use crate::error::{Error, FieldPath};
use crate::io::{Reader, Writer};

/// `length:N,null:B` for an optional nested value: read `n` bytes; if every
/// byte equals `null`, the field is absent. Otherwise decode the `n` bytes
/// through `decode`.
pub fn read_optional<'a, T>(
	r: &mut Reader<'a>,
	n: usize,
	null: u8,
	decode: impl FnOnce(&mut Reader<'a>) -> Result<T, Error>,
) -> Result<Option<T>, Error> {
	let mut slot = r.read(n)?;
	let bytes = slot.bytes();
	if bytes.iter().all(|&b| b == null) {
		return Ok(None);
	}
	Ok(Some(decode(&mut slot)?))
}

/// The encode half of `length:N,null:B`: an absent value writes `n` copies
/// of `null`; a present value is encoded and then zero/null-padded (or
/// truncated, which should never happen for well-formed fixed-size values)
/// to exactly `n` bytes.
pub fn write_optional(w: &mut Writer, n: usize, null: u8, value: Option<impl FnOnce(&mut Writer)>) {
	match value {
		None => {
			for _ in 0..n {
				w.write_u8(null);
			}
		}
		Some(encode) => {
			let mut inner = Writer::new();
			encode(&mut inner);
			let mut bytes = inner.into_bytes();
			bytes.resize(n, null);
			w.write_bytes(&bytes);
		}
	}
}

/// Terminal `length:*` guard: the remainder of `r` must be all zero,
/// otherwise `TrailingGarbage`.
pub fn assert_trailing_zeros(r: &mut Reader) -> Result<(), Error> {
	let rest = r.read_bytes(r.length())?;
	if rest.iter().any(|&b| b != 0) {
		return Err(Error::TrailingGarbage {
			bytes: rest.to_vec(),
			path: FieldPath::default(),
		});
	}
	Ok(())
}

/// `length:*` consuming to the end of the payload as an opaque byte
/// sequence (used where the tail is genuinely unknown, e.g.
/// `GetBasicInfoResponse.unknown2`, rather than asserted to be zero).
pub fn read_remainder<'a>(r: &mut Reader<'a>) -> Result<&'a [u8], Error> {
	r.read_bytes(r.length())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn optional_absent_when_all_null_bytes() {
		let mut r = Reader::new(&[0xff; 8]);
		let got: Option<u8> = read_optional(&mut r, 8, 0xff, |r| r.read_u8()).unwrap();
		assert_eq!(got, None);
	}

	#[test]
	fn optional_present_decodes_through_nested_reader() {
		let mut r = Reader::new(&[0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
		let got = read_optional(&mut r, 8, 0xff, |r| r.read_u8()).unwrap();
		assert_eq!(got, Some(0x05));
	}

	#[test]
	fn trailing_nonzero_byte_is_rejected() {
		let mut r = Reader::new(&[0, 0, 1]);
		match assert_trailing_zeros(&mut r) {
			Err(Error::TrailingGarbage { .. }) => {}
			other => panic!("expected TrailingGarbage, got {other:?}"),
		}
	}

	#[test]
	fn all_zero_trailing_is_accepted() {
		let mut r = Reader::new(&[0, 0, 0]);
		assert!(assert_trailing_zeros(&mut r).is_ok());
	}
}
