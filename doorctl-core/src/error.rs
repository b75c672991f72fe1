use std::io;
use thiserror::Error;

/// Wire-codec and transport errors.
///
/// Field-level errors carry a growing dotted path (e.g. `record.brush_datetime`)
/// so a decode failure deep in a nested struct can be traced back to the field
/// that produced it, per the propagation policy codec callers rely on.
#[derive(Error, Debug)]
pub enum Error {
	#[error("short read: needed {needed} byte(s), had {available} available{path}")]
	ShortRead {
		needed: usize,
		available: usize,
		path: FieldPath,
	},

	#[error("short write: wrote {wrote} byte(s), expected {expected}{path}")]
	ShortWrite {
		wrote: usize,
		expected: usize,
		path: FieldPath,
	},

	#[error("invalid frame: {0}")]
	InvalidFrame(String),

	#[error("checksum mismatch: got 0x{actual:04x}, expected 0x{expected:04x}")]
	ChecksumMismatch { actual: u16, expected: u16 },

	#[error("invalid field{path}: {message}")]
	InvalidField { message: String, path: FieldPath },

	#[error("trailing garbage{path}: {bytes:x?}")]
	TrailingGarbage { bytes: Vec<u8>, path: FieldPath },

	#[error("unknown function: 0x{0:04x}")]
	UnknownFunction(u16),

	#[error("deadline exceeded")]
	DeadlineExceeded,

	#[error("protocol mismatch: {0:?} is not a supported transport protocol")]
	ProtocolMismatch(String),

	#[error("config error: {0}")]
	ConfigError(String),

	#[error("i/o error")]
	Io(#[from] io::Error),
}

/// Maps a read/write failure to `DeadlineExceeded` if it was actually the
/// configured socket timeout firing (`WouldBlock` on platforms that
/// implement deadlines via non-blocking polling, `TimedOut` elsewhere),
/// falling back to the blanket `Io` conversion for every other failure.
pub fn classify_io_timeout(e: io::Error) -> Error {
	match e.kind() {
		io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Error::DeadlineExceeded,
		_ => Error::Io(e),
	}
}

/// A dotted field path, rendered as `" (field a.b.c)"` when non-empty and
/// elided entirely otherwise.
#[derive(Debug, Default, Clone)]
pub struct FieldPath(Option<String>);

impl std::fmt::Display for FieldPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Some(name) => write!(f, " (field {name})"),
			None => Ok(()),
		}
	}
}

impl Error {
	/// Prefixes a field-level error with the name of the enclosing field.
	///
	/// Meant to be used at each level of a nested `decode` as the error
	/// unwinds, e.g. `decode_record(r).map_err(|e| e.with_field("record"))`.
	pub fn with_field(self, name: impl Into<String>) -> Error {
		let name = name.into();
		match self {
			Error::ShortRead {
				needed,
				available,
				path,
			} => Error::ShortRead {
				needed,
				available,
				path: path.prefixed(name),
			},
			Error::ShortWrite {
				wrote,
				expected,
				path,
			} => Error::ShortWrite {
				wrote,
				expected,
				path: path.prefixed(name),
			},
			Error::InvalidField { message, path } => Error::InvalidField {
				message,
				path: path.prefixed(name),
			},
			Error::TrailingGarbage { bytes, path } => Error::TrailingGarbage {
				bytes,
				path: path.prefixed(name),
			},
			other => other,
		}
	}
}

impl FieldPath {
	fn prefixed(self, name: String) -> FieldPath {
		match self.0 {
			Some(rest) => FieldPath(Some(format!("{name}.{rest}"))),
			None => FieldPath(Some(name)),
		}
	}
}

impl From<String> for FieldPath {
	fn from(name: String) -> Self {
		FieldPath(Some(name))
	}
}

impl From<&str> for FieldPath {
	fn from(name: &str) -> Self {
		FieldPath(Some(name.to_string()))
	}
}
