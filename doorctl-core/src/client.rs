//! TCP unicast transport.
//!
//! Grounded on `original_source/wire/client.go`'s `Client.init`/`Client.Raw`:
//! lazy dial on first use, a 5-second read/write deadline per call, and
//! close-and-clear-on-error so the next call redials.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::envelope::{decode_envelope, encode_envelope, Envelope};
use crate::error::{classify_io_timeout, Error};
use crate::io::Writer;
use crate::messages::{WireDecode, WireEncode};
use crate::udp;

const DEADLINE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
	Tcp,
	Udp,
}

/// Per-target client configuration. Grounded on the teacher's `BuildOptions`
/// + `impl Default` pattern.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub protocol: Protocol,
	pub controller_address: String,
	pub controller_port: u16,
	pub board_address: u16,
	pub buffer_size: usize,
}

impl ClientConfig {
	pub fn new(controller_address: impl Into<String>, board_address: u16) -> Self {
		ClientConfig {
			protocol: Protocol::Tcp,
			controller_address: controller_address.into(),
			controller_port: 60000,
			board_address,
			buffer_size: 1024,
		}
	}
}

/// A client targeting a single controller. Owns at most one TCP connection,
/// dialed lazily and invalidated on any I/O error.
pub struct Client {
	config: ClientConfig,
	conn: Option<TcpStream>,
}

impl Client {
	pub fn new(config: ClientConfig) -> Self {
		Client { config, conn: None }
	}

	fn ensure_connected(&mut self) -> Result<(), Error> {
		if self.conn.is_some() {
			return Ok(());
		}
		if self.config.protocol != Protocol::Tcp {
			return Err(Error::ProtocolMismatch(format!("{:?}", self.config.protocol)));
		}
		log::debug!("creating connection");
		let addr = format!(
			"{}:{}",
			self.config.controller_address, self.config.controller_port
		);
		log::debug!("dialing (tcp): {addr}");
		let stream = TcpStream::connect(&addr)?;
		log::debug!("connected");
		self.conn = Some(stream);
		Ok(())
	}

	/// Encodes `request`, wraps it in an envelope, writes the frame, reads
	/// the reply frame, and decodes it into `response`. Leaves the
	/// connection open and reusable on success; closes it on any I/O
	/// failure so the next call redials.
	pub fn do_request<Req: WireEncode, Resp: WireDecode>(
		&mut self,
		function: u16,
		request: &Req,
	) -> Result<Resp, Error> {
		let envelope = self.do_with_envelope(function, request)?;
		Resp::from_bytes(&envelope.contents)
	}

	/// Like [`Client::do_request`], but hands back the raw reply envelope
	/// instead of decoding its payload.
	pub fn do_with_envelope<Req: WireEncode>(
		&mut self,
		function: u16,
		request: &Req,
	) -> Result<Envelope, Error> {
		self.ensure_connected()?;

		let payload = request.to_bytes();
		let envelope = Envelope {
			board_address: self.config.board_address,
			function,
			contents: payload,
		};
		let mut message = Writer::new();
		message.write_bytes(&encode_envelope(&envelope));
		let message_bytes = message.into_bytes();

		let buf = self.write_and_read(&message_bytes)?;
		let reply = decode_envelope(&buf)?;
		log::debug!("response: {:x?}", reply.contents);
		Ok(reply)
	}

	/// Writes `message_bytes` and reads one reply into a fresh buffer, both
	/// under the 5-second deadline; a write or read that times out surfaces
	/// as `DeadlineExceeded` rather than a generic `Io` error. On any write
	/// or read I/O failure the connection is dropped (closed) rather than
	/// returned to `self.conn`, so the next call redials; a decode failure
	/// further up does not invalidate the connection, since the I/O itself
	/// succeeded.
	fn write_and_read(&mut self, message_bytes: &[u8]) -> Result<Vec<u8>, Error> {
		let mut conn = self.conn.take().expect("ensure_connected just dialed");
		let buffer_size = self.config.buffer_size;

		let result = (|| -> Result<Vec<u8>, Error> {
			conn.set_write_timeout(Some(DEADLINE))?;
			let bytes_written = conn.write(message_bytes).map_err(classify_io_timeout)?;
			log::debug!("bytes written: {bytes_written}");
			if bytes_written != message_bytes.len() {
				return Err(Error::ShortWrite {
					wrote: bytes_written,
					expected: message_bytes.len(),
					path: Default::default(),
				});
			}

			conn.set_read_timeout(Some(DEADLINE))?;
			let mut buf = vec![0u8; buffer_size];
			let bytes_read = conn.read(&mut buf).map_err(classify_io_timeout)?;
			buf.truncate(bytes_read);
			log::debug!("bytes read: ({bytes_read}) {buf:x?}");
			Ok(buf)
		})();

		if result.is_ok() {
			self.conn = Some(conn);
		}
		result
	}

	/// Runs a UDP broadcast discovery call instead of a unicast TCP
	/// request, collecting every reply as an ordered sequence. Delegates to
	/// [`udp::discover`]; see its docs for the per-interface fan-out and
	/// deadline semantics.
	pub fn discover<Req: WireEncode, Resp: WireDecode>(
		&self,
		function: u16,
		request: &Req,
	) -> Result<Vec<(Envelope, Resp)>, Error> {
		if self.config.protocol != Protocol::Udp {
			return Err(Error::ProtocolMismatch(format!("{:?}", self.config.protocol)));
		}
		udp::discover(&self.config, function, request)
	}

	/// Like [`Client::discover`], but for a scalar response: takes the
	/// first collected packet only and fails `DeadlineExceeded` if nothing
	/// arrived before the deadline. Delegates to [`udp::discover_one`].
	pub fn discover_one<Req: WireEncode, Resp: WireDecode>(
		&self,
		function: u16,
		request: &Req,
	) -> Result<(Envelope, Resp), Error> {
		if self.config.protocol != Protocol::Udp {
			return Err(Error::ProtocolMismatch(format!("{:?}", self.config.protocol)));
		}
		udp::discover_one(&self.config, function, request)
	}
}
