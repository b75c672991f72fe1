//! Message catalog: one request/response struct pair per known function
//! code, each with a hand-written `encode`/`decode` in the teacher's
//! per-variant `match`-arm style (`msg.rs`'s `RawMessage::build`/`unpack!`),
//! built on top of the shared helpers in `codec.rs` and `datetime.rs`.
//!
//! Byte layouts are grounded field-for-field on the corresponding
//! `original_source/wire/functions_*.go` file; the per-opcode doc comment
//! below each names it.

use crate::codec::{assert_trailing_zeros, read_remainder};
use crate::datetime::{
	read_date, read_datetime, read_hexdate, read_hexdatetime, write_date, write_datetime,
	write_hexdate, write_hexdatetime, WireDateTime,
};
use crate::error::Error;
use crate::io::{Reader, Writer};

/// Known function (opcode) codes.
pub mod function {
	pub const GET_OPERATION_STATUS: u16 = 0x1081;
	pub const GET_BASIC_INFO: u16 = 0x1082;
	pub const SET_TIME: u16 = 0x108B;
	pub const GET_RECORD: u16 = 0x108D;
	pub const DELETE_RECORD: u16 = 0x108E;
	pub const CLEAR_UPLOAD: u16 = 0x1093;
	pub const GET_UPLOAD: u16 = 0x1095;
	pub const UPDATE_CONTROL_PERIOD: u16 = 0x1097;
	pub const UNKNOWN_1098: u16 = 0x1098;
	pub const TAIL_PLUS_PERMISSIONS: u16 = 0x109B;
	pub const OPEN_DOOR: u16 = 0x109D;
	pub const GET_SETTING: u16 = 0x10F1;
	pub const UPDATE_SETTING: u16 = 0x10F4;
	pub const GET_NETWORK_INFO: u16 = 0x1101;
	pub const UPDATE_PERMISSIONS: u16 = 0x1107;
	pub const DELETE_PERMISSIONS: u16 = 0x1108;
	pub const SET_NETWORK_INFO: u16 = 0x11F2;
	/// Recognized but deliberately unimplemented: multiple subformats keyed
	/// by two inner bytes, left out per the design notes.
	pub const UNKNOWN_10F9: u16 = 0x10F9;
}

/// A request payload that can be encoded onto the wire.
pub trait WireEncode {
	fn encode(&self, w: &mut Writer);

	fn to_bytes(&self) -> Vec<u8> {
		let mut w = Writer::new();
		self.encode(&mut w);
		w.into_bytes()
	}
}

/// A response payload that can be decoded from a function's payload bytes.
pub trait WireDecode: Sized {
	fn decode(r: &mut Reader) -> Result<Self, Error>;

	fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		let mut r = Reader::new(bytes);
		Self::decode(&mut r)
	}
}

// ---------------------------------------------------------------------
// 0x1081 GetOperationStatus — original_source/wire/functions_getoperationstatus.go

/// A single access-log entry (8 bytes on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
	pub id_number: u16,
	pub area_number: u8,
	pub record_state: u8,
	pub brush_datetime: WireDateTime,
}

impl Record {
	/// 1-based door index (1-4), or 0 if no specific door applies.
	///
	/// The special-case table below only applies when `area_number == 0`
	/// and `id_number < 100`, where the id/state pair encodes a
	/// non-access-event action (button press, remote open, alarms, ...)
	/// rather than an ordinary card brush.
	pub fn door(&self) -> u8 {
		if self.area_number == 0 && self.id_number < 100 {
			let low_bits = self.id_number & 0b1100;
			if low_bits == 0b0000 || low_bits == 0b1000 || low_bits == 0b1100 {
				return ((self.id_number as u8) & 0b11) + 1;
			}
			if self.id_number == 0b0101 {
				return (self.record_state & 0b11) + 1;
			}
			if self.id_number == 0b0100 || self.id_number == 0b0110 {
				return 0;
			}
		}
		(self.record_state & 0b11) + 1
	}

	pub fn access_granted(&self) -> bool {
		self.record_state & 0b1000_0000 == 0
	}
}

const RECORD_SLOT_LEN: usize = 8;

fn decode_record(r: &mut Reader) -> Result<Record, Error> {
	let id_number = r.read_u16()?;
	let area_number = r.read_u8()?;
	let record_state = r.read_u8()?;
	let brush_datetime = read_datetime(r).map_err(|e| e.with_field("brush_datetime"))?;
	Ok(Record {
		id_number,
		area_number,
		record_state,
		brush_datetime,
	})
}

fn encode_record(w: &mut Writer, record: &Record) {
	w.write_u16(record.id_number);
	w.write_u8(record.area_number);
	w.write_u8(record.record_state);
	write_datetime(w, &record.brush_datetime);
}

/// Reads an optional `Record` slot: 8 bytes, absent when every byte is
/// `0x00` or every byte is `0xff` (the spec documents both sentinels; the
/// source's own tag only names `0xff`, the other is honored too since it
/// decodes to the same "no record" meaning and never collides with a real
/// record, whose id/area/state bytes cannot all be simultaneously zero for
/// a genuine brush event alongside a non-trivial timestamp).
fn decode_optional_record(r: &mut Reader) -> Result<Option<Record>, Error> {
	let mut slot = r.read(RECORD_SLOT_LEN)?;
	let bytes = slot.bytes();
	if bytes.iter().all(|&b| b == 0x00) || bytes.iter().all(|&b| b == 0xff) {
		return Ok(None);
	}
	Ok(Some(decode_record(&mut slot).map_err(|e| e.with_field("record"))?))
}

fn encode_optional_record(w: &mut Writer, record: &Option<Record>) {
	match record {
		None => w.write_bytes(&[0xff; RECORD_SLOT_LEN]),
		Some(r) => encode_record(w, r),
	}
}

pub struct GetOperationStatusRequest {
	/// `0` and `0xFFFFFFFF` both mean "the latest record".
	pub record_index: u32,
}

impl WireEncode for GetOperationStatusRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u32(self.record_index);
	}
}

impl WireDecode for GetOperationStatusRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let record_index = r.read_u32()?;
		assert_trailing_zeros(r)?;
		Ok(GetOperationStatusRequest { record_index })
	}
}

pub struct GetOperationStatusResponse {
	pub current_time: WireDateTime,
	pub record_count: u32,
	pub popedom_amount: u16,
	pub record: Option<Record>,
	pub relay_status: u8,
	pub magnet_state: u8,
	pub reserved1: u8,
	pub fault_number: u8,
	pub reserved2: u8,
	pub reserved3: u8,
}

impl WireEncode for GetOperationStatusResponse {
	fn encode(&self, w: &mut Writer) {
		write_hexdatetime(w, &self.current_time);
		w.write_u24(self.record_count);
		w.write_u16(self.popedom_amount);
		encode_optional_record(w, &self.record);
		w.write_u8(self.relay_status);
		w.write_u8(self.magnet_state);
		w.write_u8(self.reserved1);
		w.write_u8(self.fault_number);
		w.write_u8(self.reserved2);
		w.write_u8(self.reserved3);
	}
}

impl WireDecode for GetOperationStatusResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let current_time = read_hexdatetime(r).map_err(|e| e.with_field("current_time"))?;
		let record_count = r.read_u24().map_err(|e| e.with_field("record_count"))?;
		let popedom_amount = r.read_u16().map_err(|e| e.with_field("popedom_amount"))?;
		let record = decode_optional_record(r)?;
		let relay_status = r.read_u8()?;
		let magnet_state = r.read_u8()?;
		let reserved1 = r.read_u8()?;
		let fault_number = r.read_u8()?;
		let reserved2 = r.read_u8()?;
		let reserved3 = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(GetOperationStatusResponse {
			current_time,
			record_count,
			popedom_amount,
			record,
			relay_status,
			magnet_state,
			reserved1,
			fault_number,
			reserved2,
			reserved3,
		})
	}
}

// ---------------------------------------------------------------------
// 0x1082 GetBasicInfo — original_source/wire/functions_getbasicinfo.go

pub struct GetBasicInfoRequest;

impl WireEncode for GetBasicInfoRequest {
	fn encode(&self, _w: &mut Writer) {}
}

impl WireDecode for GetBasicInfoRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		assert_trailing_zeros(r)?;
		Ok(GetBasicInfoRequest)
	}
}

pub struct GetBasicInfoResponse {
	pub issue_date: WireDateTime,
	pub version: u8,
	pub model: u8,
	/// Opaque trailing bytes. Modeled as consuming to the end of the
	/// payload (current `functions_getbasicinfo.go`), not as a fixed
	/// 21-byte field (a superseded historical version) — see DESIGN.md.
	pub unknown: Vec<u8>,
}

impl WireEncode for GetBasicInfoResponse {
	fn encode(&self, w: &mut Writer) {
		write_hexdate(w, &self.issue_date);
		w.write_u8(self.version);
		w.write_u8(self.model);
		w.write_bytes(&self.unknown);
	}
}

impl WireDecode for GetBasicInfoResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let issue_date = read_hexdate(r).map_err(|e| e.with_field("issue_date"))?;
		let version = r.read_u8()?;
		let model = r.read_u8()?;
		let unknown = read_remainder(r)?.to_vec();
		assert_trailing_zeros(r)?;
		Ok(GetBasicInfoResponse {
			issue_date,
			version,
			model,
			unknown,
		})
	}
}

// ---------------------------------------------------------------------
// 0x108B SetTime — original_source/wire/functions_settime.go

pub struct SetTimeRequest {
	pub current_time: WireDateTime,
}

impl WireEncode for SetTimeRequest {
	fn encode(&self, w: &mut Writer) {
		write_hexdatetime(w, &self.current_time);
	}
}

impl WireDecode for SetTimeRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let current_time = read_hexdatetime(r).map_err(|e| e.with_field("current_time"))?;
		assert_trailing_zeros(r)?;
		Ok(SetTimeRequest { current_time })
	}
}

pub struct SetTimeResponse {
	pub current_time: WireDateTime,
}

impl WireEncode for SetTimeResponse {
	fn encode(&self, w: &mut Writer) {
		write_hexdatetime(w, &self.current_time);
	}
}

impl WireDecode for SetTimeResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let current_time = read_hexdatetime(r).map_err(|e| e.with_field("current_time"))?;
		assert_trailing_zeros(r)?;
		Ok(SetTimeResponse { current_time })
	}
}

// ---------------------------------------------------------------------
// 0x108D GetRecord — original_source/wire/functions_getrecord.go

pub struct GetRecordRequest {
	pub record_index: u32,
}

impl WireEncode for GetRecordRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u32(self.record_index);
	}
}

impl WireDecode for GetRecordRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let record_index = r.read_u32()?;
		assert_trailing_zeros(r)?;
		Ok(GetRecordRequest { record_index })
	}
}

pub struct GetRecordResponse {
	pub card_number: u16,
	pub area_number: u8,
	pub brush_card_state: u8,
	pub brush_card_datetime: WireDateTime,
	/// Opaque remainder (18 bytes in practice).
	pub unknown: Vec<u8>,
}

impl WireEncode for GetRecordResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(self.card_number);
		w.write_u8(self.area_number);
		w.write_u8(self.brush_card_state);
		write_datetime(w, &self.brush_card_datetime);
		w.write_bytes(&self.unknown);
	}
}

impl WireDecode for GetRecordResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let card_number = r.read_u16()?;
		let area_number = r.read_u8()?;
		let brush_card_state = r.read_u8()?;
		let brush_card_datetime = read_datetime(r).map_err(|e| e.with_field("brush_card_datetime"))?;
		let unknown = read_remainder(r)?.to_vec();
		assert_trailing_zeros(r)?;
		Ok(GetRecordResponse {
			card_number,
			area_number,
			brush_card_state,
			brush_card_datetime,
			unknown,
		})
	}
}

// ---------------------------------------------------------------------
// 0x108E DeleteRecord — original_source/wire/functions_deleterecord.go

pub struct DeleteRecordRequest {
	/// Index to delete; record indexes are recalculated by the controller
	/// after this operation.
	pub record_index: u32,
	pub unknown: [u8; 4],
}

impl WireEncode for DeleteRecordRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u32(self.record_index);
		w.write_bytes(&self.unknown);
	}
}

impl WireDecode for DeleteRecordRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let record_index = r.read_u32()?;
		let unknown_bytes = r.read_bytes(4)?;
		let mut unknown = [0u8; 4];
		unknown.copy_from_slice(unknown_bytes);
		assert_trailing_zeros(r)?;
		Ok(DeleteRecordRequest {
			record_index,
			unknown,
		})
	}
}

pub struct DeleteRecordResponse {
	/// `0` means success.
	pub result: u8,
}

impl WireEncode for DeleteRecordResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for DeleteRecordResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(DeleteRecordResponse { result })
	}
}

// ---------------------------------------------------------------------
// 0x1093 ClearUpload — original_source/wire/functions_clearupload.go

pub struct ClearUploadRequest;

impl WireEncode for ClearUploadRequest {
	fn encode(&self, _w: &mut Writer) {}
}

impl WireDecode for ClearUploadRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		assert_trailing_zeros(r)?;
		Ok(ClearUploadRequest)
	}
}

pub struct ClearUploadResponse {
	pub result: u8,
}

impl WireEncode for ClearUploadResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for ClearUploadResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(ClearUploadResponse { result })
	}
}

// ---------------------------------------------------------------------
// 0x1095 GetUpload — original_source/wire/functions_getupload.go
//
// The response body matches the "permission (popedom) record" shape from
// the data model: id, area, door, open-date, close-date, control index,
// 3-byte password, four standby bytes.

pub struct GetUploadRequest {
	pub index: u16,
}

impl WireEncode for GetUploadRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(self.index);
	}
}

impl WireDecode for GetUploadRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let index = r.read_u16()?;
		assert_trailing_zeros(r)?;
		Ok(GetUploadRequest { index })
	}
}

pub struct GetUploadResponse {
	pub id_number: u16,
	pub area_number: u8,
	pub door_number: u8,
	pub start_date: WireDateTime,
	pub end_date: WireDateTime,
	pub time: u8,
	pub password: u32,
	pub standby: [u8; 4],
}

impl GetUploadResponse {
	/// The permission slot sentinel per the data model: all 16 body bytes
	/// are `0xff`. Checked on the raw bytes before decoding the nested
	/// dates, since an all-`0xff` date would otherwise fail decode with an
	/// out-of-range month.
	pub fn is_empty_slot(&self) -> bool {
		self.id_number == 0xffff
			&& self.area_number == 0xff
			&& self.door_number == 0xff
			&& self.time == 0xff
			&& self.password == 0x00ff_ffff
			&& self.standby == [0xff; 4]
	}
}

impl WireEncode for GetUploadResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(self.id_number);
		w.write_u8(self.area_number);
		w.write_u8(self.door_number);
		write_date(w, &self.start_date);
		write_date(w, &self.end_date);
		w.write_u8(self.time);
		w.write_u24(self.password);
		w.write_bytes(&self.standby);
	}
}

impl WireDecode for GetUploadResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let mut body = r.read(16)?;
		if body.bytes().iter().all(|&b| b == 0xff) {
			assert_trailing_zeros(r)?;
			return Ok(GetUploadResponse {
				id_number: 0xffff,
				area_number: 0xff,
				door_number: 0xff,
				start_date: WireDateTime::default(),
				end_date: WireDateTime::default(),
				time: 0xff,
				password: 0x00ff_ffff,
				standby: [0xff; 4],
			});
		}
		let id_number = body.read_u16()?;
		let area_number = body.read_u8()?;
		let door_number = body.read_u8()?;
		let start_date = read_date(&mut body).map_err(|e| e.with_field("start_date"))?;
		let end_date = read_date(&mut body).map_err(|e| e.with_field("end_date"))?;
		let time = body.read_u8()?;
		let password = body.read_u24()?;
		let standby_bytes = body.read_bytes(4)?;
		let mut standby = [0u8; 4];
		standby.copy_from_slice(standby_bytes);
		assert_trailing_zeros(r)?;
		Ok(GetUploadResponse {
			id_number,
			area_number,
			door_number,
			start_date,
			end_date,
			time,
			password,
			standby,
		})
	}
}

// ---------------------------------------------------------------------
// 0x1097 UpdateControlPeriod — original_source/wire/functions_updatecontrolperiod.go

pub struct UpdateControlPeriod {
	pub time_index: u16,
	pub week_control: u8,
	pub next_link_time_index: u8,
	pub standby1: u8,
	pub standby2: u8,
	pub start_time1: WireDateTime,
	pub end_time1: WireDateTime,
	pub start_time2: WireDateTime,
	pub end_time2: WireDateTime,
	pub start_time3: WireDateTime,
	pub end_time3: WireDateTime,
	pub start_date: WireDateTime,
	pub end_date: WireDateTime,
	pub standby3: u8,
	pub standby4: u8,
	pub standby5: u8,
	pub standby6: u8,
}

/// Request and response share the same shape: the controller simply echoes
/// the configuration back (`type UpdateControlPeriodResponse
/// UpdateControlPeriodRequest` in the original source).
pub type UpdateControlPeriodRequest = UpdateControlPeriod;
pub type UpdateControlPeriodResponse = UpdateControlPeriod;

impl WireEncode for UpdateControlPeriod {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(self.time_index);
		w.write_u8(self.week_control);
		w.write_u8(self.next_link_time_index);
		w.write_u8(self.standby1);
		w.write_u8(self.standby2);
		crate::datetime::write_time(w, &self.start_time1);
		crate::datetime::write_time(w, &self.end_time1);
		crate::datetime::write_time(w, &self.start_time2);
		crate::datetime::write_time(w, &self.end_time2);
		crate::datetime::write_time(w, &self.start_time3);
		crate::datetime::write_time(w, &self.end_time3);
		write_date(w, &self.start_date);
		write_date(w, &self.end_date);
		w.write_u8(self.standby3);
		w.write_u8(self.standby4);
		w.write_u8(self.standby5);
		w.write_u8(self.standby6);
	}
}

impl WireDecode for UpdateControlPeriod {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let time_index = r.read_u16()?;
		let week_control = r.read_u8()?;
		let next_link_time_index = r.read_u8()?;
		let standby1 = r.read_u8()?;
		let standby2 = r.read_u8()?;
		let start_time1 = crate::datetime::read_time(r).map_err(|e| e.with_field("start_time1"))?;
		let end_time1 = crate::datetime::read_time(r).map_err(|e| e.with_field("end_time1"))?;
		let start_time2 = crate::datetime::read_time(r).map_err(|e| e.with_field("start_time2"))?;
		let end_time2 = crate::datetime::read_time(r).map_err(|e| e.with_field("end_time2"))?;
		let start_time3 = crate::datetime::read_time(r).map_err(|e| e.with_field("start_time3"))?;
		let end_time3 = crate::datetime::read_time(r).map_err(|e| e.with_field("end_time3"))?;
		let start_date = read_date(r).map_err(|e| e.with_field("start_date"))?;
		let end_date = read_date(r).map_err(|e| e.with_field("end_date"))?;
		let standby3 = r.read_u8()?;
		let standby4 = r.read_u8()?;
		let standby5 = r.read_u8()?;
		let standby6 = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(UpdateControlPeriod {
			time_index,
			week_control,
			next_link_time_index,
			standby1,
			standby2,
			start_time1,
			end_time1,
			start_time2,
			end_time2,
			start_time3,
			end_time3,
			start_date,
			end_date,
			standby3,
			standby4,
			standby5,
			standby6,
		})
	}
}

// ---------------------------------------------------------------------
// 0x1098 Unknown1098 — recovered from functions_unknown1098_test.go (the
// .go source wasn't in the filtered pack, only its test fixtures).

pub struct Unknown1098Request;

impl WireEncode for Unknown1098Request {
	fn encode(&self, _w: &mut Writer) {}
}

impl WireDecode for Unknown1098Request {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		assert_trailing_zeros(r)?;
		Ok(Unknown1098Request)
	}
}

pub struct Unknown1098Response {
	pub result: u8,
}

impl WireEncode for Unknown1098Response {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for Unknown1098Response {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(Unknown1098Response { result })
	}
}

// ---------------------------------------------------------------------
// 0x109B TailPlusPermissions — original_source/wire/functions_tailpluspermissions.go

pub struct TailPlusPermissionsRequest {
	pub upload_index: u16,
	pub card_number: u16,
	pub area_number: u8,
	pub door: u8,
	pub start_date: WireDateTime,
	pub end_date: WireDateTime,
	pub time: u8,
	pub password: u32,
	pub standby: [u8; 4],
}

impl WireEncode for TailPlusPermissionsRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(self.upload_index);
		w.write_u16(self.card_number);
		w.write_u8(self.area_number);
		w.write_u8(self.door);
		write_date(w, &self.start_date);
		write_date(w, &self.end_date);
		w.write_u8(self.time);
		w.write_u24(self.password);
		w.write_bytes(&self.standby);
	}
}

impl WireDecode for TailPlusPermissionsRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let upload_index = r.read_u16()?;
		let card_number = r.read_u16()?;
		let area_number = r.read_u8()?;
		let door = r.read_u8()?;
		let start_date = read_date(r).map_err(|e| e.with_field("start_date"))?;
		let end_date = read_date(r).map_err(|e| e.with_field("end_date"))?;
		let time = r.read_u8()?;
		let password = r.read_u24()?;
		let standby_bytes = r.read_bytes(4)?;
		let mut standby = [0u8; 4];
		standby.copy_from_slice(standby_bytes);
		assert_trailing_zeros(r)?;
		Ok(TailPlusPermissionsRequest {
			upload_index,
			card_number,
			area_number,
			door,
			start_date,
			end_date,
			time,
			password,
			standby,
		})
	}
}

pub struct TailPlusPermissionsResponse {
	/// `1` is success, `0` is failure (note the polarity is reversed from
	/// every other result byte in this catalog).
	pub result: u8,
}

impl WireEncode for TailPlusPermissionsResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for TailPlusPermissionsResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(TailPlusPermissionsResponse { result })
	}
}

// ---------------------------------------------------------------------
// 0x109D OpenDoor — original_source/wire/functions_opendoor.go

pub struct OpenDoorRequest {
	/// 1-4.
	pub door: u8,
	pub unknown: u8,
}

impl WireEncode for OpenDoorRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.door);
		w.write_u8(self.unknown);
	}
}

impl WireDecode for OpenDoorRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let door = r.read_u8()?;
		let unknown = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(OpenDoorRequest { door, unknown })
	}
}

pub struct OpenDoorResponse;

impl WireEncode for OpenDoorResponse {
	fn encode(&self, _w: &mut Writer) {}
}

impl WireDecode for OpenDoorResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		assert_trailing_zeros(r)?;
		Ok(OpenDoorResponse)
	}
}

// ---------------------------------------------------------------------
// 0x10F1 GetSetting — original_source/wire/functions_getsetting.go

pub struct GetSettingRequest {
	pub address: u8,
	pub unknown: u8,
}

impl WireEncode for GetSettingRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.address);
		w.write_u8(self.unknown);
	}
}

impl WireDecode for GetSettingRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let address = r.read_u8()?;
		let unknown = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(GetSettingRequest { address, unknown })
	}
}

pub struct GetSettingResponse {
	pub value: u8,
	pub unknown: Vec<u8>,
}

impl WireEncode for GetSettingResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.value);
		w.write_bytes(&self.unknown);
	}
}

impl WireDecode for GetSettingResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let value = r.read_u8()?;
		let unknown = read_remainder(r)?.to_vec();
		assert_trailing_zeros(r)?;
		Ok(GetSettingResponse { value, unknown })
	}
}

// ---------------------------------------------------------------------
// 0x10F4 UpdateSetting — original_source/wire/functions_updatesetting.go

pub struct UpdateSettingRequest {
	pub address: u8,
	pub unknown: u8,
	pub value: u8,
}

impl WireEncode for UpdateSettingRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.address);
		w.write_u8(self.unknown);
		w.write_u8(self.value);
	}
}

impl WireDecode for UpdateSettingRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let address = r.read_u8()?;
		let unknown = r.read_u8()?;
		let value = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(UpdateSettingRequest {
			address,
			unknown,
			value,
		})
	}
}

pub struct UpdateSettingResponse {
	pub result: u8,
}

impl WireEncode for UpdateSettingResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for UpdateSettingResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(UpdateSettingResponse { result })
	}
}

// ---------------------------------------------------------------------
// 0x1101 GetNetworkInfo / 0x11F2 SetNetworkInfo —
// original_source/wire/functions_getnetworkinfo.go,
// functions_setnetworkinfo.go

pub struct GetNetworkInfoRequest {
	/// `1` for a direct query, `0` for broadcast discovery.
	pub unknown: u8,
}

impl WireEncode for GetNetworkInfoRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.unknown);
	}
}

impl WireDecode for GetNetworkInfoRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let unknown = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(GetNetworkInfoRequest { unknown })
	}
}

pub struct NetworkInfo {
	pub mac_address: [u8; 6],
	pub ip_address: [u8; 4],
	pub netmask: [u8; 4],
	pub gateway: [u8; 4],
	pub port: u16,
}

fn read_network_info(r: &mut Reader) -> Result<NetworkInfo, Error> {
	let mac = r.read_bytes(6).map_err(|e| e.with_field("mac_address"))?;
	let ip = r.read_bytes(4).map_err(|e| e.with_field("ip_address"))?;
	let netmask = r.read_bytes(4).map_err(|e| e.with_field("netmask"))?;
	let gateway = r.read_bytes(4).map_err(|e| e.with_field("gateway"))?;
	let port = r.read_u16().map_err(|e| e.with_field("port"))?;
	let mut mac_address = [0u8; 6];
	mac_address.copy_from_slice(mac);
	let mut ip_address = [0u8; 4];
	ip_address.copy_from_slice(ip);
	let mut netmask_bytes = [0u8; 4];
	netmask_bytes.copy_from_slice(netmask);
	let mut gateway_bytes = [0u8; 4];
	gateway_bytes.copy_from_slice(gateway);
	Ok(NetworkInfo {
		mac_address,
		ip_address,
		netmask: netmask_bytes,
		gateway: gateway_bytes,
		port,
	})
}

fn write_network_info(w: &mut Writer, info: &NetworkInfo) {
	w.write_bytes(&info.mac_address);
	w.write_bytes(&info.ip_address);
	w.write_bytes(&info.netmask);
	w.write_bytes(&info.gateway);
	w.write_u16(info.port);
}

pub struct GetNetworkInfoResponse(pub NetworkInfo);

impl WireEncode for GetNetworkInfoResponse {
	fn encode(&self, w: &mut Writer) {
		write_network_info(w, &self.0);
	}
}

impl WireDecode for GetNetworkInfoResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let info = read_network_info(r)?;
		assert_trailing_zeros(r)?;
		Ok(GetNetworkInfoResponse(info))
	}
}

pub struct SetNetworkInfoRequest(pub NetworkInfo);

impl WireEncode for SetNetworkInfoRequest {
	fn encode(&self, w: &mut Writer) {
		write_network_info(w, &self.0);
	}
}

impl WireDecode for SetNetworkInfoRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let info = read_network_info(r)?;
		assert_trailing_zeros(r)?;
		Ok(SetNetworkInfoRequest(info))
	}
}

pub struct SetNetworkInfoResponse {
	pub unknown: u8,
}

impl WireEncode for SetNetworkInfoResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.unknown);
	}
}

impl WireDecode for SetNetworkInfoResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let unknown = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(SetNetworkInfoResponse { unknown })
	}
}

// ---------------------------------------------------------------------
// 0x1107 UpdatePermissions — original_source/wire/functions_updatepermissions.go

pub struct UpdatePermissionsRequest {
	pub unknown: u16,
	pub card_id: u16,
	pub area: u8,
	pub door: u8,
	pub start_date: WireDateTime,
	pub end_date: WireDateTime,
	pub time: u8,
	pub password: u32,
	pub standby: [u8; 4],
}

impl WireEncode for UpdatePermissionsRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(self.unknown);
		w.write_u16(self.card_id);
		w.write_u8(self.area);
		w.write_u8(self.door);
		write_date(w, &self.start_date);
		write_date(w, &self.end_date);
		w.write_u8(self.time);
		w.write_u24(self.password);
		w.write_bytes(&self.standby);
	}
}

impl WireDecode for UpdatePermissionsRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let unknown = r.read_u16()?;
		let card_id = r.read_u16()?;
		let area = r.read_u8()?;
		let door = r.read_u8()?;
		let start_date = read_date(r).map_err(|e| e.with_field("start_date"))?;
		let end_date = read_date(r).map_err(|e| e.with_field("end_date"))?;
		let time = r.read_u8()?;
		let password = r.read_u24()?;
		let standby_bytes = r.read_bytes(4)?;
		let mut standby = [0u8; 4];
		standby.copy_from_slice(standby_bytes);
		assert_trailing_zeros(r)?;
		Ok(UpdatePermissionsRequest {
			unknown,
			card_id,
			area,
			door,
			start_date,
			end_date,
			time,
			password,
			standby,
		})
	}
}

pub struct UpdatePermissionsResponse {
	pub result: u8,
}

impl WireEncode for UpdatePermissionsResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for UpdatePermissionsResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(UpdatePermissionsResponse { result })
	}
}

// ---------------------------------------------------------------------
// 0x1108 DeletePermissions — original_source/wire/functions_deletepermissions.go
//
// Same shape as UpdatePermissions, except the start/end dates are optional:
// absent is signaled by an all-zero 2-byte slot.

pub struct DeletePermissionsRequest {
	pub card_id: u16,
	pub area: u8,
	pub door: u8,
	pub start_date: Option<WireDateTime>,
	pub end_date: Option<WireDateTime>,
	pub time: u8,
	pub password: u32,
	pub standby: [u8; 4],
}

impl WireEncode for DeletePermissionsRequest {
	fn encode(&self, w: &mut Writer) {
		w.write_u16(0); // Empty1 — always zero.
		w.write_u16(self.card_id);
		w.write_u8(self.area);
		w.write_u8(self.door);
		crate::codec::write_optional(w, 2, 0x00, self.start_date.map(|d| move |w: &mut Writer| write_date(w, &d)));
		crate::codec::write_optional(w, 2, 0x00, self.end_date.map(|d| move |w: &mut Writer| write_date(w, &d)));
		w.write_u8(self.time);
		w.write_u24(self.password);
		w.write_bytes(&self.standby);
	}
}

impl WireDecode for DeletePermissionsRequest {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let _empty1 = r.read_u16()?;
		let card_id = r.read_u16()?;
		let area = r.read_u8()?;
		let door = r.read_u8()?;
		let start_date = crate::codec::read_optional(r, 2, 0x00, |r| {
			read_date(r).map_err(|e| e.with_field("start_date"))
		})?;
		let end_date = crate::codec::read_optional(r, 2, 0x00, |r| {
			read_date(r).map_err(|e| e.with_field("end_date"))
		})?;
		let time = r.read_u8()?;
		let password = r.read_u24()?;
		let standby_bytes = r.read_bytes(4)?;
		let mut standby = [0u8; 4];
		standby.copy_from_slice(standby_bytes);
		assert_trailing_zeros(r)?;
		Ok(DeletePermissionsRequest {
			card_id,
			area,
			door,
			start_date,
			end_date,
			time,
			password,
			standby,
		})
	}
}

pub struct DeletePermissionsResponse {
	pub result: u8,
}

impl WireEncode for DeletePermissionsResponse {
	fn encode(&self, w: &mut Writer) {
		w.write_u8(self.result);
	}
}

impl WireDecode for DeletePermissionsResponse {
	fn decode(r: &mut Reader) -> Result<Self, Error> {
		let result = r.read_u8()?;
		assert_trailing_zeros(r)?;
		Ok(DeletePermissionsResponse { result })
	}
}

// ---------------------------------------------------------------------
// Opcode-keyed dispatch, for callers (e.g. a pcap inspector) that see a
// function code and raw payload bytes without knowing which opcode they
// are ahead of time. Grounded on `lifx-core/src/msg.rs`'s `Message` enum
// and `RawMessage::build`'s `match msg.protocol_header.typ { ... _ =>
// Err(Error::UnknownMessageType(...)) }`.

/// A decoded request payload, tagged by which opcode produced it.
pub enum RequestPayload {
	GetOperationStatus(GetOperationStatusRequest),
	GetBasicInfo(GetBasicInfoRequest),
	SetTime(SetTimeRequest),
	GetRecord(GetRecordRequest),
	DeleteRecord(DeleteRecordRequest),
	ClearUpload(ClearUploadRequest),
	GetUpload(GetUploadRequest),
	UpdateControlPeriod(UpdateControlPeriodRequest),
	Unknown1098(Unknown1098Request),
	TailPlusPermissions(TailPlusPermissionsRequest),
	OpenDoor(OpenDoorRequest),
	GetSetting(GetSettingRequest),
	UpdateSetting(UpdateSettingRequest),
	GetNetworkInfo(GetNetworkInfoRequest),
	SetNetworkInfo(SetNetworkInfoRequest),
	UpdatePermissions(UpdatePermissionsRequest),
	DeletePermissions(DeletePermissionsRequest),
}

/// A decoded response payload, tagged by which opcode produced it.
pub enum ResponsePayload {
	GetOperationStatus(GetOperationStatusResponse),
	GetBasicInfo(GetBasicInfoResponse),
	SetTime(SetTimeResponse),
	GetRecord(GetRecordResponse),
	DeleteRecord(DeleteRecordResponse),
	ClearUpload(ClearUploadResponse),
	GetUpload(GetUploadResponse),
	UpdateControlPeriod(UpdateControlPeriodResponse),
	Unknown1098(Unknown1098Response),
	TailPlusPermissions(TailPlusPermissionsResponse),
	OpenDoor(OpenDoorResponse),
	GetSetting(GetSettingResponse),
	UpdateSetting(UpdateSettingResponse),
	GetNetworkInfo(GetNetworkInfoResponse),
	SetNetworkInfo(SetNetworkInfoResponse),
	UpdatePermissions(UpdatePermissionsResponse),
	DeletePermissions(DeletePermissionsResponse),
}

/// Looks `function` up in the catalog and decodes `bytes` as that opcode's
/// request payload. `0x10F9` falls through to the catch-all: the constant
/// is recognized (see `function::UNKNOWN_10F9`) but no decoder is cataloged
/// for it, so it fails `UnknownFunction` exactly like a wholly unrecognized
/// opcode.
pub fn decode_request(function: u16, bytes: &[u8]) -> Result<RequestPayload, Error> {
	use self::function::*;
	Ok(match function {
		GET_OPERATION_STATUS => RequestPayload::GetOperationStatus(GetOperationStatusRequest::from_bytes(bytes)?),
		GET_BASIC_INFO => RequestPayload::GetBasicInfo(GetBasicInfoRequest::from_bytes(bytes)?),
		SET_TIME => RequestPayload::SetTime(SetTimeRequest::from_bytes(bytes)?),
		GET_RECORD => RequestPayload::GetRecord(GetRecordRequest::from_bytes(bytes)?),
		DELETE_RECORD => RequestPayload::DeleteRecord(DeleteRecordRequest::from_bytes(bytes)?),
		CLEAR_UPLOAD => RequestPayload::ClearUpload(ClearUploadRequest::from_bytes(bytes)?),
		GET_UPLOAD => RequestPayload::GetUpload(GetUploadRequest::from_bytes(bytes)?),
		UPDATE_CONTROL_PERIOD => {
			RequestPayload::UpdateControlPeriod(UpdateControlPeriodRequest::from_bytes(bytes)?)
		}
		UNKNOWN_1098 => RequestPayload::Unknown1098(Unknown1098Request::from_bytes(bytes)?),
		TAIL_PLUS_PERMISSIONS => {
			RequestPayload::TailPlusPermissions(TailPlusPermissionsRequest::from_bytes(bytes)?)
		}
		OPEN_DOOR => RequestPayload::OpenDoor(OpenDoorRequest::from_bytes(bytes)?),
		GET_SETTING => RequestPayload::GetSetting(GetSettingRequest::from_bytes(bytes)?),
		UPDATE_SETTING => RequestPayload::UpdateSetting(UpdateSettingRequest::from_bytes(bytes)?),
		GET_NETWORK_INFO => RequestPayload::GetNetworkInfo(GetNetworkInfoRequest::from_bytes(bytes)?),
		SET_NETWORK_INFO => RequestPayload::SetNetworkInfo(SetNetworkInfoRequest::from_bytes(bytes)?),
		UPDATE_PERMISSIONS => RequestPayload::UpdatePermissions(UpdatePermissionsRequest::from_bytes(bytes)?),
		DELETE_PERMISSIONS => RequestPayload::DeletePermissions(DeletePermissionsRequest::from_bytes(bytes)?),
		_ => return Err(Error::UnknownFunction(function)),
	})
}

/// Looks `function` up in the catalog and decodes `bytes` as that opcode's
/// response payload. See [`decode_request`] for the `0x10F9` and
/// unrecognized-opcode behavior.
pub fn decode_response(function: u16, bytes: &[u8]) -> Result<ResponsePayload, Error> {
	use self::function::*;
	Ok(match function {
		GET_OPERATION_STATUS => ResponsePayload::GetOperationStatus(GetOperationStatusResponse::from_bytes(bytes)?),
		GET_BASIC_INFO => ResponsePayload::GetBasicInfo(GetBasicInfoResponse::from_bytes(bytes)?),
		SET_TIME => ResponsePayload::SetTime(SetTimeResponse::from_bytes(bytes)?),
		GET_RECORD => ResponsePayload::GetRecord(GetRecordResponse::from_bytes(bytes)?),
		DELETE_RECORD => ResponsePayload::DeleteRecord(DeleteRecordResponse::from_bytes(bytes)?),
		CLEAR_UPLOAD => ResponsePayload::ClearUpload(ClearUploadResponse::from_bytes(bytes)?),
		GET_UPLOAD => ResponsePayload::GetUpload(GetUploadResponse::from_bytes(bytes)?),
		UPDATE_CONTROL_PERIOD => {
			ResponsePayload::UpdateControlPeriod(UpdateControlPeriodResponse::from_bytes(bytes)?)
		}
		UNKNOWN_1098 => ResponsePayload::Unknown1098(Unknown1098Response::from_bytes(bytes)?),
		TAIL_PLUS_PERMISSIONS => {
			ResponsePayload::TailPlusPermissions(TailPlusPermissionsResponse::from_bytes(bytes)?)
		}
		OPEN_DOOR => ResponsePayload::OpenDoor(OpenDoorResponse::from_bytes(bytes)?),
		GET_SETTING => ResponsePayload::GetSetting(GetSettingResponse::from_bytes(bytes)?),
		UPDATE_SETTING => ResponsePayload::UpdateSetting(UpdateSettingResponse::from_bytes(bytes)?),
		GET_NETWORK_INFO => ResponsePayload::GetNetworkInfo(GetNetworkInfoResponse::from_bytes(bytes)?),
		SET_NETWORK_INFO => ResponsePayload::SetNetworkInfo(SetNetworkInfoResponse::from_bytes(bytes)?),
		UPDATE_PERMISSIONS => ResponsePayload::UpdatePermissions(UpdatePermissionsResponse::from_bytes(bytes)?),
		DELETE_PERMISSIONS => ResponsePayload::DeletePermissions(DeletePermissionsResponse::from_bytes(bytes)?),
		_ => return Err(Error::UnknownFunction(function)),
	})
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

	#[test]
	fn e3_operation_status_with_record() {
		let bytes = hex("221228031141419E290052018F5BB2009C2D955B00FF00000000");
		let resp = GetOperationStatusResponse::from_bytes(&bytes).unwrap();
		assert_eq!(resp.current_time.year, 2022);
		assert_eq!(resp.current_time.month, 12);
		assert_eq!(resp.current_time.day, 28);
		assert_eq!(resp.current_time.hour, 11);
		assert_eq!(resp.current_time.minute, 41);
		assert_eq!(resp.current_time.second, 41);
		assert_eq!(resp.record_count, 10654);
		assert_eq!(resp.popedom_amount, 338);
		let record = resp.record.expect("record present");
		assert_eq!(record.id_number, 23439);
		assert_eq!(record.area_number, 178);
		assert_eq!(record.record_state, 0);
		assert_eq!(record.brush_datetime.year, 2022);
		assert_eq!(record.brush_datetime.month, 12);
		assert_eq!(record.brush_datetime.day, 28);
		assert_eq!(record.brush_datetime.hour, 11);
		assert_eq!(record.brush_datetime.minute, 28);
		assert_eq!(record.brush_datetime.second, 42);
		assert_eq!(resp.relay_status, 0);
		assert_eq!(resp.magnet_state, 0xFF);
	}

	#[test]
	fn e4_operation_status_without_record() {
		let bytes = hex("221228031141419E29005201FFFFFFFFFFFFFFFF00FF00000000");
		let resp = GetOperationStatusResponse::from_bytes(&bytes).unwrap();
		assert_eq!(resp.record, None);
		assert_eq!(resp.record_count, 10654);
	}

	#[test]
	fn e5_network_info_response() {
		let bytes = hex("00574764F010C0A8C9C2FFFFFF00C0A8C9FE60EA000000000000");
		let resp = GetNetworkInfoResponse::from_bytes(&bytes).unwrap();
		assert_eq!(resp.0.mac_address, [0x00, 0x57, 0x47, 0x64, 0xF0, 0x10]);
		assert_eq!(resp.0.ip_address, [192, 168, 201, 194]);
		assert_eq!(resp.0.netmask, [255, 255, 255, 0]);
		assert_eq!(resp.0.gateway, [192, 168, 201, 254]);
		assert_eq!(resp.0.port, 60000);
	}

	#[test]
	fn e6_tail_plus_permissions_trailing_garbage() {
		let bytes = hex("3A03618EC90421009F6501000000000000000000000000000001");
		match TailPlusPermissionsRequest::from_bytes(&bytes) {
			Err(Error::TrailingGarbage { .. }) => {}
			other => panic!("expected TrailingGarbage, got {other:?}"),
		}
	}

	#[test]
	fn record_door_and_access_granted() {
		let granted = Record {
			id_number: 5,
			area_number: 0,
			record_state: 0b0000_0010,
			brush_datetime: WireDateTime::default(),
		};
		assert_eq!(granted.door(), (0b0000_0010u8 & 0b11) + 1);
		assert!(granted.access_granted());

		let denied = Record {
			id_number: 200,
			area_number: 3,
			record_state: 0b1000_0001,
			brush_datetime: WireDateTime::default(),
		};
		assert_eq!(denied.door(), (0b1000_0001u8 & 0b11) + 1);
		assert!(!denied.access_granted());

		let no_door = Record {
			id_number: 0b0100,
			area_number: 0,
			record_state: 0,
			brush_datetime: WireDateTime::default(),
		};
		assert_eq!(no_door.door(), 0);
	}

	#[test]
	fn delete_permissions_optional_dates_round_trip() {
		let req = DeletePermissionsRequest {
			card_id: 42,
			area: 1,
			door: 2,
			start_date: None,
			end_date: Some(WireDateTime::new(2024, 6, 1, 0, 0, 0)),
			time: 0,
			password: 0x112233,
			standby: [0, 0, 0, 0],
		};
		let bytes = req.to_bytes();
		let back = DeletePermissionsRequest::from_bytes(&bytes).unwrap();
		assert_eq!(back.start_date, None);
		assert_eq!(back.end_date.unwrap().year, 2024);
		assert_eq!(back.card_id, 42);
	}

	#[test]
	fn decode_response_dispatches_on_known_opcode() {
		let bytes = hex("00574764F010C0A8C9C2FFFFFF00C0A8C9FE60EA000000000000");
		match decode_response(function::GET_NETWORK_INFO, &bytes).unwrap() {
			ResponsePayload::GetNetworkInfo(resp) => {
				assert_eq!(resp.0.port, 60000);
			}
			_ => panic!("expected GetNetworkInfo"),
		}
	}

	#[test]
	fn decode_request_rejects_unknown_10f9() {
		match decode_request(function::UNKNOWN_10F9, &[]) {
			Err(Error::UnknownFunction(function::UNKNOWN_10F9)) => {}
			other => panic!("expected UnknownFunction(0x10f9), got {other:?}"),
		}
	}

	#[test]
	fn decode_request_rejects_opcode_outside_catalog() {
		match decode_request(0x9999, &[]) {
			Err(Error::UnknownFunction(0x9999)) => {}
			other => panic!("expected UnknownFunction(0x9999), got {other:?}"),
		}
	}
}
