//! Date/time wire forms.
//!
//! Grounded on `original_source/wire/reader.go` (`ReadDate`/`ReadTime`),
//! `writer.go` (`WriteDate`/`WriteTime`) and `helper.go`
//! (`InsaneBase10ToBase16`/`InsaneBase16ToBase10`, `MergeDateTime`). Kept
//! dependency-free: the wire forms are bespoke bit layouts that a general
//! date/time crate wouldn't model any more directly than a plain struct.

use crate::error::{Error, FieldPath};
use crate::io::{Reader, Writer};

/// A calendar timestamp, always UTC. No timezone, no leap seconds, no
/// calendar arithmetic beyond what decoding a wire form requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireDateTime {
	pub year: u16,
	pub month: u8,
	pub day: u8,
	pub hour: u8,
	pub minute: u8,
	pub second: u8,
}

impl WireDateTime {
	pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
		WireDateTime {
			year,
			month,
			day,
			hour,
			minute,
			second,
		}
	}

	/// Day of week, Sunday = 0, via Zeller-congruence-equivalent Sakamoto's
	/// algorithm. Only used to populate the weekday byte on encode of the
	/// `hexdatetime` form; never validated on decode.
	pub fn weekday(&self) -> u8 {
		const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
		let mut y = i32::from(self.year);
		if self.month < 3 {
			y -= 1;
		}
		let d = (y + y / 4 - y / 100 + y / 400 + T[(self.month - 1) as usize] as i32 + i32::from(self.day))
			% 7;
		d.rem_euclid(7) as u8
	}
}

fn invalid(message: impl Into<String>) -> Error {
	Error::InvalidField {
		message: message.into(),
		path: FieldPath::default(),
	}
}

/// Bit-packed 16-bit date: bits 15..9 year offset from 2000, bits 8..5
/// month, bits 4..0 day.
pub fn read_date(r: &mut Reader) -> Result<WireDateTime, Error> {
	let value = r.read_u16()?;
	let year = (value & 0b1111111_0_0000_0000) >> 9;
	let month = ((value & 0b0000000_1_1110_0000) >> 5) as u8;
	let day = (value & 0b0000000_0_0001_1111) as u8;
	if !(1..=12).contains(&month) {
		return Err(invalid(format!("invalid month: {month}")));
	}
	if !(1..=31).contains(&day) {
		return Err(invalid(format!("invalid day: {day}")));
	}
	Ok(WireDateTime::new(2000 + year, month, day, 0, 0, 0))
}

pub fn write_date(w: &mut Writer, value: &WireDateTime) {
	let year = if value.year >= 2000 {
		value.year - 2000
	} else {
		value.year
	};
	let packed = ((year & 0b1111111) << 9)
		| ((u16::from(value.month) & 0b1111) << 5)
		| (u16::from(value.day) & 0b11111);
	w.write_u16(packed);
}

/// Bit-packed 16-bit time: bits 15..11 hour, bits 10..5 minute, bits 4..0
/// seconds/2 (even seconds only).
pub fn read_time(r: &mut Reader) -> Result<WireDateTime, Error> {
	let value = r.read_u16()?;
	let hours = (value & 0b1111100000000000) >> 11;
	let minutes = (value & 0b0000011111100000) >> 5;
	let seconds = (value & 0b0000000000011111) >> 0;
	if hours >= 24 {
		return Err(invalid(format!("invalid hour: {hours}")));
	}
	if minutes >= 60 {
		return Err(invalid(format!("invalid minute: {minutes}")));
	}
	if seconds >= 60 {
		return Err(invalid(format!("invalid second: {seconds}")));
	}
	Ok(WireDateTime::new(0, 1, 1, hours as u8, minutes as u8, (seconds * 2) as u8))
}

pub fn write_time(w: &mut Writer, value: &WireDateTime) {
	let hours = u16::from(value.hour);
	let minutes = u16::from(value.minute);
	let seconds = u16::from(value.second) / 2;
	let packed = ((hours & 0b11111) << 11) | ((minutes & 0b111111) << 5) | (seconds & 0b11111);
	w.write_u16(packed);
}

/// `date (2) || time (2)`; calendar comes from the date half, clock from
/// the time half.
pub fn read_datetime(r: &mut Reader) -> Result<WireDateTime, Error> {
	let date = read_date(r)?;
	let time = read_time(r)?;
	Ok(WireDateTime::new(
		date.year, date.month, date.day, time.hour, time.minute, time.second,
	))
}

pub fn write_datetime(w: &mut Writer, value: &WireDateTime) {
	write_date(w, value);
	write_time(w, value);
}

/// "Printed-decimal-as-hex": the decimal number `d` (0..99) is stored as the
/// byte whose high nibble is `d/10` and low nibble is `d%10`. For example
/// decimal 22 is stored as the byte `0x22`.
pub fn insane_b10_to_b16(value: u8) -> u8 {
	let mut result: u8 = 0;
	let mut i: u8 = 1;
	let mut value = value;
	while value > 0 {
		let remainder = value % 10;
		result = result.wrapping_add(remainder.wrapping_mul(i));
		value /= 10;
		i = i.wrapping_mul(16);
	}
	result
}

pub fn insane_b16_to_b10(value: u8) -> u8 {
	let mut result: u8 = 0;
	let mut i: u8 = 1;
	let mut value = value;
	while value > 0 {
		let remainder = value % 16;
		result = result.wrapping_add(remainder.wrapping_mul(i));
		value /= 16;
		i = i.wrapping_mul(10);
	}
	result
}

fn read_insane_byte(r: &mut Reader) -> Result<u8, Error> {
	Ok(insane_b16_to_b10(r.read_u8()?))
}

fn write_insane_byte(w: &mut Writer, value: u8) {
	w.write_u8(insane_b10_to_b16(value));
}

/// `year || month || day`, each one insane byte.
pub fn read_hexdate(r: &mut Reader) -> Result<WireDateTime, Error> {
	let year = read_insane_byte(r)?;
	let month = read_insane_byte(r)?;
	let day = read_insane_byte(r)?;
	Ok(WireDateTime::new(2000 + u16::from(year), month, day, 0, 0, 0))
}

pub fn write_hexdate(w: &mut Writer, value: &WireDateTime) {
	let year = if value.year >= 2000 {
		(value.year - 2000) as u8
	} else {
		value.year as u8
	};
	write_insane_byte(w, year);
	write_insane_byte(w, value.month);
	write_insane_byte(w, value.day);
}

/// `hour || minute || second`, each one insane byte.
pub fn read_hextime(r: &mut Reader) -> Result<WireDateTime, Error> {
	let hour = read_insane_byte(r)?;
	let minute = read_insane_byte(r)?;
	let second = read_insane_byte(r)?;
	Ok(WireDateTime::new(0, 1, 1, hour, minute, second))
}

pub fn write_hextime(w: &mut Writer, value: &WireDateTime) {
	write_insane_byte(w, value.hour);
	write_insane_byte(w, value.minute);
	write_insane_byte(w, value.second);
}

/// `year || month || day || weekday || hour || minute || second`, each one
/// insane byte. Weekday is written on encode but ignored on decode (it is
/// never validated against the calendar, matching the original source's own
/// unresolved `// TODO: ????`).
pub fn read_hexdatetime(r: &mut Reader) -> Result<WireDateTime, Error> {
	let year = read_insane_byte(r)?;
	let month = read_insane_byte(r)?;
	let day = read_insane_byte(r)?;
	let _weekday = read_insane_byte(r)?;
	let hour = read_insane_byte(r)?;
	let minute = read_insane_byte(r)?;
	let second = read_insane_byte(r)?;
	Ok(WireDateTime::new(2000 + u16::from(year), month, day, hour, minute, second))
}

pub fn write_hexdatetime(w: &mut Writer, value: &WireDateTime) {
	let year = if value.year >= 2000 {
		(value.year - 2000) as u8
	} else {
		value.year as u8
	};
	write_insane_byte(w, year);
	write_insane_byte(w, value.month);
	write_insane_byte(w, value.day);
	write_insane_byte(w, value.weekday());
	write_insane_byte(w, value.hour);
	write_insane_byte(w, value.minute);
	write_insane_byte(w, value.second);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn date_round_trips_across_full_range() {
		for year in 2000..2128u16 {
			for month in 1..=12u8 {
				for day in [1u8, 15, 28] {
					let dt = WireDateTime::new(year, month, day, 0, 0, 0);
					let mut w = Writer::new();
					write_date(&mut w, &dt);
					let bytes = w.into_bytes();
					let mut r = Reader::new(&bytes);
					let back = read_date(&mut r).unwrap();
					assert_eq!(back.year, dt.year);
					assert_eq!(back.month, dt.month);
					assert_eq!(back.day, dt.day);
				}
			}
		}
	}

	#[test]
	fn time_round_trips_on_even_seconds() {
		for hour in 0..24u8 {
			for minute in [0u8, 15, 30, 59] {
				for second in (0..60u8).step_by(2) {
					let dt = WireDateTime::new(0, 1, 1, hour, minute, second);
					let mut w = Writer::new();
					write_time(&mut w, &dt);
					let bytes = w.into_bytes();
					let mut r = Reader::new(&bytes);
					let back = read_time(&mut r).unwrap();
					assert_eq!(back.hour, hour);
					assert_eq!(back.minute, minute);
					assert_eq!(back.second, second);
				}
			}
		}
	}

	#[test]
	fn odd_seconds_truncate_to_even_floor() {
		for (input, expected) in [(1u8, 0u8), (59u8, 58u8)] {
			let dt = WireDateTime::new(0, 1, 1, 0, 0, input);
			let mut w = Writer::new();
			write_time(&mut w, &dt);
			let bytes = w.into_bytes();
			let mut r = Reader::new(&bytes);
			let back = read_time(&mut r).unwrap();
			assert_eq!(back.second, expected);
		}
	}

	#[test]
	fn insane_form_round_trips_on_printable_nibbles() {
		for tens in 0..=9u8 {
			for ones in 0..=9u8 {
				let decimal = tens * 10 + ones;
				let byte = tens * 16 + ones;
				assert_eq!(insane_b10_to_b16(decimal), byte);
				assert_eq!(insane_b16_to_b10(byte), decimal);
			}
		}
	}

	#[test]
	fn hexdatetime_round_trip_e2_fixture() {
		// SetTime request fixture from the envelope-level test suite: the
		// hexdatetime payload for 2022-12-23T21:38:50Z.
		let bytes = hex("2212230521385000000000000000000000000000000000000000");
		let mut r = Reader::new(&bytes);
		let dt = read_hexdatetime(&mut r).unwrap();
		assert_eq!(dt.year, 2022);
		assert_eq!(dt.month, 12);
		assert_eq!(dt.day, 23);
		assert_eq!(dt.hour, 21);
		assert_eq!(dt.minute, 38);
		assert_eq!(dt.second, 50);
	}

	fn hex(s: &str) -> Vec<u8> {
		(0..s.len())
			.step_by(2)
			.map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
			.collect()
	}
}
