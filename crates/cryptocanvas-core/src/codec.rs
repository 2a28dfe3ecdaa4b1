//! LSB codec over plain component bytes.
//!
//! The embedded bitstream is a 4 byte big endian length header followed by the payload,
//! both written most significant bit first. Bit `i` of that stream goes into the least
//! significant bit of `carrier[positions[i]]`.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::positions::{PositionGenerator, PositionRule};
use crate::{CanvasError, Result};

/// size of the length header in bytes
pub const LENGTH_HEADER_LEN: usize = 4;

/// number of carrier bytes needed to hide a payload of `payload_len` bytes
pub fn encoded_bits(payload_len: usize) -> usize {
    (payload_len + LENGTH_HEADER_LEN) * 8
}

/// largest payload that fits into `capacity_bits` carrier bytes
pub fn max_payload_len(capacity_bits: usize) -> usize {
    (capacity_bits / 8).saturating_sub(LENGTH_HEADER_LEN)
}

/// hides `payload` in a copy of `carrier`, the input stays untouched
pub fn hide(carrier: &[u8], payload: &[u8], rule: PositionRule) -> Result<Vec<u8>> {
    let mut stego = carrier.to_vec();
    hide_in_place(&mut stego, payload, rule)?;

    Ok(stego)
}

/// hides `payload` in `carrier`, on error the carrier is not modified at all
pub fn hide_in_place(carrier: &mut [u8], payload: &[u8], rule: PositionRule) -> Result<()> {
    if payload.is_empty() {
        return Err(CanvasError::EmptyPayload);
    }
    let available = carrier.len();
    let required = encoded_bits(payload.len());
    let length = u32::try_from(payload.len()).map_err(|_| CanvasError::CapacityExceeded {
        required,
        available,
    })?;
    if required > available {
        return Err(CanvasError::CapacityExceeded {
            required,
            available,
        });
    }

    let mut stream = Vec::with_capacity(payload.len() + LENGTH_HEADER_LEN);
    stream.write_u32::<byteorder::BigEndian>(length)?;
    stream.extend_from_slice(payload);

    let mut bits = BitReader::endian(Cursor::new(&stream), BigEndian);
    for position in rule.positions(available).take(required) {
        let bit = bits.read_bit()?;
        carrier[position] = (carrier[position] & !1) | u8::from(bit);
    }

    Ok(())
}

/// extracts a payload hidden by [`hide`] with the same rule
pub fn reveal(stego: &[u8], rule: PositionRule) -> Result<Vec<u8>> {
    let available = stego.len();
    if available < encoded_bits(0) {
        return Err(CanvasError::NoHiddenData);
    }

    let mut positions = rule.positions(available);
    let header = read_bytes(stego, &mut positions, LENGTH_HEADER_LEN)?;
    let length = Cursor::new(header).read_u32::<byteorder::BigEndian>()? as usize;

    if length == 0 || length > max_payload_len(available) {
        return Err(CanvasError::NoHiddenData);
    }

    read_bytes(stego, &mut positions, length)
}

fn read_bytes(
    stego: &[u8],
    positions: &mut impl Iterator<Item = usize>,
    count: usize,
) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(count), BigEndian);
    for position in positions.take(count * 8) {
        writer.write_bit(stego[position] & 1 == 1)?;
    }

    Ok(writer.into_writer())
}
