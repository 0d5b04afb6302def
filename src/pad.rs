// Message padding (FIPS 180-4 §5.1.1): input, 0x80 marker, zero fill, then
// the bit length as a big-endian u64 in the last eight bytes

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::{Result, Sha256Error};

const MARKER: u8 = 0x80;

// Only pad() builds one, so the length is a non-zero multiple of BLOCK_LEN
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    buf: Vec<u8>,
}

impl PaddedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn num_chunks(&self) -> usize {
        self.buf.len() / BLOCK_LEN
    }

    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_LEN]> + '_ {
        // chunks_exact only yields full blocks, so every conversion succeeds
        self.buf.chunks_exact(BLOCK_LEN).filter_map(|c| c.try_into().ok())
    }
}

impl AsRef<[u8]> for PaddedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

// Smallest multiple of 64 holding the input, the marker and the length field
pub fn padded_len(len: usize) -> Option<usize> {
    let min = len.checked_add(1 + LENGTH_FIELD_LEN)?;
    let blocks = min.div_ceil(BLOCK_LEN);
    blocks.checked_mul(BLOCK_LEN)
}

pub fn num_chunks(len: usize) -> Option<usize> {
    padded_len(len).map(|n| n / BLOCK_LEN)
}

// Input length in bits, rejected up front if it cannot be encoded
fn bit_length(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(Sha256Error::LengthOverflow { len })
}

fn reserve_buffer(total: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(total)
        .map_err(|source| Sha256Error::Allocation { requested: total, source })?;
    Ok(buf)
}

/// Pad `input` into a block-aligned buffer carrying its bit length.
pub fn pad(input: &[u8]) -> Result<PaddedMessage> {
    let len = input.len();
    let bits = bit_length(len)?;
    let total = padded_len(len).ok_or(Sha256Error::LengthOverflow { len })?;

    let mut buf = reserve_buffer(total)?;

    buf.extend_from_slice(input);
    buf.push(MARKER);
    buf.resize(total - LENGTH_FIELD_LEN, 0);
    buf.extend_from_slice(&bits.to_be_bytes());
    debug_assert_eq!(buf.len() % BLOCK_LEN, 0);

    Ok(PaddedMessage { buf })
}
