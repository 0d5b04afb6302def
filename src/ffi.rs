// C ABI for linking the staticlib into C programs

use core::ffi::c_int;
use core::slice;

use crate::consts::DIGEST_LEN;

pub const SHA256_OK: c_int = 0;
pub const SHA256_ERR_HASH: c_int = -1;
pub const SHA256_ERR_NULL: c_int = -2;

/// # Safety
///
/// `input` must be valid for `len` reads and `digest_out` valid for 32 writes.
#[no_mangle]
pub unsafe extern "C" fn sha256_digest(input: *const u8, len: usize, digest_out: *mut u8) -> c_int {
    // input may be null only for an empty message
    if digest_out.is_null() || (input.is_null() && len != 0) {
        return SHA256_ERR_NULL;
    }
    let data = if len == 0 { &[][..] } else { slice::from_raw_parts(input, len) };

    match crate::sha256(data) {
        Ok(digest) => {
            let out = slice::from_raw_parts_mut(digest_out, DIGEST_LEN);
            out.copy_from_slice(digest.as_bytes());
            SHA256_OK
        }
        Err(_) => SHA256_ERR_HASH,
    }
}

/// # Safety
///
/// `hash32` must be valid for 32 reads and `hex_out` valid for 65 writes.
#[no_mangle]
pub unsafe extern "C" fn sha256_to_hex(hash32: *const u8, hex_out: *mut u8) -> c_int {
    if hash32.is_null() || hex_out.is_null() {
        return SHA256_ERR_NULL;
    }
    let hash = slice::from_raw_parts(hash32, DIGEST_LEN);
    let out = slice::from_raw_parts_mut(hex_out, DIGEST_LEN * 2 + 1);

    if hex::encode_to_slice(hash, &mut out[..DIGEST_LEN * 2]).is_err() {
        return SHA256_ERR_HASH;
    }
    out[DIGEST_LEN * 2] = 0; // null terminator
    SHA256_OK
}
