// SHA-256 compression function (FIPS 180-4 §6.2.2)

use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, K, SCHEDULE_LEN};
use crate::digest::Digest;
use crate::observer::Observer;
use crate::pad::PaddedMessage;

// Rotate right operation; callers only pass 0 < n < 32
#[inline]
pub fn rotr(x: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && n < 32);
    (x >> n) | (x << (32 - n))
}

// SHA-256 logical functions
#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn bsig0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

#[inline]
fn bsig1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

#[inline]
fn ssig0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

#[inline]
fn ssig1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

// Words 0..16 are the block read big-endian, the rest follow the σ0/σ1 recurrence
pub fn expand_schedule(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];

    for (slot, word) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }

    for i in 16..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(ssig0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(ssig1(w[i - 2]));
    }

    w
}

// 64 mixing rounds over an expanded schedule, then add back into the state
fn apply_rounds(state: &mut [u32; 8], w: &[u32; SCHEDULE_LEN]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..SCHEDULE_LEN {
        let t1 = h
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

pub fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let w = expand_schedule(block);
    apply_rounds(state, &w);
}

// Blocks are folded strictly in order; the state is serialized big-endian
pub fn compress<O: Observer + ?Sized>(message: &PaddedMessage, observer: &mut O) -> Digest {
    let mut state = H0;

    for (index, block) in message.blocks().enumerate() {
        let w = expand_schedule(block);
        observer.schedule(index, &w);
        apply_rounds(&mut state, &w);
        observer.block_done(index, &state);
    }

    let mut out = [0u8; DIGEST_LEN];
    for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    Digest::from(out)
}
