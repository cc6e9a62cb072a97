//! SHA-256 (FIPS 180-4) over a fixed 64-byte block buffer, so arbitrarily
//! large inputs hash in constant memory.

/// Initial hash state
const H: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 32;

/// Incremental SHA-256 engine.
///
/// Feed input with [`update`](Self::update) in chunks of any size, then take
/// the digest with [`finalize`](Self::finalize) or
/// [`hex_digest`](Self::hex_digest). Both consume the engine, so a finalized
/// state cannot absorb further input.
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    total_bytes: u64,
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: H,
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            total_bytes: 0,
        }
    }

    /// update with a block of 64 bytes
    fn update_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut w = [0u32; 64];
        for i in 0..16 {
            w[i] = u32::from_be_bytes([
                block[4 * i],
                block[4 * i + 1],
                block[4 * i + 2],
                block[4 * i + 3],
            ]);
        }
        for i in 16..64 {
            let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
            let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
            w[i] = w[i - 16]
                .wrapping_add(s0)
                .wrapping_add(w[i - 7])
                .wrapping_add(s1);
        }

        let mut a = self.state[0];
        let mut b = self.state[1];
        let mut c = self.state[2];
        let mut d = self.state[3];
        let mut e = self.state[4];
        let mut f = self.state[5];
        let mut g = self.state[6];
        let mut h = self.state[7];

        for i in 0..64 {
            let ch = (e & f) ^ ((!e) & g);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let t1 = h
                .wrapping_add(s1)
                .wrapping_add(ch)
                .wrapping_add(K[i])
                .wrapping_add(w[i]);
            let t2 = s0.wrapping_add(maj);
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
        self.state[5] = self.state[5].wrapping_add(f);
        self.state[6] = self.state[6].wrapping_add(g);
        self.state[7] = self.state[7].wrapping_add(h);
    }

    /// update the hash state, compressing every completed 64-byte block
    ///
    /// The digest depends only on the concatenation of the inputs, never on
    /// how they were split across calls.
    pub fn update(&mut self, input: &[u8]) {
        if input.is_empty() {
            return;
        }
        self.total_bytes += input.len() as u64;

        let mut rest = input;
        // top up a partially filled buffer first
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(rest.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&rest[..take]);
            self.buffered += take;
            rest = &rest[take..];
            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.update_block(&block);
            self.buffered = 0;
        }

        while rest.len() >= BLOCK_SIZE {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(&rest[..BLOCK_SIZE]);
            self.update_block(&block);
            rest = &rest[BLOCK_SIZE..];
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// append the length padding, compress the final block(s), and serialize
    /// the state as 32 big-endian bytes
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        let bit_len = self.total_bytes * 8;

        self.buffer[self.buffered] = 0x80;
        for byte in &mut self.buffer[self.buffered + 1..] {
            *byte = 0;
        }
        // the length lives in the last 8 bytes of a block; spill into one
        // more block when the 0x80 marker left no room for it
        if self.buffered + 1 + 8 > BLOCK_SIZE {
            let block = self.buffer;
            self.update_block(&block);
            self.buffer = [0; BLOCK_SIZE];
        }
        self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&bit_len.to_be_bytes());
        let block = self.buffer;
        self.update_block(&block);

        let mut digest = [0; DIGEST_SIZE];
        for (i, word) in self.state.iter().enumerate() {
            digest[4 * i..4 * (i + 1)].copy_from_slice(&word.to_be_bytes());
        }
        digest
    }

    /// finalize and render the digest as 64 lowercase hex characters
    pub fn hex_digest(self) -> String {
        hex::encode(self.finalize())
    }
}
