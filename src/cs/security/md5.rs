//! DISCLAIMER: MD5 is broken for collision resistance. This module exists to reproduce
//! MD5 bit-for-bit where a legacy protocol requires it (for example as the hash inside
//! HMAC-MD5). Do not pick it for new designs; use SHA-2 or SHA-3 instead.
//!
//! The implementation is one-shot: the whole message is padded up front and then
//! compressed block by block. There is no incremental interface.

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The size of an MD5 compression block in bytes (512 bits).
pub const MD5_BLOCK_SIZE: usize = 64;

/// Offset of the 64-bit length field inside the final block.
const LENGTH_OFFSET: usize = MD5_BLOCK_SIZE - 8;

/// The initial values for (A, B, C, D) from RFC 1321.
const INIT_A: u32 = 0x67452301;
const INIT_B: u32 = 0xEFCDAB89;
const INIT_C: u32 = 0x98BADCFE;
const INIT_D: u32 = 0x10325476;

/// The sine table constants (K) in MD5 (32 bits).
/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63, taken from the published table.
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-step left rotation amounts, grouped by round.
#[rustfmt::skip]
const S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// Chaining state (A, B, C, D). Lives for a single digest computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Md5State {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Md5State {
    fn new() -> Self {
        Self {
            a: INIT_A,
            b: INIT_B,
            c: INIT_C,
            d: INIT_D,
        }
    }

    /// Runs the 64 MD5 steps over one 64-byte block and folds the result
    /// back into the chaining state.
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), MD5_BLOCK_SIZE);

        let mut m = [0u32; 16];
        for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        let (mut a, mut b, mut c, mut d) = (self.a, self.b, self.c, self.d);

        for i in 0..64 {
            let (f, g) = match i {
                // F function
                0..=15 => ((b & c) | (!b & d), i),
                // G function
                16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                // H function
                32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
                // I function
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let f = f.wrapping_add(a).wrapping_add(K[i]).wrapping_add(m[g]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(f.rotate_left(S[i]));
        }

        self.a = self.a.wrapping_add(a);
        self.b = self.b.wrapping_add(b);
        self.c = self.c.wrapping_add(c);
        self.d = self.d.wrapping_add(d);
    }

    /// Serializes A, B, C, D as little-endian words, in that order.
    fn into_bytes(self) -> [u8; MD5_OUTPUT_SIZE] {
        let mut output = [0u8; MD5_OUTPUT_SIZE];
        output[0..4].copy_from_slice(&self.a.to_le_bytes());
        output[4..8].copy_from_slice(&self.b.to_le_bytes());
        output[8..12].copy_from_slice(&self.c.to_le_bytes());
        output[12..16].copy_from_slice(&self.d.to_le_bytes());
        output
    }
}

/// Applies MD5 padding to `message`.
///
/// Appends `0x80`, then zero bytes until the length is 56 mod 64, then the
/// original length in bits (mod 2^64) as a little-endian `u64`. The returned
/// buffer is always a non-empty multiple of [`MD5_BLOCK_SIZE`].
pub fn pad_message(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let zeros = (LENGTH_OFFSET + MD5_BLOCK_SIZE - (message.len() + 1) % MD5_BLOCK_SIZE)
        % MD5_BLOCK_SIZE;

    let mut padded = Vec::with_capacity(message.len() + 1 + zeros + 8);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bit_len.to_le_bytes());
    padded
}

/// Computes the MD5 digest of `data` in a single shot.
///
/// Total over all inputs, including the empty slice.
pub fn md5_digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let padded = pad_message(data);
    log::trace!(
        "md5: {} input bytes, {} blocks",
        data.len(),
        padded.len() / MD5_BLOCK_SIZE
    );

    let mut state = Md5State::new();
    for block in padded.chunks_exact(MD5_BLOCK_SIZE) {
        state.compress(block);
    }
    state.into_bytes()
}

/// Computes the MD5 digest of `data` and renders it as 32 lowercase hex digits.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(md5_digest(data))
}
