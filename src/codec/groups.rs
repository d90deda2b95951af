//! Conversions between flat byte sequences and 8/16-bit groups.
//!
//! IPv4 addresses are four 8-bit groups; IPv6 addresses are eight 16-bit
//! groups. Within a group the most significant byte always comes first.

/// A fixed-width big-endian group: `u8` for IPv4 octets, `u16` for IPv6
/// segments.
pub trait Group: Copy {
    /// Number of bytes in one group.
    const BYTES: usize;

    /// Reads one group from exactly [`Group::BYTES`] bytes.
    fn from_be_chunk(chunk: &[u8]) -> Self;

    /// Appends the group's bytes, most significant first.
    fn extend_be(self, out: &mut Vec<u8>);
}

impl Group for u8 {
    const BYTES: usize = 1;

    fn from_be_chunk(chunk: &[u8]) -> Self {
        chunk[0]
    }

    fn extend_be(self, out: &mut Vec<u8>) {
        out.push(self);
    }
}

impl Group for u16 {
    const BYTES: usize = 2;

    fn from_be_chunk(chunk: &[u8]) -> Self {
        u16::from_be_bytes([chunk[0], chunk[1]])
    }

    fn extend_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }
}

/// Packs a flat byte sequence into groups of `G::BYTES` bytes.
///
/// Returns `None` when the input length is not a multiple of the group
/// width.
pub fn groups_from_flat_bytes<G: Group>(bytes: &[u8]) -> Option<Vec<G>> {
    if bytes.len() % G::BYTES != 0 {
        return None;
    }

    Some(bytes.chunks_exact(G::BYTES).map(G::from_be_chunk).collect())
}

/// Flattens groups back into a byte sequence.
pub fn flat_bytes_from_groups<G: Group>(groups: &[G]) -> Vec<u8> {
    let mut out = Vec::with_capacity(groups.len() * G::BYTES);

    for &group in groups {
        group.extend_be(&mut out);
    }

    out
}

#[cfg(not(feature = "speed"))]
/// Splits 16 big-endian bytes into 8 segments.
pub fn segments_from_bytes(bytes: &[u8; 16]) -> [u16; 8] {
    let mut out = [0u16; 8];

    for (i, chunk) in bytes.chunks_exact(2).enumerate() {
        out[i] = u16::from_be_bytes([chunk[0], chunk[1]]);
    }

    out
}

#[cfg(feature = "speed")]
/// Splits 16 big-endian bytes into 8 segments (unrolled shift path).
pub fn segments_from_bytes(b: &[u8; 16]) -> [u16; 8] {
    [
        ((b[0] as u16) << 8) | (b[1] as u16),
        ((b[2] as u16) << 8) | (b[3] as u16),
        ((b[4] as u16) << 8) | (b[5] as u16),
        ((b[6] as u16) << 8) | (b[7] as u16),
        ((b[8] as u16) << 8) | (b[9] as u16),
        ((b[10] as u16) << 8) | (b[11] as u16),
        ((b[12] as u16) << 8) | (b[13] as u16),
        ((b[14] as u16) << 8) | (b[15] as u16),
    ]
}

#[cfg(not(feature = "speed"))]
/// Joins 8 segments into 16 big-endian bytes.
pub fn bytes_from_segments(segments: &[u16; 8]) -> [u8; 16] {
    let mut out = [0u8; 16];

    for (i, s) in segments.iter().enumerate() {
        out[i * 2..i * 2 + 2].copy_from_slice(&s.to_be_bytes());
    }

    out
}

#[cfg(feature = "speed")]
/// Joins 8 segments into 16 big-endian bytes (unrolled shift path).
pub fn bytes_from_segments(segments: &[u16; 8]) -> [u8; 16] {
    let mut out = [0u8; 16];

    for (i, &s) in segments.iter().enumerate() {
        let o = 2 * i;
        out[o] = (s >> 8) as u8;
        out[o + 1] = s as u8;
    }

    out
}
