// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A classic Bloom filter using double hashing.

use std::hash::Hasher;
use std::marker::PhantomData;

use siphasher::sip128::{Hasher128, SipHasher13};

use crate::bitvec::BitVec;
use crate::encode::Encode;
use crate::error::Error;

/// Key used for the SipHash digest.
const DIGEST_KEY: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// A Bloom filter that keeps track of items of type `K`.
///
/// The filter is sized explicitly: `m` is the length of the bit array
/// and `k` the number of probe indices computed per item. Both are fixed
/// at construction. Bits only ever flip from clear to set, so a filter
/// grows fuller over its lifetime and is discarded as a whole.
#[derive(Clone, Debug)]
pub struct BloomFilter<K> {
    bits: BitVec,
    m: usize,
    k: usize,
    key: PhantomData<K>,
}

impl<K: Encode> BloomFilter<K> {
    /// Return a new Bloom filter with `m` bits and `k` probe indices
    /// per item.
    ///
    /// Fails with [`Error::InvalidArgument`] when either parameter is
    /// zero; no filter is constructed in that case.
    pub fn new(m: usize, k: usize) -> Result<BloomFilter<K>, Error> {
        if m == 0 || k == 0 {
            return Err(Error::invalid_argument("m and k must both be positive"));
        }

        Ok(BloomFilter {
            bits: BitVec::new(m),
            m,
            k,
            key: PhantomData,
        })
    }

    /// Insert an item into the filter. This operation is idempotent with
    /// regards to each unique item.
    ///
    /// Fails with [`Error::Encoding`] if the item cannot be encoded; no
    /// bit is set in that case.
    pub fn put(&mut self, item: &K) -> Result<(), Error> {
        let digest = digest(&item.encode()?);

        for index in probe_indices(&digest, self.m, self.k) {
            self.bits.set(index);
        }
        Ok(())
    }

    /// Return whether an item is possibly in the filter.
    ///
    /// A `true` result may be a false positive, with a probability
    /// governed by `m`, `k` and the number of prior insertions. A
    /// `false` result is definitive: an item that was inserted is always
    /// reported as contained.
    pub fn probably_contains(&self, item: &K) -> Result<bool, Error> {
        let digest = digest(&item.encode()?);

        for index in probe_indices(&digest, self.m, self.k) {
            if !self.bits.is_set(index) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Return the number of bits in this filter (`m` parameter).
    pub fn m(&self) -> usize {
        self.m
    }

    /// Return the number of probe indices per item (`k` parameter).
    pub fn k(&self) -> usize {
        self.k
    }
}

impl<K> PartialEq for BloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.m == other.m && self.k == other.k
    }
}

impl<K> Eq for BloomFilter<K> {}

/// Digest a byte sequence with keyed SipHash-1-3, returning the 128-bit
/// output. Only the first 8 bytes feed the probe derivation; the digest
/// is transient and never stored.
fn digest(bytes: &[u8]) -> [u8; 16] {
    let mut hasher = SipHasher13::new_with_key(&DIGEST_KEY);
    hasher.write(bytes);
    hasher.finish128().as_bytes()
}

/// Read 4 digest bytes at `offset` as a big-endian 32-bit value with the
/// top bit masked to zero, so the result is non-negative regardless of
/// the host integer representation.
fn base_hash(digest: &[u8; 16], offset: usize) -> i32 {
    ((digest[offset] & 0x7f) as i32) << 24
        | (digest[offset + 1] as i32) << 16
        | (digest[offset + 2] as i32) << 8
        | digest[offset + 3] as i32
}

/// Derive `k` probe indices in `[0, m)` from a digest by double hashing
/// (Kirsch-Mitzenmacher): two base hash values taken from the first 8
/// digest bytes are combined linearly, so a single digest computation
/// yields all `k` positions.
fn probe_indices(digest: &[u8; 16], m: usize, k: usize) -> impl Iterator<Item = usize> {
    let hash1 = base_hash(digest, 0);
    let hash2 = base_hash(digest, 4);

    (0..k).map(move |i| {
        let mut x = hash1.wrapping_add((i as i32).wrapping_mul(hash2));
        if x < 0 {
            // Clear the sign bit instead of relying on wraparound
            // semantics, which differ across languages.
            x &= 0x7fff_ffff;
        }
        x as usize % m
    })
}
