// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

/// Bits per storage word.
const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-length packed bit vector.
///
/// The length is set at construction and never changes; bits start out
/// clear and can only be set.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Vec<u64>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given length, in bits, with all
    /// bits clear.
    pub fn new(nbits: usize) -> Self {
        let nwords = (nbits + WORD_BITS - 1) / WORD_BITS;

        Self {
            nbits,
            words: vec![0; nwords],
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`.
    pub fn set(&mut self, index: usize) {
        self.check_bounds(index);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        self.check_bounds(index);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the underlying word storage.
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    fn check_bounds(&self, index: usize) {
        if index >= self.nbits {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.nbits, index,
            )
        }
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_with_length() {
        let bitvec = BitVec::new(1);
        assert_eq!(1, bitvec.len());
        assert_eq!(1, bitvec.words.len());

        let bitvec = BitVec::new(64);
        assert_eq!(64, bitvec.len());
        assert_eq!(1, bitvec.words.len());

        let bitvec = BitVec::new(65);
        assert_eq!(65, bitvec.len());
        assert_eq!(2, bitvec.words.len());
    }

    #[test]
    fn new_bitvec_is_all_clear() {
        let bitvec = BitVec::new(130);
        assert_eq!(0, bitvec.count_ones());
        assert_eq!(130, bitvec.count_zeros());
        for i in 0..130 {
            assert_eq!(false, bitvec.is_set(i));
        }
    }

    #[test]
    fn set_first_bit_only() {
        let mut bitvec = BitVec::new(3);
        bitvec.set(0);
        assert_eq!(true, bitvec.is_set(0));
        assert_eq!(false, bitvec.is_set(1));
        assert_eq!(false, bitvec.is_set(2));
    }

    #[test]
    fn set_last_bit_only() {
        let mut bitvec = BitVec::new(65);
        bitvec.set(64);
        for i in 0..64 {
            assert_eq!(false, bitvec.is_set(i));
        }
        assert_eq!(true, bitvec.is_set(64));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_set_with_correct_index() {
        BitVec::new(5).set(5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_get_with_correct_index() {
        BitVec::new(12).is_set(12);
    }

    #[test]
    fn set_is_idempotent() {
        let mut bitvec = BitVec::new(16);
        bitvec.set(7);
        bitvec.set(7);
        assert_eq!(true, bitvec.is_set(7));
        assert_eq!(1, bitvec.count_ones());
    }

    #[test]
    fn set_across_word_boundaries() {
        let mut bitvec = BitVec::new(192);
        for i in 0..192 {
            assert_eq!(false, bitvec.is_set(i));
        }

        bitvec.set(0);
        bitvec.set(63);
        bitvec.set(64);
        bitvec.set(191);

        assert_eq!(true, bitvec.is_set(0));
        assert_eq!(true, bitvec.is_set(63));
        assert_eq!(true, bitvec.is_set(64));
        assert_eq!(true, bitvec.is_set(191));
        assert_eq!(4, bitvec.count_ones());
        assert_eq!(188, bitvec.count_zeros());
    }

    #[test]
    fn count_tracks_each_set_bit() {
        let mut bitvec = BitVec::new(9);
        assert_eq!(0, bitvec.count_ones());
        assert_eq!(9, bitvec.count_zeros());

        for i in 0..9 {
            bitvec.set(i);
            assert_eq!(true, bitvec.is_set(i));
            assert_eq!(i + 1, bitvec.count_ones());
            assert_eq!(8 - i, bitvec.count_zeros());
        }
    }

    #[test]
    fn equal_set_sequences_compare_equal() {
        let mut a = BitVec::new(70);
        let mut b = BitVec::new(70);

        a.set(3);
        a.set(68);
        b.set(68);
        b.set(3);

        assert_eq!(a, b);
        assert_eq!(a.as_words(), b.as_words());
    }
}
