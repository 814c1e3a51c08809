//! Canonical byte encoding of filter elements.
//!
//! A Bloom filter never stores its elements; it only ever sees the byte
//! sequence an element encodes to. The [`Encode`] trait is that seam:
//! implement it for a type to make the type usable as a filter key. The
//! one contract is determinism — two equal values must produce identical
//! byte sequences, or membership queries lose their no-false-negative
//! guarantee.
//!
//! Implementations are provided for strings (UTF-8 bytes), the integer
//! primitives (big-endian bytes), raw byte containers, `bool` and
//! `char`. All of these are infallible; the `Result` return exists for
//! user-defined encoders that can legitimately fail, e.g. a serializer
//! over a type with unrepresentable states.
use crate::error::Error;

/// Deterministic conversion of a value into a canonical byte sequence.
pub trait Encode {
    /// Encode `self` into bytes.
    ///
    /// Equal values must return identical byte sequences. A failure must
    /// be reported as [`Error::Encoding`] rather than by returning an
    /// empty or placeholder encoding.
    fn encode(&self) -> Result<Vec<u8>, Error>;
}

impl Encode for str {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Encode for String {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Encode for [u8] {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_vec())
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(self.clone())
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_vec())
    }
}

impl Encode for bool {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(vec![u8::from(*self)])
    }
}

impl Encode for char {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut buf = [0u8; 4];
        Ok(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Result<Vec<u8>, Error> {
        (**self).encode()
    }
}

macro_rules! encode_int {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                fn encode(&self) -> Result<Vec<u8>, Error> {
                    Ok(self.to_be_bytes().to_vec())
                }
            }
        )*
    };
}

encode_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
