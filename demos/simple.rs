//! A simple example showing the use of a Bloom filter.
use bloomer::{BloomFilter, Error};

fn main() -> Result<(), Error> {
    let mut bf = BloomFilter::new(1024, 3)?;

    bf.put(&"foo")?;
    bf.put(&"bar")?;

    bf.probably_contains(&"foo")?; // true
    bf.probably_contains(&"bar")?; // true
    bf.probably_contains(&"baz")?; // false, most likely

    Ok(())
}
