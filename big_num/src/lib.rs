//! Big Num \
//! This crate provides:
//! - [`BigInt`]: signed arbitrary-precision integers held as a sign flag plus a buffer of little-endian 32-bit blocks.
//!   Capacity is managed explicitly (`reserve`, `shrink_to_fit`, `reset`), and the type supports total ordering, increment, addition and subtraction.
//! - [`BigIntError`]: the two ways an operation can fail, allocation failure and an invalid capacity request.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::{BigInt, Block};
pub use big_num_constants::BLOCK_BITS;
pub use error::{BigIntError, BigIntResult};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a = BigInt::from(10_000_000_000_000_i64);
        let b = BigInt::from(-900_000_000_000_i64);
        assert_eq!(&a + &b, BigInt::from(9_100_000_000_000_u64));
        assert_eq!(&a - &b, BigInt::from(10_900_000_000_000_u64));
        assert_eq!(&b - &a, BigInt::from(-10_900_000_000_000_i64));
        assert!(b < a);
    }
}
