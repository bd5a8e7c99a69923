use lazy_static::*;

use crate::big_int::Block;
use crate::big_num_constants::*;
use crate::BigInt;

lazy_static! {
    /// `POS_CACHE[n]` is `+n` held in a single block.
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_raw(vec![n as Block], false));
    /// `NEG_CACHE[n]` is `-n` held in a single block. `NEG_CACHE[0]` is canonical zero.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_raw(vec![n as Block], true));
}
