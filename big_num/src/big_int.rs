//! # BigInt
//! Signed arbitrary-precision integers in sign-magnitude form.
//! The magnitude lives in a buffer of 32-bit blocks, least significant block first.
//! The buffer length is the value's capacity; blocks above the significant ones are zero padding
//! and are only dropped by an explicit [`BigInt::shrink_to_fit`].
//! # Example
//! ```
//! use big_num::BigInt;
//!
//! let a = BigInt::from(0xFFFF_FFFF_u64);
//! let b = BigInt::from(1_u32);
//! let c = &a + &b;
//! assert_eq!(c.blocks(), &[0, 1]);
//! assert!(c > a);
//! assert!((&c - &c).is_zero());
//! ```
//!

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Neg,
};

use tracing::{debug, trace};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{BigIntError, BigIntResult};

/// One positional unit of a magnitude.
pub type Block = u32;

macro_rules! zeroed_blocks {
    ($cap: expr) => {
        {
            let cap: usize = $cap;
            let mut v: Vec<Block> = Vec::new();
            match v.try_reserve_exact(cap) {
                Ok(()) => {
                    v.resize(cap, 0);
                    Ok(v)
                },
                Err(err) => Err(BigIntError::from(err)),
            }
        }
    };
}

macro_rules! significant_len {
    ($blocks: expr) => {
        $blocks
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1)
    };
}

#[derive(Debug, Default)]
pub struct BigInt {
    blocks: Vec<Block>,
    sign: bool,
}

#[cold]
#[inline(never)]
fn arithmetic_failed(err: BigIntError) -> ! {
    panic!("BigInt arithmetic failed: {}", err)
}

// 杂项辅助函数
impl BigInt {
    /// Adds one to `blocks`. Returns the carry out of the last block.
    fn increment_blocks(blocks: &mut [Block]) -> bool {
        for b in blocks.iter_mut() {
            *b = b.wrapping_add(1);
            if *b != 0 {
                return false;
            }
        }
        true
    }
    /// Subtracts one from `blocks`. Returns the borrow out of the last block.
    fn decrement_blocks(blocks: &mut [Block]) -> bool {
        for b in blocks.iter_mut() {
            let (val, borrow) = b.overflowing_sub(1);
            *b = val;
            if !borrow {
                return false;
            }
        }
        true
    }
    /// Two's-complement negation over the whole slice, carry out discarded.
    fn negate_blocks(blocks: &mut [Block]) {
        blocks.iter_mut().for_each(|b| *b = !*b);
        BigInt::increment_blocks(blocks);
    }
    fn normalize_sign(&mut self) {
        if self.sign && self.is_zero() {
            self.sign = false;
        }
    }
    fn grow_to(&mut self, new_capacity: usize) -> BigIntResult<()> {
        let old_capacity = self.blocks.len();
        if new_capacity <= old_capacity {
            return Ok(());
        }
        self.blocks.try_reserve_exact(new_capacity - old_capacity)?;
        self.blocks.resize(new_capacity, 0);
        trace!(old_capacity, new_capacity, "grew block buffer");
        Ok(())
    }
}

// 实现查询
impl BigInt {
    /// Number of blocks in the buffer, padding included.
    pub fn capacity(&self) -> usize {
        self.blocks.len()
    }
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
    /// Mutable view of the raw blocks.
    ///
    /// Zeroing every block of a negative value through this view leaves the sign flag set;
    /// comparison and the predicates still treat such a value as zero, and the next arithmetic
    /// operation clears the flag.
    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }
    /// `true` for negative values.
    pub fn sign(&self) -> bool {
        self.sign
    }
    pub fn is_zero(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }
    pub fn is_positive(&self) -> bool {
        !self.sign && !self.is_zero()
    }
    pub fn is_negative(&self) -> bool {
        self.sign && !self.is_zero()
    }
    /// Number of blocks up to and including the most significant non-zero one.
    pub fn significant_len(&self) -> usize {
        significant_len!(self.blocks)
    }
}

// 实现容量管理
impl BigInt {
    /// Grows the buffer to at least `new_capacity` blocks, zero-filling the new ones.
    /// Never shrinks. On failure the value is left untouched.
    pub fn reserve(&mut self, new_capacity: usize) -> BigIntResult<()> {
        self.grow_to(new_capacity)
    }

    /// Drops the zero padding above the significant blocks.
    /// A zero value releases its buffer entirely.
    pub fn shrink_to_fit(&mut self) {
        let len = self.significant_len();
        if len == 0 {
            self.reset();
            return;
        }
        let old_capacity = self.blocks.len();
        self.blocks.truncate(len);
        self.blocks.shrink_to_fit();
        if len != old_capacity {
            trace!(old_capacity, new_capacity = len, "shrank block buffer");
        }
    }

    /// Releases the buffer and returns to canonical zero.
    pub fn reset(&mut self) {
        if !self.blocks.is_empty() {
            trace!(old_capacity = self.blocks.len(), "released block buffer");
        }
        self.blocks = Vec::new();
        self.sign = false;
    }

    pub fn swap(&mut self, other: &mut BigInt) {
        std::mem::swap(self, other);
    }

    /// Moves the value out, leaving canonical zero with no buffer behind.
    pub fn take(&mut self) -> BigInt {
        std::mem::take(self)
    }

    /// Copies `source` into a buffer of exactly `capacity` blocks, zero-filling the excess.
    ///
    /// Fails with [`BigIntError::InvalidCapacity`] if `capacity` is below `source.capacity()`.
    pub fn copy_with_capacity(source: &BigInt, capacity: usize) -> BigIntResult<BigInt> {
        let required = source.capacity();
        if capacity < required {
            debug!(requested = capacity, required, "rejected capacity request");
            return Err(BigIntError::InvalidCapacity { requested: capacity, required });
        }
        let mut blocks = zeroed_blocks!(capacity)?;
        blocks[..required].copy_from_slice(&source.blocks);
        Ok(BigInt { blocks, sign: source.sign })
    }

    /// Copy-assignment. Keeps the larger of the two capacities; blocks past
    /// `source.capacity()` are zeroed.
    pub fn try_assign(&mut self, source: &BigInt) -> BigIntResult<()> {
        let len = source.capacity();
        self.grow_to(len)?;
        self.blocks[..len].copy_from_slice(&source.blocks);
        self.blocks[len..].fill(0);
        self.sign = source.sign;
        Ok(())
    }
}

impl Clone for BigInt {
    fn clone(&self) -> Self {
        BigInt { blocks: self.blocks.clone(), sign: self.sign }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_assign(source) {
            arithmetic_failed(err);
        }
    }
}

// 实现构造
impl BigInt {
    pub fn new() -> Self {
        BigInt::default()
    }
    /// Adopts `blocks` (least significant first) as the magnitude.
    /// A zero magnitude always gets a cleared sign.
    pub fn from_raw(blocks: Vec<Block>, sign: bool) -> Self {
        let mut val = BigInt { blocks, sign };
        val.normalize_sign();
        val
    }
    fn value_of_unsigned(val: u64, width: usize) -> BigInt {
        if width == U32_BLOCKS && val <= MAX_CONSTANT as u64 {
            return POS_CACHE[val as usize].clone();
        }
        let blocks = (0..width)
            .map(|i| (val >> (i as u32 * BLOCK_BITS)) as Block)
            .collect();
        BigInt { blocks, sign: false }
    }
    /// `val` holds a `width`-block two's-complement integer. The minimum value of that
    /// width gets one extra block for the carry out of the negation.
    fn value_of_signed(val: i64, width: usize, is_min: bool) -> BigInt {
        if width == U32_BLOCKS && val.unsigned_abs() <= MAX_CONSTANT as u64 {
            let n = val.unsigned_abs() as usize;
            return if val < 0 { NEG_CACHE[n].clone() } else { POS_CACHE[n].clone() };
        }
        let bits = val as u64;
        let mut blocks: Vec<Block> = Vec::with_capacity(width + is_min as usize);
        blocks.extend((0..width).map(|i| (bits >> (i as u32 * BLOCK_BITS)) as Block));
        if is_min {
            blocks.push(0);
        }
        let sign = val < 0;
        if sign {
            blocks[..width].iter_mut().for_each(|b| *b = !*b);
            BigInt::increment_blocks(&mut blocks);
        }
        BigInt { blocks, sign }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty => $width: expr),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of_unsigned(val as u64, $width)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty => $width: expr),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of_signed(val as i64, $width, val == <$i>::MIN)
        }
    }
    )*
    };
}

macro_rules! impl_widening_to_big_int {
    ($($from: ty => $to: ty),*) => {
    $(
    impl From<$from> for BigInt {
        fn from(val: $from) -> Self {
            BigInt::from(val as $to)
        }
    }
    )*
    };
}

impl_unsigned_to_big_int!(u32 => U32_BLOCKS, u64 => U64_BLOCKS);
impl_signed_to_big_int!(i32 => U32_BLOCKS, i64 => U64_BLOCKS);
impl_widening_to_big_int!(u8 => u32, u16 => u32, usize => u64, i8 => i32, i16 => i32, isize => i64);

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let limit = self.blocks.len().min(other.blocks.len());

        if self.blocks[limit..].iter().any(|&b| b != 0) {
            return Ordering::Greater;
        }
        if other.blocks[limit..].iter().any(|&b| b != 0) {
            return Ordering::Less;
        }

        for pos in (0..limit).rev() {
            let a = self.blocks[pos];
            let b = other.blocks[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_zero = self.is_zero();
        let other_zero = other.is_zero();

        // zero ignores its stored sign
        match (self_zero, other_zero) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.sign { Ordering::Greater } else { Ordering::Less };
            },
            (false, true) => {
                return if self.sign { Ordering::Less } else { Ordering::Greater };
            },
            (false, false) => {},
        }

        if self.sign != other.sign {
            return if self.sign { Ordering::Less } else { Ordering::Greater };
        }

        let ord = self.compare_mag(other);
        if self.sign { ord.reverse() } else { ord }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}
impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        self.blocks[..self.significant_len()].hash(state);
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.sign = !self.sign;
        self.normalize_sign();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现无符号加减
impl BigInt {
    /// `|self| += |other|`. Space for a carry past the last block is reserved before any
    /// block is written.
    fn add_magnitude(&mut self, other: &[Block]) -> BigIntResult<()> {
        let other = &other[..significant_len!(other)];
        if other.is_empty() {
            return Ok(());
        }

        let old_capacity = self.blocks.len();
        let len = old_capacity.max(other.len());
        self.blocks.try_reserve_exact(len + 1 - old_capacity)?;
        if len > old_capacity {
            self.blocks.resize(len, 0);
            trace!(old_capacity, new_capacity = len, "grew block buffer");
        }

        let mut sum: u64 = 0;
        for (x, &y) in self.blocks.iter_mut().zip(other) {
            sum = *x as u64 + y as u64 + (sum >> BLOCK_BITS);
            *x = sum as Block;
        }

        let mut carry = (sum >> BLOCK_BITS) != 0;
        if carry {
            carry = BigInt::increment_blocks(&mut self.blocks[other.len()..]);
        }
        if carry {
            trace!(old_capacity = len, new_capacity = len + 1, "carry grew block buffer");
            self.blocks.push(1);
        }
        Ok(())
    }

    /// `|self| -= |other|`. A borrow out of the last block means `|other| > |self|`: the
    /// buffer then holds `2^(32 * capacity) - |result|`, so it is negated back and the sign flips.
    fn sub_magnitude(&mut self, other: &[Block]) -> BigIntResult<()> {
        let other = &other[..significant_len!(other)];
        if other.is_empty() {
            return Ok(());
        }

        self.grow_to(other.len())?;

        let mut difference: i64 = 0;
        for (x, &y) in self.blocks.iter_mut().zip(other) {
            difference = *x as i64 - y as i64 + (difference >> BLOCK_BITS);
            *x = difference as Block;
        }

        let mut borrow = (difference >> BLOCK_BITS) != 0;
        if borrow {
            borrow = BigInt::decrement_blocks(&mut self.blocks[other.len()..]);
        }
        if borrow {
            BigInt::negate_blocks(&mut self.blocks);
            self.sign = !self.sign;
        }
        Ok(())
    }
}

// 实现加法
impl BigInt {
    pub fn try_add_assign(&mut self, rhs: &BigInt) -> BigIntResult<()> {
        if self.sign == rhs.sign {
            self.add_magnitude(&rhs.blocks)?;
        } else {
            self.sub_magnitude(&rhs.blocks)?;
        }
        self.normalize_sign();
        Ok(())
    }
    pub fn try_add(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        let mut sum = self.clone();
        sum.try_add_assign(rhs)?;
        Ok(sum)
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if let Err(err) = self.try_add_assign(rhs) {
            arithmetic_failed(err);
        }
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

// 实现减法
impl BigInt {
    pub fn try_sub_assign(&mut self, rhs: &BigInt) -> BigIntResult<()> {
        if self.sign == rhs.sign {
            self.sub_magnitude(&rhs.blocks)?;
        } else {
            self.add_magnitude(&rhs.blocks)?;
        }
        self.normalize_sign();
        Ok(())
    }
    pub fn try_sub(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        let mut difference = self.clone();
        difference.try_sub_assign(rhs)?;
        Ok(difference)
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if let Err(err) = self.try_sub_assign(rhs) {
            arithmetic_failed(err);
        }
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs
    }
}

// 实现自增
impl BigInt {
    /// `self += 1`.
    pub fn try_increment(&mut self) -> BigIntResult<&mut Self> {
        if self.is_negative() {
            // |self| >= 1, the borrow stops inside the buffer
            BigInt::decrement_blocks(&mut self.blocks);
            self.normalize_sign();
            return Ok(self);
        }

        if self.blocks.iter().all(|&b| b == Block::MAX) {
            self.blocks.try_reserve_exact(1)?;
        }
        self.sign = false;
        if BigInt::increment_blocks(&mut self.blocks) {
            let old_capacity = self.blocks.len();
            trace!(old_capacity, new_capacity = old_capacity + 1, "carry grew block buffer");
            self.blocks.push(1);
        }
        Ok(self)
    }
    /// Increments and returns the value held before.
    pub fn try_post_increment(&mut self) -> BigIntResult<BigInt> {
        let previous = self.clone();
        self.try_increment()?;
        Ok(previous)
    }
    /// # Panics
    /// If the buffer cannot grow to hold the carry.
    pub fn increment(&mut self) -> &mut Self {
        match self.try_increment() {
            Ok(this) => this,
            Err(err) => arithmetic_failed(err),
        }
    }
    pub fn post_increment(&mut self) -> BigInt {
        match self.try_post_increment() {
            Ok(previous) => previous,
            Err(err) => arithmetic_failed(err),
        }
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(0_u32);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[0][..], false));

    let big = BigInt::from(0_i64);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[0, 0][..], false));

    let big = BigInt::from(-7_i32);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[7][..], true));

    let big = BigInt::from(-1_i32);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[1][..], true));

    let big = BigInt::from(-100_000_i32);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[100_000][..], true));

    let big = BigInt::from(u32::MAX);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[u32::MAX][..], false));

    let big = BigInt::from(i32::MAX);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[0x7FFF_FFFF][..], false));

    let big = BigInt::from(u64::MAX);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[u32::MAX, u32::MAX][..], false));

    let big = BigInt::from(i64::MAX);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[u32::MAX, 0x7FFF_FFFF][..], false));

    let big = BigInt::from(-0x1_0000_0001_i64);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[1, 1][..], true));

    let big = BigInt::from(i8::MIN);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[128][..], true));

    let big = BigInt::from(u16::MAX);
    assert_eq!((big.blocks.as_slice(), big.sign), (&[0xFFFF][..], false));

    let big = BigInt::from(usize::MAX);
    assert_eq!(big.capacity(), U64_BLOCKS);
    assert!(big.is_positive());
}

#[test]
fn test_from_min() {
    let big = BigInt::from(i32::MIN);
    assert_eq!(big.capacity(), 2);
    assert_eq!(big.blocks, vec![0x8000_0000, 0]);
    assert!(big.sign);

    let big = BigInt::from(i64::MIN);
    assert_eq!(big.capacity(), 3);
    assert_eq!(big.blocks, vec![0, 0x8000_0000, 0]);
    assert!(big.sign);

    assert!(BigInt::from(i64::MIN) < BigInt::from(i32::MIN));
    assert_eq!(BigInt::from(i32::MIN), BigInt::from(i32::MIN as i64));
}

#[test]
fn test_cache() {
    let a = BigInt::from(16_u32);
    let b = BigInt::from(16_u64);
    assert_eq!(a.capacity(), 1);
    assert_eq!(b.capacity(), 2);
    assert_eq!(a, b);
    assert_eq!(BigInt::from(-16_i32), -BigInt::from(16_i8));
    assert!(!BigInt::from(0_i32).sign);
}

#[test]
fn test_reserve() {
    let mut a = BigInt::from(5_u32);
    a.reserve(4).unwrap();
    assert_eq!(a.blocks, vec![5, 0, 0, 0]);

    a.reserve(2).unwrap();
    assert_eq!(a.capacity(), 4);

    let mut b = BigInt::from(-3_i32);
    let err = b.reserve(usize::MAX).unwrap_err();
    assert!(matches!(err, BigIntError::Alloc(_)));
    assert_eq!(b.blocks, vec![3]);
    assert!(b.sign);
}

#[test]
fn test_shrink_to_fit() {
    let mut a = BigInt::from_raw(vec![5, 0, 0], true);
    a.shrink_to_fit();
    assert_eq!(a.blocks, vec![5]);
    assert!(a.sign);

    let mut b = BigInt::from_raw(vec![0, 7, 0, 0], false);
    b.shrink_to_fit();
    assert_eq!(b.blocks, vec![0, 7]);

    let mut z = BigInt::from(0_u64);
    z.shrink_to_fit();
    assert_eq!(z.capacity(), 0);
    assert!(!z.sign);

    let mut minus_zero = BigInt::from(-9_i32);
    minus_zero.blocks_mut()[0] = 0;
    minus_zero.shrink_to_fit();
    assert_eq!(minus_zero.capacity(), 0);
    assert!(!minus_zero.sign);
}

#[test]
fn test_reset_swap_take() {
    let mut a = BigInt::from(-42_i64);
    let mut b = BigInt::from(7_u32);
    a.swap(&mut b);
    assert_eq!(a.blocks, vec![7]);
    assert!(!a.sign);
    assert_eq!(b.blocks, vec![42, 0]);
    assert!(b.sign);

    let moved = b.take();
    assert_eq!(moved, BigInt::from(-42));
    assert_eq!(b.capacity(), 0);
    assert!(!b.sign);

    a.reset();
    assert_eq!(a.capacity(), 0);
    assert!(!a.sign);
    assert!(a.is_zero());
}

#[test]
fn test_copy_with_capacity() {
    let a = BigInt::from(-0x1_0000_0002_i64);
    let padded = BigInt::copy_with_capacity(&a, 4).unwrap();
    assert_eq!(padded.blocks, vec![2, 1, 0, 0]);
    assert!(padded.sign);
    assert_eq!(padded, a);

    let err = BigInt::copy_with_capacity(&a, 1).unwrap_err();
    assert_eq!(err, BigIntError::InvalidCapacity { requested: 1, required: 2 });

    let empty = BigInt::copy_with_capacity(&BigInt::new(), 0).unwrap();
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_assign() {
    let mut a = BigInt::from_raw(vec![9, 9, 9], false);
    a.try_assign(&BigInt::from(-1_i32)).unwrap();
    assert_eq!(a.blocks, vec![1, 0, 0]);
    assert!(a.sign);

    let mut b = BigInt::new();
    b.clone_from(&BigInt::from(u64::MAX));
    assert_eq!(b.blocks, vec![u32::MAX, u32::MAX]);
}

#[test]
fn test_compare_zero() {
    let mut minus_zero = BigInt::from(-5_i32);
    minus_zero.blocks_mut()[0] = 0;
    assert!(minus_zero.sign());
    assert!(!minus_zero.is_negative());
    assert_eq!(minus_zero, BigInt::new());
    assert_eq!(minus_zero, BigInt::from(0_u64));
    assert!(minus_zero < BigInt::from(1_u32));
    assert!(minus_zero > BigInt::from(-1_i32));
    assert!(BigInt::new() <= minus_zero && BigInt::new() >= minus_zero);
}

#[test]
fn test_compare_padding() {
    let a = BigInt::from_raw(vec![1, 2], false);
    let b = BigInt::from_raw(vec![1, 2, 0, 0], false);
    let c = BigInt::from_raw(vec![1, 2, 0, 1], false);
    assert_eq!(a, b);
    assert!(a < c && c > b);
    assert!(-&a > -&c);
    assert!(BigInt::from_raw(vec![0, 0, 0, 1], true) < BigInt::from_raw(vec![u32::MAX], true));
}

#[test]
fn test_add() {
    let a = BigInt::from(0xFFFF_FFFF_u64);
    let b = BigInt::from(1_u32);
    let c = &a + &b;
    assert_eq!(c.blocks, vec![0, 1]);

    let c = &b + &a;
    assert_eq!(c.blocks, vec![0, 1]);

    let c = BigInt::from(u32::MAX) + BigInt::from(1_u32);
    assert_eq!(c.blocks, vec![0, 1]);

    let c = BigInt::from(u64::MAX) + BigInt::from(u64::MAX);
    assert_eq!(c.blocks, vec![u32::MAX - 1, u32::MAX, 1]);

    let c = BigInt::new() + BigInt::from(-3_i32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[3][..], true));

    let c = BigInt::from(5_i32) + BigInt::from(-7_i32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[2][..], true));

    let c = BigInt::from(-5_i32) + BigInt::from(7_i32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[2][..], false));

    let c = BigInt::from(-0x1_0000_0000_i64) + BigInt::from(1_u32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[u32::MAX, 0][..], true));

    let c = BigInt::from(9_i32) + BigInt::from(-9_i64);
    assert!(c.is_zero());
    assert!(!c.sign);
}

#[test]
fn test_sub() {
    let c = BigInt::from(0x1_0000_0000_u64) - BigInt::from(1_u32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[u32::MAX, 0][..], false));

    let c = BigInt::from(1_u32) - BigInt::from(0x1_0000_0000_u64);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[u32::MAX, 0][..], true));

    let c = BigInt::from(-3_i32) - BigInt::from(-3_i32);
    assert!(c.is_zero());
    assert!(!c.sign);

    let c = BigInt::from(-3_i32) - BigInt::from(4_i32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[7][..], true));

    let c = BigInt::from(3_i32) - BigInt::from(-4_i32);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[7][..], false));

    let c = BigInt::new() - BigInt::from(i32::MIN);
    assert_eq!((c.blocks.as_slice(), c.sign), (&[0x8000_0000][..], false));

    let mut d = BigInt::from(10_u32);
    d -= &BigInt::from(25_u64);
    assert_eq!(d, BigInt::from(-15));
}

#[test]
fn test_arithmetic_failure_leaves_value() {
    let mut a = BigInt::from(1_u32);
    a.reserve(2).unwrap();
    assert!(a.reserve(usize::MAX).is_err());
    assert_eq!(a.blocks, vec![1, 0]);
}

#[test]
fn test_increment() {
    let mut a = BigInt::from(0xFFFF_FFFF_u64);
    a.increment();
    assert_eq!(a.blocks, vec![0, 1]);

    let mut b = BigInt::from(u32::MAX);
    b.increment();
    assert_eq!(b.blocks, vec![0, 1]);

    let mut c = BigInt::new();
    c.increment();
    assert_eq!(c.blocks, vec![1]);

    let mut d = BigInt::from(-1_i32);
    d.increment();
    assert!(d.is_zero());
    assert!(!d.sign);

    let mut e = BigInt::from(-0x1_0000_0000_i64);
    e.increment().increment();
    assert_eq!((e.blocks.as_slice(), e.sign), (&[u32::MAX - 1, 0][..], true));

    let mut f = BigInt::from(41_u8);
    let previous = f.post_increment();
    assert_eq!(previous, BigInt::from(41));
    assert_eq!(f, BigInt::from(42));
}

#[test]
fn test_neg() {
    let a = BigInt::from(12_u32);
    assert_eq!(-&a, BigInt::from(-12));
    assert!(!(-BigInt::from(0_u32)).sign);
    assert_eq!(-(-a.clone()), a);
}
