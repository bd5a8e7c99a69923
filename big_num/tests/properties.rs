use std::collections::HashSet;

use big_num::{BigInt, BigIntError, BLOCK_BITS};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SAMPLES: usize = 200;

fn to_i128(value: &BigInt) -> i128 {
    let magnitude = value
        .blocks()
        .iter()
        .rev()
        .fold(0_i128, |acc, &b| (acc << BLOCK_BITS) | b as i128);
    if value.sign() { -magnitude } else { magnitude }
}

/// Mix of boundary values and random ones, each paired with how it was built.
fn sample_values(rng: &mut StdRng) -> Vec<(i128, BigInt)> {
    let mut values = vec![
        (0, BigInt::new()),
        (0, BigInt::from(0_u32)),
        (0, BigInt::from(0_i64)),
        (-1, BigInt::from(-1_i32)),
        (1, BigInt::from(1_u64)),
        (i32::MIN as i128, BigInt::from(i32::MIN)),
        (i32::MAX as i128, BigInt::from(i32::MAX)),
        (u32::MAX as i128, BigInt::from(u32::MAX)),
        (i64::MIN as i128, BigInt::from(i64::MIN)),
        (i64::MAX as i128, BigInt::from(i64::MAX)),
        (u64::MAX as i128, BigInt::from(u64::MAX)),
    ];
    for _ in 0..SAMPLES {
        let value = match rng.random_range(0..4) {
            0 => {
                let v: i32 = rng.random();
                (v as i128, BigInt::from(v))
            },
            1 => {
                let v: u32 = rng.random();
                (v as i128, BigInt::from(v))
            },
            2 => {
                let v: i64 = rng.random();
                (v as i128, BigInt::from(v))
            },
            _ => {
                let v: i64 = rng.random_range(-20..=20);
                (v as i128, BigInt::from(v))
            },
        };
        values.push(value);
    }
    values
}

#[test]
fn round_trip_construction() {
    for v in [0_i32, -1, 1, i32::MIN, i32::MAX] {
        assert_eq!(to_i128(&BigInt::from(v)), v as i128);
    }
    for v in [0_u32, 1, u32::MAX] {
        assert_eq!(to_i128(&BigInt::from(v)), v as i128);
    }
    for v in [0_i64, -1, 1, i64::MIN, i64::MAX] {
        assert_eq!(to_i128(&BigInt::from(v)), v as i128);
    }
    for v in [0_u64, 1, u64::MAX] {
        assert_eq!(to_i128(&BigInt::from(v)), v as i128);
    }
    assert!(!BigInt::from(0_i32).sign());
    assert!(!BigInt::from(0_i64).sign());
}

#[test]
fn addition_and_subtraction_match_reference() {
    let mut rng = StdRng::from_seed([0; 32]);
    let values = sample_values(&mut rng);
    for (x, a) in &values {
        for (y, b) in values.iter().step_by(7) {
            let sum = a + b;
            let difference = a - b;
            assert_eq!(to_i128(&sum), x + y, "{} + {}", x, y);
            assert_eq!(to_i128(&difference), x - y, "{} - {}", x, y);
            if sum.is_zero() {
                assert!(!sum.sign());
            }
            if difference.is_zero() {
                assert!(!difference.sign());
            }
        }
    }
}

#[test]
fn addition_is_commutative_and_associative() {
    let mut rng = StdRng::from_seed([1; 32]);
    let values = sample_values(&mut rng);
    for window in values.windows(3) {
        let (a, b, c) = (&window[0].1, &window[1].1, &window[2].1);
        assert_eq!(a + b, b + a);
        assert_eq!(&(a + b) + c, a + &(b + c));
    }
}

#[test]
fn additive_inverse_is_canonical_zero() {
    let mut rng = StdRng::from_seed([2; 32]);
    for (_, a) in sample_values(&mut rng) {
        let zero = &a - &a;
        assert!(zero.is_zero());
        assert!(!zero.sign());

        let zero = &a + &(-&a);
        assert!(zero.is_zero());
        assert!(!zero.sign());
        assert_eq!(zero, BigInt::new());
    }
}

#[test]
fn ordering_is_total() {
    let mut rng = StdRng::from_seed([3; 32]);
    let values = sample_values(&mut rng);
    for (x, a) in &values {
        for (y, b) in values.iter().step_by(5) {
            let holds = [a < b, a == b, a > b];
            assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
            assert_eq!(a <= b, a < b || a == b);
            assert_eq!(a >= b, a > b || a == b);
            assert_eq!(a != b, !(a == b));
            assert_eq!(a.cmp(b), x.cmp(y), "{} <=> {}", x, y);
        }
    }
}

#[test]
fn equality_ignores_padding() {
    let mut rng = StdRng::from_seed([4; 32]);
    let values = sample_values(&mut rng);
    for (_, a) in values.iter().take(60) {
        let padded = BigInt::copy_with_capacity(a, a.capacity() + 3).unwrap();
        assert_eq!(padded.capacity(), a.capacity() + 3);
        assert!(padded == *a && !(padded != *a));
        assert!(padded <= *a && padded >= *a);
        assert!(!(padded < *a) && !(padded > *a));
        for (_, b) in values.iter().step_by(11) {
            assert_eq!(padded.cmp(b), a.cmp(b));
        }
    }

    let mut seen = HashSet::new();
    seen.insert(BigInt::from(7_u32));
    assert!(seen.contains(&BigInt::copy_with_capacity(&BigInt::from(7_u64), 5).unwrap()));
    assert!(!seen.contains(&BigInt::from(-7_i32)));
}

#[test]
fn increment_chain() {
    let mut a = BigInt::from(0xFFFF_FFFF_u64);
    a.increment();
    assert_eq!(a.blocks(), &[0, 1]);

    let mut rng = StdRng::from_seed([5; 32]);
    for (x, mut a) in sample_values(&mut rng) {
        let before = a.post_increment();
        assert_eq!(to_i128(&before), x);
        assert_eq!(to_i128(&a), x + 1);
        if a.is_zero() {
            assert!(!a.sign());
        }
    }

    let mut b = BigInt::from(-3_i32);
    for expected in [-2, -1, 0, 1] {
        b.increment();
        assert_eq!(to_i128(&b), expected);
    }
    assert!(!BigInt::from(-1).try_increment().unwrap().sign());
}

#[test]
fn reserve_and_shrink() {
    let mut a = BigInt::from(-5_i32);
    a.reserve(6).unwrap();
    assert_eq!(a.blocks(), &[5, 0, 0, 0, 0, 0]);
    assert_eq!(a, BigInt::from(-5_i64));

    assert!(matches!(a.reserve(usize::MAX), Err(BigIntError::Alloc(_))));
    assert_eq!(a.capacity(), 6);

    a.shrink_to_fit();
    assert_eq!(a.capacity(), 1);
    assert!(a.is_negative());

    a += BigInt::from(5_u32);
    a.shrink_to_fit();
    assert_eq!(a.capacity(), 0);
    assert!(!a.sign());
}

#[test]
fn fallible_forms_report_invalid_capacity() {
    let a = BigInt::from(i64::MIN);
    let err = BigInt::copy_with_capacity(&a, 2).unwrap_err();
    assert_eq!(err, BigIntError::InvalidCapacity { requested: 2, required: 3 });
    assert!(err.to_string().contains("requested 2"));

    let b = BigInt::from(3_u32);
    assert_eq!(a.try_add(&b).unwrap(), &a + &b);
    assert_eq!(a.try_sub(&b).unwrap(), &a - &b);
}
