//! Galois field `GF(2^k)` arithmetic for erasure coding
//!
//! A field is described by its order `n = 2^k` (k in 1..=8), a reducing
//! polynomial `p` that is irreducible over GF(2) and of degree exactly `k`,
//! and a generator `g` of the multiplicative group. Construction precomputes
//! `g^x` and `log_g(x)` tables so that every arithmetic operation is a table
//! lookup.
//!
//! Fields are interned: two [`GF::new`] calls with identical parameters
//! return the same `&'static` handle, so handle identity doubles as field
//! identity. The tables are immutable after publication and safe to share
//! across threads without coordination.
//!
//! The `p` argument encodes the polynomial
//!
//! ```text
//! x^k + sum_i: p_i * x^i; i in 0..k
//! ```
//!
//! where coefficient `p_i` is `(p >> i) & 1`. The k-th bit MUST be 1 and all
//! higher bits MUST be 0, so `n <= p < 2n`.
//!
//! The `g` argument determines the permutation of field elements: the
//! sequence `g^0, g^1, ..., g^(n-2)` must enumerate every nonzero element
//! exactly once. The field is small enough that trial and error is the
//! easiest way to discover generators.
//!
//! This implementation has NOT been hardened against timing attacks, so it
//! MUST NOT be used in cryptography.

mod error;
pub mod wellknown;

pub use error::FieldError;

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// The identity of a field: its order exponent, polynomial, and generator.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Params {
    k: u8,
    p: u16,
    g: u8,
}

/// A particular permutation of `GF(2^k)` for some fixed `k`.
pub struct GF {
    params: Params,
    m: usize,
    log: Vec<u8>,
    exp: Vec<u8>,
}

/// Process-wide interning registry, keyed by `(k, p, g)`.
fn registry() -> &'static Mutex<FxHashMap<Params, &'static GF>> {
    static REGISTRY: OnceLock<Mutex<FxHashMap<Params, &'static GF>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(FxHashMap::default()))
}

impl GF {
    /// Construct (or fetch the interned copy of) `GF(n)` with reducing
    /// polynomial `p` and generator `g`.
    ///
    /// Fails with [`FieldError::FieldSize`] if `n` is not a supported power
    /// of two, [`FieldError::PolyOutOfRange`] if `p` is of the wrong degree,
    /// [`FieldError::ReduciblePoly`] if `p` has a nontrivial divisor, and
    /// [`FieldError::NotGenerator`] if the powers of `g` do not enumerate
    /// the whole multiplicative group.
    pub fn new(n: usize, p: u16, g: u8) -> Result<&'static GF, FieldError> {
        let k: u8 = match n {
            2 => 1,
            4 => 2,
            8 => 3,
            16 => 4,
            32 => 5,
            64 => 6,
            128 => 7,
            256 => 8,
            _ => return Err(FieldError::FieldSize),
        };
        if (p as usize) < n || (p as usize) >= 2 * n {
            return Err(FieldError::PolyOutOfRange);
        }
        if g == 0 || g == 1 {
            return Err(FieldError::NotGenerator);
        }
        if is_reducible(p as u32) {
            return Err(FieldError::ReduciblePoly);
        }
        let params = Params { k, p, g };

        if let Some(&existing) = registry().lock().expect("field registry poisoned").get(&params) {
            return Ok(existing);
        }

        // Use the generator to fill the exp/log tables, doubling the exp
        // table so Mul can index log[x]+log[y] without a modulo.
        let m = n - 1;
        let mut exp = vec![0u8; 2 * m];
        let mut log = vec![0u8; n];
        let mut x: u8 = 1;
        for i in 0..m {
            if x == 1 && i != 0 {
                // The orbit of g closed before covering the whole group.
                return Err(FieldError::NotGenerator);
            }
            exp[i] = x;
            exp[i + m] = x;
            log[x as usize] = i as u8;
            x = mul_slow(x, g, p, k);
        }

        let gf = GF { params, m, log, exp };

        // Two racing constructors may both have built tables; the first to
        // insert wins and the loser's tables are dropped here.
        let mut map = registry().lock().expect("field registry poisoned");
        if let Some(&winner) = map.get(&params) {
            return Ok(winner);
        }
        let handle: &'static GF = Box::leak(Box::new(gf));
        map.insert(params, handle);
        Ok(handle)
    }

    /// The order of the field, i.e. the number of elements.
    pub fn size(&self) -> usize {
        1 << self.params.k
    }

    /// The reducing polynomial used to generate the field.
    pub fn polynomial(&self) -> u16 {
        self.params.p
    }

    /// The exponent base used to generate the field.
    pub fn generator(&self) -> u8 {
        self.params.g
    }

    /// Returns `x + y == x - y == x XOR y` in `GF(2^k)`.
    pub fn add(&self, x: u8, y: u8) -> u8 {
        x ^ y
    }

    /// Returns `x * y` in `GF(2^k)`.
    pub fn mul(&self, x: u8, y: u8) -> u8 {
        if x == 0 || y == 0 {
            return 0;
        }
        self.exp[self.log[x as usize] as usize + self.log[y as usize] as usize]
    }

    /// Returns `x / y` in `GF(2^k)`.
    pub fn div(&self, x: u8, y: u8) -> Result<u8, FieldError> {
        if y == 0 {
            return Err(FieldError::DivByZero);
        }
        if x == 0 {
            return Ok(0);
        }
        Ok(self.exp[self.m + self.log[x as usize] as usize - self.log[y as usize] as usize])
    }

    /// Returns `1 / x` in `GF(2^k)`.
    pub fn inv(&self, x: u8) -> Result<u8, FieldError> {
        if x == 0 {
            return Err(FieldError::DivByZero);
        }
        Ok(self.exp[self.m - self.log[x as usize] as usize])
    }

    /// Returns `g^x` in `GF(2^k)`.
    pub fn exp(&self, x: u8) -> u8 {
        self.exp[x as usize % self.m]
    }

    /// Returns `log_g(x)` in `GF(2^k)`.
    pub fn log(&self, x: u8) -> Result<u8, FieldError> {
        if x == 0 {
            return Err(FieldError::LogZero);
        }
        Ok(self.log[x as usize])
    }

    /// Returns `a^e` by repeated multiplication.
    ///
    /// Precondition: `e >= 1`. For `e <= 1` the result is `a` itself; the
    /// convention `a^0 = 1` is NOT implemented.
    pub fn pow(&self, a: u8, e: usize) -> u8 {
        let mut res = a;
        for _ in 1..e {
            res = self.mul(res, a);
        }
        res
    }

    /// Total order over fields: lexicographic on `(k, p, g)`.
    pub fn compare(&self, other: &GF) -> Ordering {
        self.params.cmp(&other.params)
    }
}

impl PartialEq for GF {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for GF {}

impl PartialOrd for GF {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for GF {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for GF {
    /// Human-readable form, e.g. `GF(256;b^8+b^4+b^3+b^2+1;2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut monomials = Vec::new();
        for i in (0..=8u32).rev() {
            if self.params.p & (1 << i) != 0 {
                monomials.push(match i {
                    0 => "1".to_owned(),
                    1 => "b".to_owned(),
                    _ => format!("b^{i}"),
                });
            }
        }
        write!(f, "GF({};{};{})", self.size(), monomials.join("+"), self.params.g)
    }
}

impl fmt::Debug for GF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF::new({}, {:#x}, {})",
            self.size(),
            self.params.p,
            self.params.g
        )
    }
}

/// Schoolbook `x * y mod poly`: shift-and-xor, reducing by `poly` whenever
/// the high bit of the accumulator spills out of the field.
fn mul_slow(x: u8, y: u8, poly: u16, k: u8) -> u8 {
    let hibit = 1u16 << (k - 1);
    let mut x = x as u16;
    let mut y = y as u16;
    let mut product = 0u16;
    for _ in 0..k {
        if y & 1 != 0 {
            product ^= x;
        }
        let spills = x & hibit != 0;
        x <<= 1;
        y >>= 1;
        if spills {
            x ^= poly;
        }
    }
    product as u8
}

/// Returns true iff a smaller polynomial evenly divides `p`.
fn is_reducible(p: u32) -> bool {
    let limit = 1u32 << (degree(p) / 2 + 1);
    (2..limit).any(|divisor| poly_div(p, divisor) == 0)
}

/// Divides two polynomials over GF(2) and returns the remainder.
fn poly_div(mut dividend: u32, divisor: u32) -> u32 {
    let n = degree(divisor);
    let mut m = degree(dividend);
    while m >= n {
        if dividend & (1 << (m - 1)) != 0 {
            dividend ^= divisor << (m - n);
        }
        m -= 1;
    }
    dividend
}

/// The degree of a polynomial in this representation: 0 for `p == 0`, else
/// `k + 1` where `1 << k` is the highest set bit.
fn degree(mut p: u32) -> u32 {
    let mut d = 0;
    while p > 0 {
        d += 1;
        p >>= 1;
    }
    d
}
