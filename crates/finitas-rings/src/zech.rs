//! The extension field GF(p^k) via Zech logarithm tables.
//!
//! Every non-zero element is a power `g^i` of a fixed generator of the
//! multiplicative group, and is stored as the exponent `i` alone.
//! Multiplication and inversion are exponent arithmetic mod q−1;
//! addition goes through the Zech logarithm table
//! `zech[i] = log_g(1 + g^i)`. Zero is the sentinel exponent `q−1`.
//!
//! Table construction is a one-time cost at field creation: find a monic
//! irreducible polynomial of degree k over Z_p (Rabin's test), find a
//! generator (order check against the prime factors of q−1), then walk
//! the powers of the generator.

use std::fmt;
use std::sync::Arc;

use finitas_integers::{Integer, Modulus};

use crate::traits::{FieldCtx, FiniteFieldCtx, RingCtx};

/// Largest supported field order. The three tables are O(q) words each.
pub const ZECH_TABLE_LIMIT: u64 = 1 << 20;

/// An element of a [`ZechField`]: the discrete logarithm of the element,
/// or `q−1` for zero.
///
/// Elements are meaningful only relative to the field that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ZechElem(u64);

struct Tables {
    p: u64,
    k: u32,
    q: u64,
    /// Monic defining polynomial of degree k, ascending coefficients.
    modpoly: Vec<u64>,
    /// Base-p code of g^i, for i in 0..q−1.
    exp: Vec<u64>,
    /// Exponent of the element with a given base-p code; entry 0 unused.
    log: Vec<u64>,
    /// `zech[i]` = exponent of 1 + g^i, or q−1 when 1 + g^i = 0.
    zech: Vec<u64>,
}

/// The finite field GF(p^k), q = p^k, as shared Zech logarithm tables.
///
/// Cloning the handle is cheap; all clones share one table set.
#[derive(Clone)]
pub struct ZechField {
    tables: Arc<Tables>,
}

impl ZechField {
    /// Builds the field GF(p^k).
    ///
    /// # Panics
    ///
    /// Panics if `p` is not prime, `k` is zero, or `p^k` exceeds
    /// [`ZECH_TABLE_LIMIT`].
    #[must_use]
    pub fn new(p: u64, k: u32) -> Self {
        assert!(k > 0, "extension degree must be positive");
        let q = p
            .checked_pow(k)
            .filter(|&q| q <= ZECH_TABLE_LIMIT)
            .expect("field order exceeds the Zech table limit");
        assert!(is_prime(p), "characteristic must be prime");

        let m = Modulus::new(p);
        let modpoly = find_irreducible(p, k, m);
        let gen = find_generator(q, &modpoly, m);

        let kk = k as usize;
        let mut exp = vec![0u64; (q - 1) as usize];
        let mut log = vec![0u64; q as usize];
        let mut cur = vec![0u64; kk];
        cur[0] = 1;
        for (i, e) in exp.iter_mut().enumerate() {
            let code = encode(&cur, p);
            *e = code;
            log[code as usize] = i as u64;
            cur = pmul_mod(&cur, &gen, &modpoly, m);
        }
        debug_assert_eq!(encode(&cur, p), 1, "generator order is not q - 1");

        let mut zech = vec![0u64; (q - 1) as usize];
        for (i, z) in zech.iter_mut().enumerate() {
            let code = exp[i];
            let c0 = code % p;
            let bumped = code - c0 + (c0 + 1) % p;
            *z = if bumped == 0 {
                q - 1
            } else {
                log[bumped as usize]
            };
        }

        Self {
            tables: Arc::new(Tables {
                p,
                k,
                q,
                modpoly,
                exp,
                log,
                zech,
            }),
        }
    }

    /// The field order q = p^k as a word.
    #[must_use]
    pub fn order_u64(&self) -> u64 {
        self.tables.q
    }

    /// The extension degree k.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.tables.k
    }

    /// A generator of the multiplicative group.
    #[must_use]
    pub fn generator(&self) -> ZechElem {
        ZechElem(1 % (self.tables.q - 1))
    }

    /// The element with the given base-p vector code
    /// (code = Σ cᵢ pⁱ over the coordinates cᵢ of the element).
    ///
    /// # Panics
    ///
    /// Panics if `code >= q`.
    #[must_use]
    pub fn from_code(&self, code: u64) -> ZechElem {
        assert!(code < self.tables.q, "element code out of range");
        if code == 0 {
            self.zero()
        } else {
            ZechElem(self.tables.log[code as usize])
        }
    }

    /// The base-p vector code of an element. Inverse of [`Self::from_code`].
    #[must_use]
    pub fn to_code(&self, a: ZechElem) -> u64 {
        if self.is_zero(a) {
            0
        } else {
            self.tables.exp[a.0 as usize]
        }
    }

    /// The monic defining polynomial, ascending coefficients.
    #[must_use]
    pub fn modulus_poly(&self) -> &[u64] {
        &self.tables.modpoly
    }
}

impl PartialEq for ZechField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
            || (self.tables.p == other.tables.p
                && self.tables.k == other.tables.k
                && self.tables.modpoly == other.tables.modpoly)
    }
}

impl fmt::Debug for ZechField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.tables.p, self.tables.k)
    }
}

impl RingCtx for ZechField {
    type Elem = ZechElem;

    fn zero(&self) -> ZechElem {
        ZechElem(self.tables.q - 1)
    }

    fn one(&self) -> ZechElem {
        ZechElem(0)
    }

    fn is_zero(&self, a: ZechElem) -> bool {
        a.0 == self.tables.q - 1
    }

    fn add(&self, a: ZechElem, b: ZechElem) -> ZechElem {
        if self.is_zero(a) {
            return b;
        }
        if self.is_zero(b) {
            return a;
        }
        let g = self.tables.q - 1;
        // g^a + g^b = g^b (1 + g^(a-b))
        let diff = (a.0 + g - b.0) % g;
        let z = self.tables.zech[diff as usize];
        if z == g {
            self.zero()
        } else {
            ZechElem((b.0 + z) % g)
        }
    }

    fn sub(&self, a: ZechElem, b: ZechElem) -> ZechElem {
        self.add(a, self.neg(b))
    }

    fn mul(&self, a: ZechElem, b: ZechElem) -> ZechElem {
        if self.is_zero(a) || self.is_zero(b) {
            return self.zero();
        }
        ZechElem((a.0 + b.0) % (self.tables.q - 1))
    }

    fn neg(&self, a: ZechElem) -> ZechElem {
        if self.tables.p == 2 || self.is_zero(a) {
            return a;
        }
        // -1 = g^((q-1)/2)
        let g = self.tables.q - 1;
        ZechElem((a.0 + g / 2) % g)
    }

    fn from_u64(&self, n: u64) -> ZechElem {
        self.from_code(n % self.tables.p)
    }
}

impl FieldCtx for ZechField {
    fn inv(&self, a: ZechElem) -> Option<ZechElem> {
        if self.is_zero(a) {
            return None;
        }
        let g = self.tables.q - 1;
        Some(ZechElem((g - a.0) % g))
    }
}

impl FiniteFieldCtx for ZechField {
    fn characteristic(&self) -> u64 {
        self.tables.p
    }

    fn order(&self) -> Integer {
        Integer::from(self.tables.p).pow(self.tables.k as usize)
    }

    fn frobenius(&self, a: ZechElem) -> ZechElem {
        if self.is_zero(a) {
            return a;
        }
        let g = u128::from(self.tables.q - 1);
        ZechElem((u128::from(a.0) * u128::from(self.tables.p) % g) as u64)
    }
}

// ---------------------------------------------------------------------------
// Construction helpers: dense polynomial arithmetic over Z_p, used only
// while building the tables.

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Distinct prime factors by trial division.
fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn encode(v: &[u64], p: u64) -> u64 {
    let mut code = 0;
    for &c in v.iter().rev() {
        code = code * p + c;
    }
    code
}

fn decode(mut code: u64, p: u64, k: usize) -> Vec<u64> {
    let mut v = vec![0u64; k];
    for c in &mut v {
        *c = code % p;
        code /= p;
    }
    v
}

fn trim(v: &mut Vec<u64>) {
    while v.last() == Some(&0) {
        v.pop();
    }
}

/// Product of two length-k vectors, reduced by the monic `modpoly` of
/// degree k. Result has length k.
fn pmul_mod(a: &[u64], b: &[u64], modpoly: &[u64], m: Modulus) -> Vec<u64> {
    let k = modpoly.len() - 1;
    let mut full = vec![0u64; 2 * k.max(1)];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            full[i + j] = m.add(full[i + j], m.mul(ai, bj));
        }
    }
    // x^k = -(modpoly mod x^k)
    for i in (k..full.len()).rev() {
        let c = full[i];
        if c == 0 {
            continue;
        }
        full[i] = 0;
        for (j, &fj) in modpoly.iter().take(k).enumerate() {
            full[i - k + j] = m.sub(full[i - k + j], m.mul(c, fj));
        }
    }
    full.truncate(k);
    full
}

fn ppow_mod(a: &[u64], mut exp: u64, modpoly: &[u64], m: Modulus) -> Vec<u64> {
    let k = modpoly.len() - 1;
    let mut base = a.to_vec();
    base.resize(k, 0);
    let mut result = vec![0u64; k];
    result[0] = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = pmul_mod(&result, &base, modpoly, m);
        }
        base = pmul_mod(&base, &base, modpoly, m);
        exp >>= 1;
    }
    result
}

/// Remainder of `a` by a non-zero trimmed `b`, both ascending.
fn prem(a: &[u64], b: &[u64], m: Modulus) -> Vec<u64> {
    let mut r = a.to_vec();
    trim(&mut r);
    let lead_inv = m
        .inv(*b.last().expect("division by zero polynomial"))
        .expect("division by non-invertible element");
    while r.len() >= b.len() {
        let shift = r.len() - b.len();
        let c = m.mul(*r.last().expect("non-empty remainder"), lead_inv);
        for (j, &bj) in b.iter().enumerate() {
            r[shift + j] = m.sub(r[shift + j], m.mul(c, bj));
        }
        trim(&mut r);
    }
    r
}

fn pgcd(a: &[u64], b: &[u64], m: Modulus) -> Vec<u64> {
    let mut x = a.to_vec();
    let mut y = b.to_vec();
    trim(&mut x);
    trim(&mut y);
    while !y.is_empty() {
        let r = prem(&x, &y, m);
        x = y;
        y = r;
    }
    x
}

/// x^(p^j) reduced by `modpoly`.
fn frobenius_power(j: u32, modpoly: &[u64], m: Modulus) -> Vec<u64> {
    let mut h = prem(&[0, 1], modpoly, m);
    h.resize(modpoly.len() - 1, 0);
    for _ in 0..j {
        h = ppow_mod(&h, m.modulus(), modpoly, m);
    }
    h
}

/// Rabin's irreducibility test for a monic polynomial of degree k.
fn is_irreducible(f: &[u64], m: Modulus) -> bool {
    let k = (f.len() - 1) as u32;
    let mut x = prem(&[0, 1], f, m);
    x.resize(f.len() - 1, 0);

    // x^(p^k) must equal x mod f
    let xqk = frobenius_power(k, f, m);
    if xqk != x {
        return false;
    }

    // gcd(x^(p^(k/r)) - x, f) must be trivial for every prime r | k
    for r in prime_factors(u64::from(k)) {
        let h = frobenius_power(k / r as u32, f, m);
        let mut diff: Vec<u64> = h
            .iter()
            .zip(&x)
            .map(|(&hi, &xi)| m.sub(hi, xi))
            .collect();
        trim(&mut diff);
        let g = pgcd(f, &diff, m);
        if g.len() > 1 {
            return false;
        }
    }
    true
}

/// First monic irreducible polynomial of degree k in code order.
fn find_irreducible(p: u64, k: u32, m: Modulus) -> Vec<u64> {
    let kk = k as usize;
    let count = p.pow(k);
    for code in 0..count {
        let mut f = decode(code, p, kk);
        f.push(1);
        if is_irreducible(&f, m) {
            return f;
        }
    }
    unreachable!("an irreducible polynomial of every degree exists")
}

/// A generator of the multiplicative group of GF(q).
fn find_generator(q: u64, modpoly: &[u64], m: Modulus) -> Vec<u64> {
    let k = modpoly.len() - 1;
    if q == 2 {
        return vec![1];
    }
    let factors = prime_factors(q - 1);
    let mut one = vec![0u64; k];
    one[0] = 1;
    for code in 2..q {
        let cand = decode(code, m.modulus(), k);
        let is_gen = factors
            .iter()
            .all(|&r| ppow_mod(&cand, (q - 1) / r, modpoly, m) != one);
        if is_gen {
            return cand;
        }
    }
    unreachable!("the multiplicative group of a finite field is cyclic")
}
