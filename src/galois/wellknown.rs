//! Handy pre-chosen polynomial/generator combinations.
//!
//! Each accessor interns the field on first use and returns the shared
//! handle thereafter. The parameters are known-good, so construction cannot
//! fail.

use super::GF;

fn intern(n: usize, p: u16, g: u8) -> &'static GF {
    GF::new(n, p, g).expect("well-known field parameters are valid")
}

/// GF(4) p=(x^2 + x + 1) g=2
pub fn poly210_g2() -> &'static GF {
    intern(4, 0x7, 2)
}

/// GF(8) p=(x^3 + x + 1) g=2
pub fn poly310_g2() -> &'static GF {
    intern(8, 0xb, 2)
}

/// GF(16) p=(x^4 + x + 1) g=2
pub fn poly410_g2() -> &'static GF {
    intern(16, 0x13, 2)
}

/// GF(32) p=(x^5 + x^2 + 1) g=2
pub fn poly520_g2() -> &'static GF {
    intern(32, 0x25, 2)
}

/// GF(64) p=(x^6 + x + 1) g=2
pub fn poly610_g2() -> &'static GF {
    intern(64, 0x43, 2)
}

/// GF(64) p=(x^6 + x + 1) g=7
pub fn poly610_g7() -> &'static GF {
    intern(64, 0x43, 7)
}

/// GF(128) p=(x^7 + x + 1) g=2
pub fn poly710_g2() -> &'static GF {
    intern(128, 0x83, 2)
}

/// GF(256) p=(x^8 + x^4 + x^3 + x + 1) g=3
pub fn poly84310_g3() -> &'static GF {
    intern(256, 0x11b, 3)
}

/// GF(256) p=(x^8 + x^4 + x^3 + x^2 + 1) g=2
pub fn poly84320_g2() -> &'static GF {
    intern(256, 0x11d, 2)
}

/// An arbitrarily-chosen permutation of GF(4).
pub fn default_gf4() -> &'static GF {
    poly210_g2()
}

/// An arbitrarily-chosen permutation of GF(8).
pub fn default_gf8() -> &'static GF {
    poly310_g2()
}

/// An arbitrarily-chosen permutation of GF(16).
pub fn default_gf16() -> &'static GF {
    poly410_g2()
}

/// An arbitrarily-chosen permutation of GF(32).
pub fn default_gf32() -> &'static GF {
    poly520_g2()
}

/// An arbitrarily-chosen permutation of GF(64).
pub fn default_gf64() -> &'static GF {
    poly610_g2()
}

/// An arbitrarily-chosen permutation of GF(128).
pub fn default_gf128() -> &'static GF {
    poly710_g2()
}

/// An arbitrarily-chosen permutation of GF(256).
pub fn default_gf256() -> &'static GF {
    poly84320_g2()
}

/// The field used by the RAID-6 erasure coder.
pub fn default_field() -> &'static GF {
    default_gf256()
}
