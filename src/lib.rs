//! Erasure coding over binary extension finite fields
//!
//! Four layers, leaves first:
//!
//! - [`galois`] — `GF(2^k)` fields for `k` in 1..=8, with precomputed
//!   exp/log tables, process-wide interning, and O(1) arithmetic on byte
//!   elements.
//! - [`polynomial`] — immutable polynomials whose coefficients are drawn
//!   from such a field.
//! - [`matrix`] — dense byte matrices with sub-matrix extraction,
//!   augmentation, and field-parameterised multiplication and Gauss-Jordan
//!   inversion.
//! - [`raid6`] — a two-parity shard encoder/decoder built on the layers
//!   below: split a byte buffer into `D` data shards, encode two parity
//!   shards, and recover the original data when up to two shards are lost.
//!
//! ```
//! use galoisrs::raid6::{Encoder, Raid6};
//!
//! let coder = Raid6::new(4, 2)?;
//! let mut shards = coder.split(b"some payload worth protecting")?;
//! coder.encode(&mut shards)?;
//!
//! // Lose any two shards...
//! shards[1] = Vec::new();
//! shards[5] = Vec::new();
//!
//! // ...and get them back.
//! coder.reconstruct(&mut shards)?;
//! let mut restored = Vec::new();
//! coder.join(&mut restored, &shards, 29)?;
//! assert_eq!(restored, b"some payload worth protecting");
//! # Ok::<(), galoisrs::raid6::ErasureError>(())
//! ```
//!
//! This crate has NOT been hardened against timing attacks and MUST NOT be
//! used in cryptography.

pub mod galois;
pub mod matrix;
pub mod polynomial;
pub mod raid6;

pub use galois::{FieldError, GF};
pub use matrix::{Matrix, MatrixError};
pub use polynomial::{Polynomial, PolynomialError};
pub use raid6::{Encoder, ErasureError, Raid6};
