//! Verifiably-sequential chain primitives over edwards25519.
//!
//! This library models sequential progress ("ticks") as deterministic chains
//! of hashes, curve points, and scalars, and lets any scalar along a chain act
//! as a one-time signing key attesting to its position:
//!
//! - A hash chain iterates SHA-256 over bytes.
//! - A point chain and a scalar chain advance a curve point and its discrete
//!   logarithm in lockstep, so holders of the scalar and holders of only the
//!   point compute the same sequence of public values.
//! - A hybrid chain carries a digest and a point together, multiplying the
//!   current point itself at each step.
//! - A generalized deterministic Schnorr signer accepts any valid scalar as a
//!   signing key and produces a 64-byte `(R, s)` signature verifiable against
//!   the matching public point.
//!
//! Every operation is a pure function of small owned values; there is no
//! hidden state, no I/O, and no randomness. "Clock" refers to the verifiable
//! step counter, never to wall-clock time.
//!
//! # Example
//!
//! ```
//! use tickchain::{advance_point, advance_scalar, derive_key_from_seed,
//!     derive_point_from_scalar, sign};
//!
//! let scalar = derive_key_from_seed(b"chain seed");
//! let point = derive_point_from_scalar(&scalar);
//!
//! // Advance both sides of the chain five ticks; they stay in lockstep.
//! let scalar5 = advance_scalar(&scalar, 5);
//! let point5 = advance_point(&point, 5);
//! assert_eq!(derive_point_from_scalar(&scalar5), point5);
//!
//! // The fifth scalar attests to the fifth point.
//! let sig = sign(&scalar5, b"tick 5", None);
//! assert!(sig.verify(&point5, b"tick 5"));
//! ```

mod chain;
mod constants;
mod errors;
mod hashing;
mod keys;
mod signatures;


pub use chain::{
    advance_hash, advance_hybrid, advance_point, advance_scalar, step_hash, step_hybrid,
    step_point, step_scalar,
};
pub use constants::{POINT_LENGTH, SCALAR_LENGTH, SIGNATURE_LENGTH};
pub use errors::TickError;
pub use hashing::{hash256, hash512, hash_to_scalar};
pub use keys::{clamp, derive_key_from_seed, derive_point_from_scalar, ScalarSource};
pub use signatures::{sign, Signature};
