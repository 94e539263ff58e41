// Copyright 2019 Stichting Organism
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adaptor points and secrets for a set of oracle attestations
//!
//! https://github.com/discreetlogcontracts/dlcspecs/blob/master/CETCompression.md#adaptor-points-with-multiple-signatures
//!
//! Each oracle `i` announces a public key `P_i` and a nonce point `R_i`, and
//! will later attest to message `m_i` with the BIP340 scalar
//! `s_i = k_i + H(R_i, P_i, m_i) * d_i`. Anyone can compute the point that
//! the sum of those scalars unlocks:
//!
//! ```text
//! s * G = (s_1 + ... + s_m) * G
//!       = (R_1 + ... + R_m) + H(R_1, P_1, m_1) * P_1 + ... + H(R_m, P_m, m_m) * P_m
//! ```
//!
//! [`create_adaptor_point`] computes the right hand side from public data,
//! [`create_adaptor_secret`] computes `s` from the private keys and nonces.

use core::fmt::Debug;
use std::convert::TryInto;

use k256::elliptic_curve::{Group, PrimeField};
use k256::{FieldBytes, ProjectivePoint, Scalar};
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::Zeroize;

use crate::errors::{AdaptorError, Param};
use crate::keys::XOnlyPublicKey;
use crate::tools;
use crate::validate::{
    validate_adaptor_point_inputs, validate_adaptor_secret_inputs, PointContribution,
    SecretContribution,
};

/// The length of an `AdaptorPoint` and of an `AdaptorSecret`, in bytes.
pub const ADAPTOR_LENGTH: usize = 32;

/// x-only encoding of the point unlocked by a set of attestations.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct AdaptorPoint(pub(crate) [u8; ADAPTOR_LENGTH]);

impl Debug for AdaptorPoint {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "AdaptorPoint( {:?} )", &self.0)
    }
}

impl AdaptorPoint {
    pub(crate) const DESCRIPTION: &'static str = "An x-only secp256k1 adaptor point as 32 bytes.";

    /// Convert this point to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; ADAPTOR_LENGTH] {
        self.0
    }

    /// View this point as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADAPTOR_LENGTH] {
        &self.0
    }

    /// Construct an `AdaptorPoint` from a slice of bytes, which must be the
    /// x-coordinate of a curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<AdaptorPoint, AdaptorError> {
        let x: [u8; ADAPTOR_LENGTH] = bytes
            .try_into()
            .map_err(|_| AdaptorError::LengthMismatch {
                param: Param::AdaptorPoint,
                index: None,
                expected: ADAPTOR_LENGTH,
                actual: bytes.len(),
            })?;
        let point = XOnlyPublicKey::from_bytes(&x).ok_or(AdaptorError::CurveLiftFailure {
            param: Param::AdaptorPoint,
            index: None,
        })?;
        Ok(AdaptorPoint(point.to_bytes()))
    }

    fn from_projective(point: ProjectivePoint) -> Result<AdaptorPoint, AdaptorError> {
        if bool::from(point.is_identity()) {
            return Err(AdaptorError::PointAtInfinity);
        }
        Ok(AdaptorPoint(tools::x_bytes(&point.to_affine())))
    }
}

impl AsRef<[u8]> for AdaptorPoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

serde_boilerplate!(AdaptorPoint);

/// A big-endian scalar in `[0, n-1]` whose x-only public point is an
/// [`AdaptorPoint`].
#[derive(Clone)]
pub struct AdaptorSecret(pub(crate) [u8; ADAPTOR_LENGTH]);

impl Debug for AdaptorSecret {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "AdaptorSecret: {:?}", &self.0)
    }
}

impl Eq for AdaptorSecret {}
impl PartialEq for AdaptorSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).unwrap_u8() == 1u8
    }
}
impl ConstantTimeEq for AdaptorSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

/// Overwrite secret material with null bytes when it goes out of scope.
impl Drop for AdaptorSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl AdaptorSecret {
    pub(crate) const DESCRIPTION: &'static str =
        "A secp256k1 adaptor secret as 32 big-endian bytes.";

    pub(crate) fn from_scalar(s: &Scalar) -> AdaptorSecret {
        AdaptorSecret(tools::scalar_to_bytes(s))
    }

    /// Convert this secret to a big-endian byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; ADAPTOR_LENGTH] {
        self.0
    }

    /// View this secret as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADAPTOR_LENGTH] {
        &self.0
    }

    /// Construct an `AdaptorSecret` from a slice of bytes holding a canonical
    /// scalar, i.e. one below the group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<AdaptorSecret, AdaptorError> {
        let array: [u8; ADAPTOR_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| AdaptorError::LengthMismatch {
                    param: Param::Secrets,
                    index: None,
                    expected: ADAPTOR_LENGTH,
                    actual: bytes.len(),
                })?;
        let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(array)).into();
        scalar
            .map(|s| AdaptorSecret::from_scalar(&s))
            .ok_or(AdaptorError::RangeError {
                param: Param::Secrets,
                index: None,
            })
    }

    /// The secret as a scalar mod `n`.
    pub fn to_scalar(&self) -> Scalar {
        tools::scalar_from_bytes_reduced(&self.0)
    }

    /// `x(G * self)`, the adaptor point this secret unlocks.
    ///
    /// Fails with `PointAtInfinity` for the zero secret.
    pub fn to_adaptor_point(&self) -> Result<AdaptorPoint, AdaptorError> {
        AdaptorPoint::from_projective(ProjectivePoint::GENERATOR * self.to_scalar())
    }
}

impl AsRef<[u8]> for AdaptorSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

serde_boilerplate!(AdaptorSecret);

/// Combine `(public key, message, nonce)` triples into one adaptor point.
///
/// All three sequences must be non-empty, of equal length, and hold 32 byte
/// buffers; index `i` across them describes one oracle. The nonces are the
/// x-only `R_i` each oracle committed to.
///
/// # Example
///
/// ```
/// use schnorr_adaptor::*;
///
/// # fn main() -> Result<(), AdaptorError> {
/// let mut d = [0u8; 32];
/// d[31] = 3;
/// let mut k = [0u8; 32];
/// k[31] = 7;
/// let message = [0x2a; 32];
///
/// let pub_key = SecretKey::from_bytes(&d)?.x_only_public_key();
/// let nonce = SecretKey::from_bytes(&k)?.x_only_public_key();
///
/// let point = create_adaptor_point(&[pub_key.to_bytes()], &[message], &[nonce.to_bytes()])?;
/// let secret = create_adaptor_secret(&[d], &[message], &[k])?;
///
/// assert_eq!(secret.to_adaptor_point()?, point);
/// # Ok(())
/// # }
/// ```
pub fn create_adaptor_point<K, M, R>(
    pub_keys: &[K],
    messages: &[M],
    r_values: &[R],
) -> Result<AdaptorPoint, AdaptorError>
where
    K: AsRef<[u8]>,
    M: AsRef<[u8]>,
    R: AsRef<[u8]>,
{
    let contributions = validate_adaptor_point_inputs(pub_keys, messages, r_values)?;
    debug!(participants = contributions.len(), "building adaptor point");
    adaptor_point_from_contributions(&contributions)
}

/// The point side over already validated contributions.
///
/// Per oracle: `R_i + e_i * P_i` with `e_i = H(r_i, P_i.x, m_i)`, where both
/// `P_i` and `R_i` are the even-y lifts of the given x-coordinates.
pub fn adaptor_point_from_contributions(
    contributions: &[PointContribution],
) -> Result<AdaptorPoint, AdaptorError> {
    let mut acc: Option<ProjectivePoint> = None;

    for (i, c) in contributions.iter().enumerate() {
        let pub_key = XOnlyPublicKey::from_bytes(&c.pub_key).ok_or(
            AdaptorError::CurveLiftFailure {
                param: Param::PubKey,
                index: Some(i),
            },
        )?;
        let nonce = XOnlyPublicKey::from_bytes(&c.nonce).ok_or(AdaptorError::CurveLiftFailure {
            param: Param::Nonce,
            index: Some(i),
        })?;

        let e = tools::challenge(&c.nonce, pub_key.as_bytes(), &c.message);
        let term = ProjectivePoint::from(*nonce.as_point())
            + ProjectivePoint::from(*pub_key.as_point()) * e;

        // seeded by the first term, never by the identity
        acc = Some(match acc {
            Some(sum) => sum + term,
            None => term,
        });
    }

    let sum = acc.ok_or(AdaptorError::EmptySequence {
        param: Param::PubKey,
    })?;
    AdaptorPoint::from_projective(sum)
}

/// Combine `(private key, message, nonce scalar)` triples into the secret
/// matching [`create_adaptor_point`].
///
/// `priv_keys` and `k_values` hold 32 byte big-endian scalars in `[1, n-1]`;
/// `k_values[i]` is the nonce whose x-only point is `r_values[i]`. For one
/// oracle the result is exactly its BIP340 signature scalar `s`.
pub fn create_adaptor_secret<P, M, K>(
    priv_keys: &[P],
    messages: &[M],
    k_values: &[K],
) -> Result<AdaptorSecret, AdaptorError>
where
    P: AsRef<[u8]>,
    M: AsRef<[u8]>,
    K: AsRef<[u8]>,
{
    let contributions = validate_adaptor_secret_inputs(priv_keys, messages, k_values)?;
    debug!(participants = contributions.len(), "building adaptor secret");
    adaptor_secret_from_contributions(&contributions)
}

/// The secret side over already validated contributions.
///
/// Per oracle: `k_i + e_i * d_i` with `d_i` and `k_i` moved to the even-y
/// convention and `e_i = H(x(k'_i * G), x(d'_i * G), m_i)`.
pub fn adaptor_secret_from_contributions(
    contributions: &[SecretContribution],
) -> Result<AdaptorSecret, AdaptorError> {
    let mut acc: Option<Scalar> = None;

    for c in contributions {
        let (d, px) = c.private_key.even_y();
        let (k, rx) = c.k_value.even_y();
        let e = tools::challenge(&rx, &px, &c.message);
        let term = k + e * d;

        acc = Some(match acc {
            Some(sum) => sum + term,
            None => term,
        });
    }

    let s = acc.ok_or(AdaptorError::EmptySequence {
        param: Param::PrivateKey,
    })?;
    Ok(AdaptorSecret::from_scalar(&s))
}
