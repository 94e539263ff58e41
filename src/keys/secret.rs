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

//! Range checked secp256k1 secret scalars

use core::fmt::Debug;
use std::convert::TryInto;

use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, FieldBytes, ProjectivePoint, Scalar};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::errors::{AdaptorError, Param};
use crate::keys::XOnlyPublicKey;
use crate::tools;

/// The length of a secp256k1 `SecretKey`, in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// A secp256k1 secret scalar, either a private key `d` or a nonce `k`.
///
/// Always satisfies `1 <= value <= n - 1`.
#[derive(Clone)]
pub struct SecretKey(pub(crate) Scalar);

impl Debug for SecretKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "SecretKey: {:?}", &self.0)
    }
}

impl Eq for SecretKey {}
impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).unwrap_u8() == 1u8
    }
}
impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// Overwrite secret key material with null bytes when it goes out of scope.
impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl SecretKey {
    pub(crate) const DESCRIPTION: &'static str =
        "A secp256k1 secret scalar as 32 big-endian bytes.";

    /// Convert this secret key to a big-endian byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        tools::scalar_to_bytes(&self.0)
    }

    /// Construct a `SecretKey` from 32 big-endian bytes.
    ///
    /// Returns `None` when the integer is zero or not below the group order.
    pub fn from_array(bytes: &[u8; SECRET_KEY_LENGTH]) -> Option<SecretKey> {
        let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(*bytes)).into();
        scalar.and_then(SecretKey::from_scalar)
    }

    /// Construct a `SecretKey` from a slice of bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr_adaptor::*;
    ///
    /// # fn doctest() -> Result<SecretKey, AdaptorError> {
    /// let mut secret_key_bytes = [0u8; SECRET_KEY_LENGTH];
    /// secret_key_bytes[31] = 3;
    ///
    /// let secret_key: SecretKey = SecretKey::from_bytes(&secret_key_bytes)?;
    /// #
    /// # Ok(secret_key)
    /// # }
    /// #
    /// # fn main() {
    /// #     assert!(doctest().is_ok());
    /// # }
    /// ```
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `SecretKey` or whose error value is a
    /// `LengthMismatch` or `RangeError` naming `privateKey`.
    pub fn from_bytes(bytes: &[u8]) -> Result<SecretKey, AdaptorError> {
        let array: [u8; SECRET_KEY_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| AdaptorError::LengthMismatch {
                    param: Param::PrivateKey,
                    index: None,
                    expected: SECRET_KEY_LENGTH,
                    actual: bytes.len(),
                })?;

        SecretKey::from_array(&array).ok_or(AdaptorError::RangeError {
            param: Param::PrivateKey,
            index: None,
        })
    }

    /// Helper Method to Convert Scalar to Key, rejecting zero.
    pub fn from_scalar(s: Scalar) -> Option<SecretKey> {
        if bool::from(s.is_zero()) {
            None
        } else {
            Some(SecretKey(s))
        }
    }

    /// View this key as a scalar.
    #[inline]
    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }

    /// `G * self`, with whatever y parity it happens to have.
    pub fn public_point(&self) -> AffinePoint {
        (ProjectivePoint::GENERATOR * self.0).to_affine()
    }

    /// The x-only public key of this scalar.
    pub fn x_only_public_key(&self) -> XOnlyPublicKey {
        XOnlyPublicKey::from_secret(self)
    }

    /// The scalar paired with the even-y form of `G * self`, together with
    /// the x-only encoding of that point.
    pub fn even_y(&self) -> (Scalar, [u8; 32]) {
        let point = self.public_point();
        (
            tools::even_y_scalar(&point, &self.0),
            tools::x_bytes(&point),
        )
    }
}

serde_boilerplate!(SecretKey);
