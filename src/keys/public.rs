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

//! x-only public keys and nonce points

use crate::keys::SecretKey;
use crate::tools;
use k256::{AffinePoint, ProjectivePoint};
use std::fmt::Debug;

/// The length of an x-only public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// An x-only point: the 32 byte x-coordinate together with the even-y curve
/// point it lifts to, so the builders never lift the same bytes twice.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct XOnlyPublicKey {
    point: AffinePoint,
    x: [u8; PUBLIC_KEY_LENGTH],
}

impl Debug for XOnlyPublicKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "XOnlyPublicKey( {:?} )", self.x)
    }
}

impl XOnlyPublicKey {
    /// Lift an x-coordinate, `None` if it is not on the curve.
    pub fn from_bytes(x: &[u8; PUBLIC_KEY_LENGTH]) -> Option<XOnlyPublicKey> {
        tools::lift_x(x).map(|point| XOnlyPublicKey {
            point,
            x: tools::x_bytes(&point),
        })
    }

    /// Derive this public key from its corresponding `SecretKey`.
    pub fn from_secret(secret_key: &SecretKey) -> XOnlyPublicKey {
        let (even, x) = secret_key.even_y();
        let point = (ProjectivePoint::GENERATOR * even).to_affine();
        XOnlyPublicKey { point, x }
    }

    /// Access the even-y point form
    pub fn as_point(&self) -> &AffinePoint {
        &self.point
    }

    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.x
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.x
    }
}

impl From<&SecretKey> for XOnlyPublicKey {
    fn from(source: &SecretKey) -> XOnlyPublicKey {
        XOnlyPublicKey::from_secret(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_and_lifted_forms_agree() {
        let mut bytes = [0u8; 32];
        bytes[31] = 3;
        let sk = SecretKey::from_array(&bytes).unwrap();
        let pk = XOnlyPublicKey::from_secret(&sk);

        assert_eq!(
            hex::encode(pk.as_bytes()),
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"
        );
        assert_eq!(XOnlyPublicKey::from_bytes(pk.as_bytes()), Some(pk));
    }

    #[test]
    fn rejects_coordinates_off_the_curve() {
        assert!(XOnlyPublicKey::from_bytes(&[0xff; 32]).is_none());
    }
}
