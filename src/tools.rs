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

//! The Extra Sauce
//!
//! BIP340 tooling shared by the point and secret builders: the tagged hash,
//! the Fiat-Shamir challenge, x-only lifting and the even-y convention.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::point::{AffineCoordinates, DecompressPoint};
use k256::{AffinePoint, FieldBytes, Scalar, U256};
use sha2::{Digest, Sha256};
use subtle::ConditionallySelectable;

/// Domain separation tag of the BIP340 challenge hash.
pub const CHALLENGE_TAG: &str = "BIP0340/challenge";

/// Length of every x-only coordinate, message and scalar encoding.
pub const COORDINATE_LENGTH: usize = 32;

/// BIP340 tagged hash: `SHA256(SHA256(tag) || SHA256(tag) || data)`.
pub fn tagged_hash(tag: &str, data: &[u8]) -> [u8; 32] {
    let tag_hash = Sha256::digest(tag.as_bytes());
    let mut hasher = Sha256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    hasher.update(data);
    hasher.finalize().into()
}

/// Challenge `e = H_challenge(r || P.x || m) mod n`.
pub fn challenge(r_x: &[u8; 32], pk_x: &[u8; 32], msg: &[u8; 32]) -> Scalar {
    let mut data = [0u8; 96];
    data[..32].copy_from_slice(r_x);
    data[32..64].copy_from_slice(pk_x);
    data[64..].copy_from_slice(msg);

    scalar_from_bytes_reduced(&tagged_hash(CHALLENGE_TAG, &data))
}

/// Lift a 32-byte x-coordinate to the curve point with even y,
/// per BIP340 key lifting rules. `None` when `x >= p` or `x^3 + 7`
/// has no square root.
pub fn lift_x(x_bytes: &[u8; 32]) -> Option<AffinePoint> {
    let fb = FieldBytes::from(*x_bytes);
    Option::from(AffinePoint::decompress(&fb, 0u8.into()))
}

/// Scalar to use with `point` under the even-y convention: `scalar` itself
/// when `point` (which must equal `scalar * G`) has even y, `n - scalar` otherwise.
pub fn even_y_scalar(point: &AffinePoint, scalar: &Scalar) -> Scalar {
    Scalar::conditional_select(scalar, &-*scalar, point.y_is_odd())
}

/// Big-endian x-coordinate of an affine point.
pub fn x_bytes(point: &AffinePoint) -> [u8; 32] {
    point.x().into()
}

/// Interpret 32 big-endian bytes as an integer and reduce it mod `n`.
pub fn scalar_from_bytes_reduced(bytes: &[u8; 32]) -> Scalar {
    <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*bytes))
}

/// Big-endian 32 byte encoding of a scalar.
pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; 32] {
    scalar.to_bytes().into()
}
