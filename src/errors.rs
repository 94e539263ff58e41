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

//! Errors which may occur when validating adaptor inputs or running the curve math.

use core::fmt;
use thiserror::Error;

/// Names the argument an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Param {
    /// x-only public keys given to the point builder.
    PubKey,
    /// 32 byte message digests.
    Message,
    /// x-only nonce points given to the point builder.
    Nonce,
    /// Private scalars given to the secret builder.
    PrivateKey,
    /// Ephemeral scalars given to the secret builder.
    KValue,
    /// Secrets given to the combiner.
    Secrets,
    /// An encoded adaptor point.
    AdaptorPoint,
}

impl Param {
    /// The name used for this argument in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Param::PubKey => "pubKey",
            Param::Message => "message",
            Param::Nonce => "nonce",
            Param::PrivateKey => "privateKey",
            Param::KValue => "kValue",
            Param::Secrets => "secrets",
            Param::AdaptorPoint => "adaptorPoint",
        }
    }

    /// The name used when the whole sequence is meant.
    pub fn plural(&self) -> &'static str {
        match self {
            Param::PubKey => "pubKeys",
            Param::Message => "messages",
            Param::Nonce => "nonces",
            Param::PrivateKey => "privateKeys",
            Param::KValue => "kValues",
            Param::Secrets => "secrets",
            Param::AdaptorPoint => "adaptorPoints",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `name[idx]`, or just `name` when no index applies.
struct Indexed(Param, Option<usize>);

fn plural(param: &Param) -> &'static str {
    param.plural()
}

fn at(param: &Param, index: &Option<usize>) -> Indexed {
    Indexed(*param, *index)
}

impl fmt::Display for Indexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Some(idx) => write!(f, "{}[{}]", self.0, idx),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Represents an error in adaptor point, adaptor secret or secret combination.
///
/// Every variant is raised before any partial result can be observed.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdaptorError {
    /// A sequence argument was empty.
    #[error("{} must be an array with one or more elements", plural(.param))]
    EmptySequence {
        /// The sequence that was empty
        param: Param,
    },

    /// A byte buffer was not the expected length.
    #[error("{} must be {expected} bytes long", at(.param, .index))]
    LengthMismatch {
        /// The argument holding the buffer
        param: Param,
        /// Position of the buffer within its sequence
        index: Option<usize>,
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A scalar was zero or not below the group order.
    #[error("{} must be an integer in the range 1..n-1", at(.param, .index))]
    RangeError {
        /// The argument holding the scalar
        param: Param,
        /// Position of the scalar within its sequence
        index: Option<usize>,
    },

    /// The parallel sequences had different lengths.
    #[error("all parameters must be an array with the same length")]
    ArityMismatch,

    /// An x-coordinate is not the abscissa of any curve point.
    #[error("{} is not a valid x-coordinate on secp256k1", at(.param, .index))]
    CurveLiftFailure {
        /// The argument holding the coordinate
        param: Param,
        /// Position of the coordinate within its sequence
        index: Option<usize>,
    },

    /// The accumulated point is the identity, which has no x-coordinate.
    #[error("accumulated adaptor point is the point at infinity")]
    PointAtInfinity,
}

/// Convert `AdaptorError` into `::serde::de::Error` aka `SerdeError`
///
/// We should do this with `From` but right now the orphan rules prohibit
/// `impl From<AdaptorError> for E where E: ::serde::de::Error`.
pub(crate) fn serde_error_from_adaptor_error<E>(err: AdaptorError) -> E
where
    E: ::serde::de::Error,
{
    E::custom(err)
}
