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

//! Summing independently produced adaptor secrets

use k256::Scalar;
use tracing::debug;

use crate::adaptor::AdaptorSecret;
use crate::errors::AdaptorError;
use crate::tools;
use crate::validate::validate_secrets;

/// Sum 32 byte big-endian secrets modulo the group order.
///
/// Inputs may be attestation scalars published by oracles or results of
/// earlier calls, so combining is associative and commutative. Each input
/// is reduced mod `n` first, hence a single secret comes back reduced.
pub fn combine_secrets<S: AsRef<[u8]>>(secrets: &[S]) -> Result<AdaptorSecret, AdaptorError> {
    let secrets = validate_secrets(secrets)?;
    debug!(secrets = secrets.len(), "combining adaptor secrets");

    let sum = secrets
        .iter()
        .map(tools::scalar_from_bytes_reduced)
        .fold(Scalar::ZERO, |acc, s| acc + s);
    Ok(AdaptorSecret::from_scalar(&sum))
}
