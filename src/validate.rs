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

//! Input validation for the adaptor builders.
//!
//! Each sequence is checked completely (emptiness, then every element in
//! order) before the next sequence is looked at, and the sequences are only
//! compared for length once all of them are individually well formed. The
//! first failure is returned and no curve arithmetic happens.

use std::convert::TryInto;

use tracing::debug;

use crate::errors::{AdaptorError, Param};
use crate::keys::SecretKey;
use crate::tools::COORDINATE_LENGTH;

/// One participant's contribution to an adaptor point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PointContribution {
    /// x-only public key `P`
    pub pub_key: [u8; 32],
    /// 32 byte message digest
    pub message: [u8; 32],
    /// x-only nonce point `R`
    pub nonce: [u8; 32],
}

/// One participant's contribution to an adaptor secret.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretContribution {
    /// private key `d'`
    pub private_key: SecretKey,
    /// 32 byte message digest
    pub message: [u8; 32],
    /// ephemeral scalar `k'`
    pub k_value: SecretKey,
}

fn check_non_empty<B>(param: Param, items: &[B]) -> Result<(), AdaptorError> {
    if items.is_empty() {
        return Err(AdaptorError::EmptySequence { param });
    }
    Ok(())
}

fn check_buffer(param: Param, index: usize, bytes: &[u8]) -> Result<[u8; 32], AdaptorError> {
    bytes.try_into().map_err(|_| AdaptorError::LengthMismatch {
        param,
        index: Some(index),
        expected: COORDINATE_LENGTH,
        actual: bytes.len(),
    })
}

fn check_buffers<B: AsRef<[u8]>>(param: Param, items: &[B]) -> Result<Vec<[u8; 32]>, AdaptorError> {
    check_non_empty(param, items)?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| check_buffer(param, i, item.as_ref()))
        .collect()
}

fn check_scalars<B: AsRef<[u8]>>(param: Param, items: &[B]) -> Result<Vec<SecretKey>, AdaptorError> {
    check_non_empty(param, items)?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let bytes = check_buffer(param, i, item.as_ref())?;
            SecretKey::from_array(&bytes).ok_or(AdaptorError::RangeError {
                param,
                index: Some(i),
            })
        })
        .collect()
}

fn check_arity(a: usize, b: usize, c: usize) -> Result<(), AdaptorError> {
    if a != b || b != c {
        return Err(AdaptorError::ArityMismatch);
    }
    Ok(())
}

fn rejected(err: AdaptorError) -> AdaptorError {
    debug!(error = %err, "rejected adaptor inputs");
    err
}

/// Check the inputs of [`create_adaptor_point`](crate::create_adaptor_point).
///
/// `pub_keys`, `messages` and `r_values` must each be non-empty sequences of
/// 32 byte buffers, all of the same length.
pub fn validate_adaptor_point_inputs<K, M, R>(
    pub_keys: &[K],
    messages: &[M],
    r_values: &[R],
) -> Result<Vec<PointContribution>, AdaptorError>
where
    K: AsRef<[u8]>,
    M: AsRef<[u8]>,
    R: AsRef<[u8]>,
{
    let pub_keys = check_buffers(Param::PubKey, pub_keys).map_err(rejected)?;
    let messages = check_buffers(Param::Message, messages).map_err(rejected)?;
    let nonces = check_buffers(Param::Nonce, r_values).map_err(rejected)?;
    check_arity(pub_keys.len(), messages.len(), nonces.len()).map_err(rejected)?;

    Ok(pub_keys
        .into_iter()
        .zip(messages)
        .zip(nonces)
        .map(|((pub_key, message), nonce)| PointContribution {
            pub_key,
            message,
            nonce,
        })
        .collect())
}

/// Check the inputs of [`create_adaptor_secret`](crate::create_adaptor_secret).
///
/// `priv_keys` and `k_values` must hold 32 byte big-endian scalars in
/// `[1, n-1]`, `messages` 32 byte buffers, all sequences non-empty and of
/// the same length.
pub fn validate_adaptor_secret_inputs<P, M, K>(
    priv_keys: &[P],
    messages: &[M],
    k_values: &[K],
) -> Result<Vec<SecretContribution>, AdaptorError>
where
    P: AsRef<[u8]>,
    M: AsRef<[u8]>,
    K: AsRef<[u8]>,
{
    let priv_keys = check_scalars(Param::PrivateKey, priv_keys).map_err(rejected)?;
    let messages = check_buffers(Param::Message, messages).map_err(rejected)?;
    let k_values = check_scalars(Param::KValue, k_values).map_err(rejected)?;
    check_arity(priv_keys.len(), messages.len(), k_values.len()).map_err(rejected)?;

    Ok(priv_keys
        .into_iter()
        .zip(messages)
        .zip(k_values)
        .map(|((private_key, message), k_value)| SecretContribution {
            private_key,
            message,
            k_value,
        })
        .collect())
}

/// Check the inputs of [`combine_secrets`](crate::combine_secrets): a
/// non-empty sequence of 32 byte buffers.
pub fn validate_secrets<S: AsRef<[u8]>>(secrets: &[S]) -> Result<Vec<[u8; 32]>, AdaptorError> {
    check_buffers(Param::Secrets, secrets).map_err(rejected)
}
