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

//
// Adaptor points and secrets over secp256k1
//

//Useful links:
//https://github.com/bitcoin/bips/blob/master/bip-0340.mediawiki
//https://github.com/discreetlogcontracts/dlcspecs/blob/master/CETCompression.md
//https://joinmarket.me/blog/blog/flipping-the-scriptless-script-on-schnorr/

#[macro_use]
mod ser;

mod errors;
pub use errors::{AdaptorError, Param};
pub mod tools;
pub mod keys;
pub mod validate;
pub mod adaptor;
pub mod combine;

#[cfg(test)]
mod test_vectors;

pub use crate::adaptor::{
    create_adaptor_point,
    create_adaptor_secret,
    AdaptorPoint,
    AdaptorSecret,
    ADAPTOR_LENGTH,
};
pub use crate::combine::combine_secrets;
pub use crate::keys::*;
