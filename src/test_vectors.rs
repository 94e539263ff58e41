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

//! BIP340 signing vectors 0-3 and the signer side of BIP340, used by the tests.

use k256::{ProjectivePoint, Scalar};

use crate::keys::SecretKey;
use crate::tools;

struct Vector {
    d: &'static str,
    pk: &'static str,
    aux: &'static str,
    m: &'static str,
    sig: &'static str,
}

const VECTORS: [Vector; 4] = [
    Vector {
        d: "0000000000000000000000000000000000000000000000000000000000000003",
        pk: "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        m: "0000000000000000000000000000000000000000000000000000000000000000",
        sig: "E907831F80848D1069A5371B402410364BDF1C5F8307B0084C55F1CE2DCA821525F66A4A85EA8B71E482A74F382D2CE5EBEEE8FDB2172F477DF4900D310536C0",
    },
    Vector {
        d: "B7E151628AED2A6ABF7158809CF4F3C762E7160F38B4DA56A784D9045190CFEF",
        pk: "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        aux: "0000000000000000000000000000000000000000000000000000000000000001",
        m: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        sig: "6896BD60EEAE296DB48A229FF71DFE071BDE413E6D43F917DC8DCF8C78DE33418906D11AC976ABCCB20B091292BFF4EA897EFCB639EA871CFA95F6DE339E4B0A",
    },
    Vector {
        d: "C90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B14E5C9",
        pk: "DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
        aux: "C87AA53824B4D7AE2EB035A2B5BBBCCC080E76CDC6D1692C4B0B62D798E6D906",
        m: "7E2D58D8B3BCDF1ABADEC7829054F90DDA9805AAB56C77333024B9D0A508B75C",
        sig: "5831AAEED7B44BB74E5EAB94BA9D4294C49BCF2A60728D8B4C200F50DD313C1BAB745879A5AD954A72C45A91C3A51D3C7ADEA98D82F8481E0E1E03674A6F3FB7",
    },
    Vector {
        d: "0B432B2677937381AEF05BB02A66ECD012773062CF3FA2549E44F58ED2401710",
        pk: "25D1DFF95105F5253C4022F628A996AD3A0D95FBF21D468A1B33F8C160D8F517",
        aux: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        m: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        sig: "7EB0509757E246F19449885651611CB965ECC1A187DD51B64FDA1EDC9637D5EC97582B9CB13DB3933705B32BA982AF5AF25FD78881EBB32771FC5922EFC66EA3",
    },
];

/// x-only adaptor point of all four vectors combined.
pub(crate) const COMBINED_POINT: &str =
    "bec12ea1641e3aa72b1800357b5b07378e7eb84ef1b2f4604a282bf7ee561af2";

/// Sum of the four vector signature scalars mod n.
pub(crate) const COMBINED_SECRET: &str =
    "f1c9bf7ba64c801c4057be1f3814ee6927fd89e3419d116e38d284e8cea2eee3";

/// One oracle: private and public material for the same attestation.
pub(crate) struct Participant {
    pub priv_key: [u8; 32],
    pub pub_key: [u8; 32],
    pub message: [u8; 32],
    pub k_value: [u8; 32],
    pub r: [u8; 32],
    pub s: [u8; 32],
}

pub(crate) fn bytes32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(s).unwrap());
    out
}

/// BIP340 default nonce `k' = H_nonce((d xor H_aux(a)) || P.x || m) mod n`.
pub(crate) fn bip340_nonce(key: &SecretKey, aux: &[u8; 32], msg: &[u8; 32]) -> [u8; 32] {
    let (d, px) = key.even_y();
    let mask = tools::tagged_hash("BIP0340/aux", aux);
    let mut data = tools::scalar_to_bytes(&d).to_vec();
    for (byte, m) in data.iter_mut().zip(mask.iter()) {
        *byte ^= m;
    }
    data.extend_from_slice(&px);
    data.extend_from_slice(msg);
    let k = tools::scalar_from_bytes_reduced(&tools::tagged_hash("BIP0340/nonce", &data));
    tools::scalar_to_bytes(&k)
}

/// Plain BIP340 signature `(x(R), s)` with a given nonce.
pub(crate) fn sign(key: &SecretKey, msg: &[u8; 32], k_value: &SecretKey) -> ([u8; 32], [u8; 32]) {
    let (d, px) = key.even_y();
    let nonce_point = (ProjectivePoint::GENERATOR * *k_value.as_scalar()).to_affine();
    let k: Scalar = tools::even_y_scalar(&nonce_point, k_value.as_scalar());
    let r = tools::x_bytes(&nonce_point);
    let s = k + tools::challenge(&r, &px, msg) * d;
    (r, tools::scalar_to_bytes(&s))
}

/// The four BIP340 vectors as oracle participants.
pub(crate) fn vector_participants() -> Vec<Participant> {
    VECTORS
        .iter()
        .map(|v| {
            let priv_key = bytes32(v.d);
            let key = SecretKey::from_array(&priv_key).unwrap();
            let message = bytes32(v.m);
            let k_value = bip340_nonce(&key, &bytes32(v.aux), &message);
            let sig = hex::decode(v.sig).unwrap();
            let mut r = [0u8; 32];
            let mut s = [0u8; 32];
            r.copy_from_slice(&sig[..32]);
            s.copy_from_slice(&sig[32..]);
            Participant {
                priv_key,
                pub_key: bytes32(v.pk),
                message,
                k_value,
                r,
                s,
            }
        })
        .collect()
}

fn draw_key<R: rand::RngCore>(rng: &mut R) -> SecretKey {
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        if let Some(key) = SecretKey::from_array(&bytes) {
            return key;
        }
    }
}

/// `count` participants drawn from `rng`, signing with fresh nonces.
pub(crate) fn random_participants<R: rand::RngCore>(rng: &mut R, count: usize) -> Vec<Participant> {
    (0..count)
        .map(|_| {
            let key = draw_key(rng);
            let nonce = draw_key(rng);
            let mut message = [0u8; 32];
            rng.fill_bytes(&mut message);
            let (r, s) = sign(&key, &message, &nonce);
            Participant {
                priv_key: key.to_bytes(),
                pub_key: key.x_only_public_key().to_bytes(),
                message,
                k_value: nonce.to_bytes(),
                r,
                s,
            }
        })
        .collect()
}

#[test]
fn vectors_are_reproduced_by_the_signer() {
    for p in vector_participants() {
        let key = SecretKey::from_array(&p.priv_key).unwrap();
        let nonce = SecretKey::from_array(&p.k_value).unwrap();
        assert_eq!(key.x_only_public_key().to_bytes(), p.pub_key);
        assert_eq!(sign(&key, &p.message, &nonce), (p.r, p.s));
    }
}
