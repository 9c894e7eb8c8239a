//! Key material generated on the fly for tests.

use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use openssl::bn::{BigNum, BigNumContext};
use openssl::ec::{EcGroup, EcKey};
use openssl::nid::Nid;
use openssl::pkey::{HasPublic, PKey};
use openssl::rsa::Rsa;

use crate::jwk::JwkKey;

/// Generates an RSA key pair and returns its public JWK together with the
/// PEM OpenSSL produces for the same public key.
pub(crate) fn rsa_jwk(kid: &str) -> (JwkKey, String) {
    let rsa = Rsa::generate(2048).unwrap();
    let jwk = JwkKey {
        kty: "RSA".into(),
        alg: "RS256".into(),
        key_use: "sig".into(),
        kid: kid.into(),
        n: BASE64_URL_SAFE_NO_PAD.encode(rsa.n().to_vec()),
        e: BASE64_URL_SAFE_NO_PAD.encode(rsa.e().to_vec()),
        ..JwkKey::default()
    };
    let public = PKey::from_rsa(rsa).unwrap();
    (jwk, expected_pem(&public))
}

/// Generates an EC key pair on `curve` (`P-256`, `P-384` or `P-521`).
pub(crate) fn ec_jwk(kid: &str, curve: &str) -> (JwkKey, String) {
    let (nid, alg) = match curve {
        "P-256" => (Nid::X9_62_PRIME256V1, "ES256"),
        "P-384" => (Nid::SECP384R1, "ES384"),
        "P-521" => (Nid::SECP521R1, "ES512"),
        other => panic!("no test curve {other}"),
    };
    let group = EcGroup::from_curve_name(nid).unwrap();
    let key = EcKey::generate(&group).unwrap();

    let mut ctx = BigNumContext::new().unwrap();
    let mut x = BigNum::new().unwrap();
    let mut y = BigNum::new().unwrap();
    key.public_key()
        .affine_coordinates(&group, &mut x, &mut y, &mut ctx)
        .unwrap();

    let jwk = JwkKey {
        kty: "EC".into(),
        alg: alg.into(),
        key_use: "sig".into(),
        kid: kid.into(),
        crv: curve.into(),
        x: BASE64_URL_SAFE_NO_PAD.encode(x.to_vec()),
        y: BASE64_URL_SAFE_NO_PAD.encode(y.to_vec()),
        ..JwkKey::default()
    };
    let public = EcKey::from_public_key(&group, key.public_key()).unwrap();
    (jwk, expected_pem(&PKey::from_ec_key(public).unwrap()))
}

fn expected_pem<T: HasPublic>(key: &PKey<T>) -> String {
    String::from_utf8(key.public_key_to_pem().unwrap())
        .unwrap()
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ec_keys_carry_the_curve_algorithm() {
        for (curve, alg) in [("P-256", "ES256"), ("P-384", "ES384"), ("P-521", "ES512")] {
            let (jwk, _) = ec_jwk("ec", curve);
            assert_eq!(jwk.alg, alg, "curve {curve}");
            assert_eq!(jwk.crv, curve);
        }
    }
}
