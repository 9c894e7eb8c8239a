use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::nid::Nid;
use openssl::pkey::{PKey, Public};
use openssl::rsa::Rsa;

use super::error::KeyEncodingError;
use super::key::JwkKey;

impl JwkKey {
    /// Encodes the public key as a SubjectPublicKeyInfo PEM block
    /// (`-----BEGIN PUBLIC KEY-----`) with surrounding whitespace trimmed.
    ///
    /// Supports `RSA` keys and `EC` keys on P-256, P-384 and P-521.
    pub fn to_pem(&self) -> Result<String, KeyEncodingError> {
        let key = match self.kty.as_str() {
            "RSA" => self.rsa_public_key()?,
            "EC" => self.ec_public_key()?,
            other => return Err(KeyEncodingError::UnsupportedKeyType(other.to_owned())),
        };

        let pem = key.public_key_to_pem()?;
        Ok(String::from_utf8_lossy(&pem).trim().to_owned())
    }

    fn rsa_public_key(&self) -> Result<PKey<Public>, KeyEncodingError> {
        let n = decode_member("n", &self.n)?;
        let e = decode_member("e", &self.e)?;
        let rsa = Rsa::from_public_components(n, e)?;
        Ok(PKey::from_rsa(rsa)?)
    }

    fn ec_public_key(&self) -> Result<PKey<Public>, KeyEncodingError> {
        let nid = match self.crv.as_str() {
            "" => return Err(KeyEncodingError::MissingMember("crv")),
            "P-256" => Nid::X9_62_PRIME256V1,
            "P-384" => Nid::SECP384R1,
            "P-521" => Nid::SECP521R1,
            other => return Err(KeyEncodingError::UnsupportedCurve(other.to_owned())),
        };
        let group = EcGroup::from_curve_name(nid)?;
        let x = decode_member("x", &self.x)?;
        let y = decode_member("y", &self.y)?;
        let ec = EcKey::from_public_key_affine_coordinates(&group, &x, &y)?;
        Ok(PKey::from_ec_key(ec)?)
    }
}

/// Decodes a base64url big-endian integer member. Padding is tolerated.
fn decode_member(member: &'static str, value: &str) -> Result<BigNum, KeyEncodingError> {
    let value = value.trim_end_matches('=');
    if value.is_empty() {
        return Err(KeyEncodingError::MissingMember(member));
    }

    let bytes = BASE64_URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|source| KeyEncodingError::InvalidBase64 { member, source })?;

    Ok(BigNum::from_slice(&bytes)?)
}
