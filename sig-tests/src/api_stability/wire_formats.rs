//! Wire Format Stability Tests
//!
//! Byte lengths, tag bytes and layouts of every encoded artefact.

#[cfg(test)]
mod tests {
    use sig_core::{derive_public_key_p256r1, generate_keypair, sign_p256r1};
    use sig_primitives::SignatureScheme;
    use sig_primitives::ec::encoding::{
        COMPRESSED_EVEN_FLAG, COMPRESSED_LEN, COMPRESSED_ODD_FLAG, FIELD_LEN, INFINITY_FLAG,
        INFINITY_LEN, UNCOMPRESSED_FLAG, UNCOMPRESSED_LEN,
    };
    use sig_primitives::ec::p256r1::{
        PRIVATE_KEY_LEN, PrivateKey, PublicKey, SIGNATURE_LEN, SIGNATURE_R_LEN, SIGNATURE_S_LEN,
    };

    #[test]
    fn api_stability_lengths() {
        assert_eq!(PRIVATE_KEY_LEN, 32);
        assert_eq!(FIELD_LEN, 32);
        assert_eq!(SIGNATURE_R_LEN, 32);
        assert_eq!(SIGNATURE_S_LEN, 32);
        assert_eq!(SIGNATURE_LEN, 64);
        assert_eq!(COMPRESSED_LEN, 33);
        assert_eq!(UNCOMPRESSED_LEN, 65);
        assert_eq!(INFINITY_LEN, 1);
    }

    #[test]
    fn api_stability_tag_bytes() {
        assert_eq!(INFINITY_FLAG, 0x00);
        assert_eq!(COMPRESSED_EVEN_FLAG, 0x02);
        assert_eq!(COMPRESSED_ODD_FLAG, 0x03);
        assert_eq!(UNCOMPRESSED_FLAG, 0x04);
    }

    #[test]
    fn api_stability_scheme_tag() {
        let scheme = SignatureScheme::P256R1;
        assert_eq!(scheme.name(), "P256R1");
        assert_eq!(scheme.digest_name(), "SHA-256");
        assert_eq!(scheme.signature_len(), SIGNATURE_LEN);
        assert_eq!(scheme.private_key_len(), PRIVATE_KEY_LEN);
    }

    #[test]
    fn api_stability_private_key_bytes_roundtrip() {
        let d = hex::decode("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721")
            .expect("valid hex");
        let sk = PrivateKey::from_bytes(&d).expect("valid scalar");
        let exported = sk.to_bytes();
        assert_eq!(exported.as_slice(), d.as_slice());
    }

    #[test]
    fn api_stability_convenience_output_lengths() {
        let (pk, sk) = generate_keypair().expect("keypair generation should succeed");
        assert_eq!(pk.len(), UNCOMPRESSED_LEN);
        assert_eq!(sk.len(), PRIVATE_KEY_LEN);
        assert_eq!(sign_p256r1(b"", sk.as_slice()).expect("signing should succeed").len(), 64);
        assert_eq!(derive_public_key_p256r1(sk.as_slice()).expect("derivation"), pk);
    }

    #[test]
    fn api_stability_infinity_encoding() {
        let encoded = PublicKey::infinity().encode_point(true).expect("infinity encodes");
        assert_eq!(encoded, vec![INFINITY_FLAG]);
    }
}
