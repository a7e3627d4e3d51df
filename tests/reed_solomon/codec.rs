//! Encoding and Codec Facade Tests
//!
//! Tests for systematic encoding, parameter validation, and the
//! ReedSolomon / builder / free-function entry points.

use rscodec::reed_solomon::galois::Gf256;
use rscodec::{encode, to_symbols, CodecConfig, ReedSolomon, ReedSolomonBuilder, RsError};

// ============================================================================
// Known Vectors
// ============================================================================

#[test]
fn test_encode_rs_7_3() {
    assert_eq!(
        encode(&[32, 45, 12], 3, 7).unwrap(),
        vec![32, 45, 12, 58, 51, 88, 80]
    );
}

#[test]
fn test_encode_hello_world() {
    let codeword = encode(b"hello world", 11, 21).unwrap();
    assert_eq!(&codeword[..11], b"hello world");
    assert_eq!(
        &codeword[11..],
        &[237, 37, 84, 196, 253, 253, 137, 243, 168, 170]
    );
}

#[test]
fn test_encode_rs_64_32() {
    let message: Vec<u8> = (0..32).collect();
    let codeword = encode(&message, 32, 64).unwrap();
    assert_eq!(&codeword[..32], message.as_slice());
    assert_eq!(
        &codeword[32..],
        &[
            245, 112, 149, 129, 111, 40, 114, 114, 142, 33, 53, 75, 197, 71, 15, 166, 230, 117,
            203, 237, 2, 38, 115, 9, 25, 100, 160, 189, 227, 251, 11, 180
        ]
    );
}

// ============================================================================
// Structural Properties
// ============================================================================

#[test]
fn test_encode_is_systematic_and_valid() {
    let codec = ReedSolomon::new(CodecConfig::default());
    let message: Vec<u8> = (0..223).map(|i| (i * 7 + 3) as u8).collect();
    let codeword = codec.encode(&message).unwrap();

    assert_eq!(codeword.len(), 255);
    assert_eq!(&codeword[..223], message.as_slice());
    assert!(codec.is_codeword(&codeword));
    assert!(codec.syndromes(&codeword).unwrap().all_zero());
}

#[test]
fn test_encode_zero_message() {
    assert_eq!(encode(&[0; 5], 5, 9).unwrap(), vec![0; 9]);
}

#[test]
fn test_encoding_is_linear() {
    let codec = ReedSolomon::new(CodecConfig::new(20, 12).unwrap());
    let a: Vec<u8> = (0..12).map(|i| (i * 31) as u8).collect();
    let b: Vec<u8> = (0..12).map(|i| (200 - i * 3) as u8).collect();
    let sum: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();

    let ca = codec.encode(&a).unwrap();
    let cb = codec.encode(&b).unwrap();
    let expected: Vec<u8> = ca.iter().zip(&cb).map(|(x, y)| x ^ y).collect();
    assert_eq!(codec.encode(&sum).unwrap(), expected);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_encode_wrong_message_length() {
    let err = encode(&[1, 2], 3, 7).unwrap_err();
    assert_eq!(
        err,
        RsError::Length {
            what: "message",
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_invalid_code_shapes() {
    for (n, k) in [(256, 200), (7, 0), (7, 7), (7, 8), (8, 3)] {
        assert!(
            matches!(encode(&vec![0; k], k, n), Err(RsError::InvalidParameters(_))),
            "({}, {}) accepted",
            n,
            k
        );
    }
}

#[test]
fn test_to_symbols_domain() {
    assert_eq!(to_symbols(&[0, 255]).unwrap(), vec![0, 255]);
    assert!(matches!(to_symbols(&[300]), Err(RsError::Domain(_))));
    assert!(matches!(to_symbols(&[-5]), Err(RsError::Domain(_))));
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_matches_config() {
    let gf = Gf256::new();
    let built = ReedSolomonBuilder::new()
        .with_message_len(3)
        .with_parity_len(4)
        .build_with_field(&gf)
        .unwrap();
    let direct = ReedSolomon::new(CodecConfig::new(7, 3).unwrap());

    assert_eq!(built.config(), direct.config());
    assert_eq!(built.generator(), direct.generator());
    assert_eq!(
        built.encode(&[32, 45, 12]).unwrap(),
        direct.encode(&[32, 45, 12]).unwrap()
    );
}

#[test]
fn test_codec_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReedSolomon<'static>>();
    assert_send_sync::<Gf256>();
}
