//! Decoding Tests
//!
//! Tests for error correction, erasure handling, and each way a decode
//! can fail on an RS(7, 3) code (t = 2) and on the full-length RS(255, 223).

use rscodec::{decode, CodecConfig, DecodeFailure, ReedSolomon, RsError};

const CODEWORD: [u8; 7] = [32, 45, 12, 58, 51, 88, 80];
const MESSAGE: [u8; 3] = [32, 45, 12];

fn rs_7_3() -> ReedSolomon<'static> {
    ReedSolomon::new(CodecConfig::new(7, 3).unwrap())
}

// ============================================================================
// Error Correction
// ============================================================================

#[test]
fn test_clean_codeword_decodes_unchanged() {
    assert_eq!(decode(&CODEWORD, 3, 7, None).unwrap(), (MESSAGE.to_vec(), 0));
}

#[test]
fn test_single_error_every_position() {
    for position in 0..7 {
        let mut received = CODEWORD;
        received[position] ^= 0xa5;
        let decoded = rs_7_3().decode(&received).unwrap();
        assert_eq!(decoded.codeword, CODEWORD.to_vec(), "position {}", position);
        assert_eq!(decoded.positions, vec![position]);
    }
}

#[test]
fn test_two_errors_in_parity() {
    let mut received = CODEWORD;
    received[5] = 0;
    received[6] = 0;
    let decoded = rs_7_3().decode(&received).unwrap();
    assert_eq!(decoded.message, MESSAGE.to_vec());
    assert_eq!(decoded.error_count, 2);
    assert_eq!(decoded.positions, vec![5, 6]);
}

#[test]
fn test_sixteen_errors_full_length_code() {
    let codec = ReedSolomon::new(CodecConfig::default());
    let message: Vec<u8> = (0..223).map(|i| (i * 13 + 5) as u8).collect();
    let codeword = codec.encode(&message).unwrap();

    let mut received = codeword.clone();
    for i in 0..16 {
        received[i * 15 + 2] ^= (i as u8).wrapping_mul(17) | 1;
    }
    let decoded = codec.decode(&received).unwrap();
    assert_eq!(decoded.message, message);
    assert_eq!(decoded.codeword, codeword);
    assert_eq!(decoded.error_count, 16);
}

// ============================================================================
// Erasures
// ============================================================================

#[test]
fn test_erasures_with_one_error() {
    let mut received = CODEWORD;
    received[1] = 0;
    received[5] = 0;
    received[6] ^= 7;
    assert_eq!(
        decode(&received, 3, 7, Some(&[1, 5])).unwrap(),
        (MESSAGE.to_vec(), 3)
    );
}

#[test]
fn test_parity_many_erasures() {
    let mut received = CODEWORD;
    for p in [0, 2, 4, 6] {
        received[p] = 0xff;
    }
    let decoded = rs_7_3().decode_with_erasures(&received, &[0, 2, 4, 6]).unwrap();
    assert_eq!(decoded.codeword, CODEWORD.to_vec());
    assert_eq!(decoded.positions, vec![0, 2, 4, 6]);
}

#[test]
fn test_erasures_on_clean_codeword() {
    let decoded = rs_7_3().decode_with_erasures(&CODEWORD, &[0, 1, 2]).unwrap();
    assert_eq!(decoded.error_count, 0);
    assert!(decoded.positions.is_empty());
}

#[test]
fn test_erasure_positions_validated() {
    let codec = rs_7_3();
    assert!(matches!(
        codec.decode_with_erasures(&CODEWORD, &[7]),
        Err(RsError::InvalidParameters(_))
    ));
    assert!(matches!(
        codec.decode_with_erasures(&CODEWORD, &[3, 3]),
        Err(RsError::InvalidParameters(_))
    ));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_three_errors_exceed_capacity() {
    let mut received = CODEWORD;
    for p in [0, 3, 6] {
        received[p] ^= 0x55;
    }
    let err = decode(&received, 3, 7, None).unwrap_err();
    assert!(err.is_uncorrectable());
    assert_eq!(
        err,
        RsError::DecodeFailure(DecodeFailure::LocatorDegreeExceedsCapacity {
            degree: 3,
            capability: 2
        })
    );
}

#[test]
fn test_locator_without_roots() {
    let received = [32, 32, 171, 41, 51, 88, 80];
    let err = rs_7_3().decode(&received).unwrap_err();
    assert_eq!(
        err,
        RsError::DecodeFailure(DecodeFailure::RootCountMismatch {
            degree: 2,
            roots: 0
        })
    );
}

#[test]
fn test_root_beyond_shortened_codeword() {
    let received = [76, 93, 12, 58, 36, 88, 80];
    let err = rs_7_3().decode(&received).unwrap_err();
    assert_eq!(
        err,
        RsError::DecodeFailure(DecodeFailure::RootOutsideCodeword {
            power: 53,
            codeword_len: 7
        })
    );
}

#[test]
fn test_too_many_erasures() {
    let mut received = CODEWORD;
    received[2] ^= 1;
    let err = rs_7_3()
        .decode_with_erasures(&received, &[0, 1, 2, 3, 4])
        .unwrap_err();
    assert!(matches!(
        err,
        RsError::DecodeFailure(DecodeFailure::TooManyErasures { .. })
    ));
}

#[test]
fn test_wrong_received_length() {
    let err = decode(&CODEWORD[..5], 3, 7, None).unwrap_err();
    assert_eq!(
        err,
        RsError::Length {
            what: "codeword",
            expected: 7,
            actual: 5
        }
    );
    assert!(!err.is_uncorrectable());
}
