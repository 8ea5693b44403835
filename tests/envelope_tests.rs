// tests/envelope_tests.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use krypt_rs::{CoreError, CryptoFailure, Envelope};

#[test]
fn iv_leads_the_envelope() {
    let iv = [7u8; 16];
    let ct = [9u8; 32];
    let opened = Envelope::open(&Envelope::seal(&iv, &ct), 16, 16).unwrap();
    assert_eq!(opened.iv(), &iv);
    assert_eq!(opened.ciphertext(), &ct);
}

#[test]
fn iv_without_ciphertext_is_truncated() {
    let text = STANDARD.encode([1u8; 16]);
    let err = Envelope::open(&text, 16, 16).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Crypto(CryptoFailure::Truncated {
            actual: 16,
            iv_len: 16
        })
    ));
}

#[test]
fn misaligned_ciphertext_is_rejected() {
    let text = STANDARD.encode([1u8; 16 + 20]);
    let err = Envelope::open(&text, 16, 16).unwrap_err();
    assert!(matches!(err, CoreError::Crypto(CryptoFailure::Padding)));
}

#[test]
fn non_base64_is_rejected() {
    let err = Envelope::open("not*base64!", 16, 16).unwrap_err();
    assert!(matches!(err, CoreError::Crypto(CryptoFailure::Base64(_))));
}

#[test]
fn whitespace_between_base64_lines_is_ignored() {
    let iv = [5u8; 16];
    let ct = [6u8; 48];
    let sealed = Envelope::seal(&iv, &ct);
    let (head, tail) = sealed.split_at(40);
    let wrapped = format!("{head}\n{tail}\t \r\n");

    let opened = Envelope::open(&wrapped, 16, 16).unwrap();
    assert_eq!(opened.iv(), &iv);
    assert_eq!(opened.ciphertext(), &ct);
}
