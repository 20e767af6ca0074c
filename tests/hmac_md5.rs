use hmac_md5::cs::security::{decode_mac, md5_hex, normalize_key, HMAC_BLOCK_SIZE, MD5_OUTPUT_SIZE};
use hmac_md5::{hmac_md5, hmac_md5_bytes, md5_digest, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_bytes(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn test_known_answers_through_crate_root() {
    assert_eq!(hex::encode(md5_digest(b"")), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        hmac_md5(&[0x0b; 16], b"Hi There"),
        "9294727a3638bb1c13f48ef8158bfc9d"
    );
}

#[test]
fn test_demo_message_mac() {
    assert_eq!(
        hmac_md5(b"supersecretkey", b"This is a secure message."),
        "17133ee10ed6143b0a7626074d5d6e07"
    );
}

#[test]
fn test_random_inputs_have_fixed_width_output() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let key = random_bytes(&mut rng, 150);
        let message = random_bytes(&mut rng, 300);

        assert_eq!(md5_digest(&message).len(), MD5_OUTPUT_SIZE);
        assert_eq!(normalize_key(&key).len(), HMAC_BLOCK_SIZE);

        let mac = hmac_md5(&key, &message);
        assert_eq!(mac.len(), 32);
        assert!(mac
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let key = random_bytes(&mut rng, 100);
        let message = random_bytes(&mut rng, 200);
        assert_eq!(md5_digest(&message), md5_digest(&message));
        assert_eq!(hmac_md5(&key, &message), hmac_md5(&key, &message));
    }
}

#[test]
fn test_hex_and_raw_mac_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let key = random_bytes(&mut rng, 80);
        let message = random_bytes(&mut rng, 80);
        let raw = hmac_md5_bytes(&key, &message);
        let text = hmac_md5(&key, &message);
        assert_eq!(decode_mac(&text), Ok(raw));
    }
}

#[test]
fn test_long_key_equals_its_digest() {
    let key = [0x42u8; 100];
    let digest = md5_digest(&key);
    assert_eq!(hmac_md5(&key, b"payload"), hmac_md5(&digest, b"payload"));
}

#[test]
fn test_decode_mac_rejects_wrong_length() {
    let err = decode_mac("9294727a3638bb1c13f48ef8158bfc").unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            expected: 16,
            actual: 15
        }
    );
}
