use devtools_md5::{compute, hmac as hmac_md5, Digest, HmacMd5, Md5};
use hex_literal::hex;
use hmac::Hmac;

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn reference_hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = <Hmac<Md5> as hmac::Mac>::new_from_slice(key).unwrap();
    hmac::Mac::update(&mut mac, data);
    hmac::Mac::finalize(mac).into_bytes().to_vec()
}

#[test]
fn md5_main() {
    let vectors: &[(&[u8], [u8; 16])] = &[
        (b"", hex!("d41d8cd98f00b204e9800998ecf8427e")),
        (b"a", hex!("0cc175b9c0f1b6a831c399e269772661")),
        (b"abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
        (b"message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            hex!("c3fcd3d76192e4007dfb496cca67e13b"),
        ),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            hex!("d174ab98d277d9f5a5611c2c9f419d9f"),
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            hex!("57edf4a22be3c955ac49da2e2107b67a"),
        ),
        (FOX, hex!("9e107d9d372bb6826bd81d3542a419d6")),
    ];

    for (input, expected) in vectors {
        assert_eq!(compute(input)[..], expected[..], "input: {:?}", input);
    }
}

#[test]
fn md5_padding_boundaries() {
    for len in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
        assert_eq!(
            compute(&data)[..],
            md5::compute(&data).0[..],
            "length {}",
            len
        );
    }
}

#[test]
fn md5_incremental_matches_one_shot() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    let expected = compute(&data);

    for chunk_size in [1, 3, 63, 64, 65, 500] {
        let mut hasher = Md5::new();
        for chunk in data.chunks(chunk_size) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), expected, "chunk size {}", chunk_size);
    }
}

#[test]
fn md5_reset_starts_over() {
    let mut hasher = Md5::new();
    hasher.update(b"discarded");
    Digest::reset(&mut hasher);
    hasher.update(b"abc");
    assert_eq!(
        hasher.finalize()[..],
        hex!("900150983cd24fb0d6963f7d28e17f72")
    );
}

#[test]
fn md5_is_deterministic() {
    assert_eq!(compute(FOX), compute(FOX));
}

#[test]
fn md5_million_a() {
    let data = vec![b'a'; 1_000_000];
    assert_eq!(compute(&data)[..], hex!("7707d6ae4e027c70eea2a935c2296f21"));
}

#[test]
fn md5_multi_megabyte_buffer() {
    let chunk: Vec<u8> = (0..=255u8).cycle().take(4099).collect();
    let data: Vec<u8> = chunk.iter().copied().cycle().take(5 * 1024 * 1024 + 17).collect();
    assert_eq!(compute(&data)[..], md5::compute(&data).0[..]);
}

#[test]
fn hmac_fox_with_short_key() {
    assert_eq!(
        hmac_md5(b"key", FOX)[..],
        hex!("80070713463e7749b90c2dc24911e275")
    );
}

// RFC 2202, section 2
#[test]
fn hmac_rfc2202() {
    let vectors: &[(&[u8], &[u8], [u8; 16])] = &[
        (
            &[0x0b; 16],
            b"Hi There",
            hex!("9294727a3638bb1c13f48ef8158bfc9d"),
        ),
        (
            b"Jefe",
            b"what do ya want for nothing?",
            hex!("750c783e6ab0b503eaa86e310a5db738"),
        ),
        (
            &[0xaa; 16],
            &[0xdd; 50],
            hex!("56be34521d144c88dbb8c733f0e8b3f6"),
        ),
        (
            &hex!("0102030405060708090a0b0c0d0e0f10111213141516171819"),
            &[0xcd; 50],
            hex!("697eaf0aca3a3aea3a75164746ffaa79"),
        ),
        (
            &[0x0c; 16],
            b"Test With Truncation",
            hex!("56461ef2342edc00f9bab995690efd4c"),
        ),
        (
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            hex!("6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd"),
        ),
        (
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
            hex!("6f630fad67cda0ee1fb1f562db3aa53e"),
        ),
    ];

    for (key, data, expected) in vectors {
        assert_eq!(hmac_md5(key, data)[..], expected[..], "key: {:?}", key);
    }
}

#[test]
fn hmac_long_key_equals_hashed_key() {
    let key = [0x42u8; 100];
    let hashed = compute(key);
    assert_eq!(hmac_md5(key, FOX), hmac_md5(hashed, FOX));
}

#[test]
fn hmac_short_key_equals_zero_padded_key() {
    let mut padded = [0u8; 64];
    padded[..3].copy_from_slice(b"key");
    assert_eq!(hmac_md5(b"key", FOX), hmac_md5(padded, FOX));
}

#[test]
fn hmac_matches_generic_construction() {
    let long_message = vec![0x5cu8; 300];
    for key_len in [0, 1, 16, 63, 64, 65, 200] {
        let key: Vec<u8> = (0..key_len).map(|i| i as u8).collect();
        for data in [&b""[..], FOX, &long_message[..]] {
            assert_eq!(
                hmac_md5(&key, data)[..],
                reference_hmac(&key, data)[..],
                "key length {}",
                key_len
            );
        }
    }
}

#[test]
fn hmac_incremental_matches_one_shot() {
    let mut mac = HmacMd5::new(b"key");
    for word in FOX.split_inclusive(|&b| b == b' ') {
        mac.update(word);
    }
    assert_eq!(mac.finalize(), hmac_md5(b"key", FOX));
}

#[test]
fn hmac_verify() {
    let tag = hex!("80070713463e7749b90c2dc24911e275");

    let mut mac = HmacMd5::new(b"key");
    mac.update(FOX);
    assert!(hmac::Mac::verify_slice(mac, &tag).is_ok());

    let mut forged = tag;
    forged[0] ^= 1;
    let mut mac = HmacMd5::new(b"key");
    mac.update(FOX);
    assert!(hmac::Mac::verify_slice(mac, &forged).is_err());
}
