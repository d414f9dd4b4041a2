//! HMAC-MD5 as defined by RFC 2104.

use crate::{compress::BLOCK_SIZE, Md5};
use digest::{typenum::U16, Digest, FixedOutput, MacMarker, Output, OutputSizeUser, Update};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// HMAC-MD5 state.
///
/// Both hashers are primed with their key pad at construction, so the key
/// itself is not retained.
///
/// ```rust
/// use devtools_md5::HmacMd5;
/// use hex_literal::hex;
///
/// let mut mac = HmacMd5::new(b"Jefe");
/// mac.update(b"what do ya want ");
/// mac.update(b"for nothing?");
/// assert_eq!(mac.finalize()[..], hex!("750c783e6ab0b503eaa86e310a5db738"));
/// ```
#[derive(Clone)]
pub struct HmacMd5 {
    inner: Md5,
    outer: Md5,
}

impl HmacMd5 {
    /// Creates a MAC keyed with `key`. Any key length is accepted.
    pub fn new(key: &[u8]) -> Self {
        let block = key_block(key);

        let mut ipad = [IPAD; BLOCK_SIZE];
        let mut opad = [OPAD; BLOCK_SIZE];
        for ((i, o), k) in ipad.iter_mut().zip(opad.iter_mut()).zip(block.iter()) {
            *i ^= k;
            *o ^= k;
        }

        let mut inner = Md5::new();
        Digest::update(&mut inner, ipad);
        let mut outer = Md5::new();
        Digest::update(&mut outer, opad);

        Self { inner, outer }
    }

    /// Feeds message bytes into the inner hash.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    /// Consumes the MAC and returns the 16-byte tag.
    pub fn finalize(self) -> Output<Md5> {
        let inner_hash = self.inner.finalize();
        let mut outer = self.outer;
        Digest::update(&mut outer, inner_hash);
        outer.finalize()
    }
}

/// Normalizes a key to exactly one block: long keys are hashed first, short
/// ones are zero-padded.
fn key_block(key: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        let digest = Md5::digest(key);
        block[..digest.len()].copy_from_slice(digest.as_slice());
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

impl OutputSizeUser for HmacMd5 {
    type OutputSize = U16;
}

impl Update for HmacMd5 {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        HmacMd5::update(self, data);
    }
}

impl FixedOutput for HmacMd5 {
    #[inline]
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&HmacMd5::finalize(self));
    }
}

impl MacMarker for HmacMd5 {}

opaque_debug::implement!(HmacMd5);
