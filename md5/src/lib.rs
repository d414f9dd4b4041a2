//! An implementation of the [MD5][1] hash function and of [HMAC-MD5][2]
//! on top of it.
//!
//! # Usage
//!
//! ```rust
//! use devtools_md5::{Md5, Digest};
//! use hex_literal::hex;
//!
//! // create a Md5 hasher instance
//! let mut hasher = Md5::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("5eb63bbbe01eeed093cb22bb8f5acdc3"));
//! ```
//!
//! Keyed hashing goes through [`HmacMd5`]:
//!
//! ```rust
//! use hex_literal::hex;
//!
//! let tag = devtools_md5::hmac(b"key", b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(tag[..], hex!("80070713463e7749b90c2dc24911e275"));
//! ```
//!
//! MD5 is broken as a cryptographic hash. It is provided for checksums and
//! compatibility with systems that still require it.
//!
//! [1]: https://en.wikipedia.org/wiki/MD5
//! [2]: https://www.rfc-editor.org/rfc/rfc2104

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::{fmt, slice};
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U16, U64},
    HashMarker, Output,
};

mod compress;
mod consts;
mod hmac;

pub use crate::hmac::HmacMd5;

use crate::compress::compress;

/// Core MD5 hasher state.
#[derive(Clone)]
pub struct Md5Core {
    block_len: u64,
    state: [u32; 4],
}

impl HashMarker for Md5Core {}

impl BlockSizeUser for Md5Core {
    type BlockSize = U64;
}

impl BufferKindUser for Md5Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md5Core {
    type OutputSize = U16;
}

impl UpdateCore for Md5Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        compress(&mut self.state, blocks)
    }
}

impl FixedOutputCore for Md5Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len = self
            .block_len
            .wrapping_mul(Self::BlockSize::U64)
            .wrapping_add(buffer.get_pos() as u64)
            .wrapping_mul(8);
        let mut s = self.state;
        buffer.len64_padding_le(bit_len, |b| compress(&mut s, slice::from_ref(b)));
        for (chunk, v) in out.chunks_exact_mut(4).zip(s.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl Default for Md5Core {
    #[inline]
    fn default() -> Self {
        Self {
            block_len: 0,
            state: consts::S0,
        }
    }
}

impl Reset for Md5Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Md5Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md5")
    }
}

opaque_debug::implement!(Md5Core);

/// MD5 hasher state.
pub type Md5 = CoreWrapper<Md5Core>;

/// Computes the MD5 digest of `data` in one call.
#[inline]
pub fn compute(data: impl AsRef<[u8]>) -> Output<Md5> {
    Md5::digest(data)
}

/// Computes the HMAC-MD5 tag of `data` under `key` in one call.
#[inline]
pub fn hmac(key: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> Output<Md5> {
    let mut mac = HmacMd5::new(key.as_ref());
    mac.update(data.as_ref());
    mac.finalize()
}
