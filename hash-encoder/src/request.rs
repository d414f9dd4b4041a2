use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use crate::{engine, Algorithm, Error, Result};

/// Largest file accepted by default: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Resource limits applied before any bytes are hashed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Files larger than this many bytes are refused.
    pub max_file_size: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Where the message bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Text, hashed as its UTF-8 encoding.
    Text(String),
    /// Raw bytes, such as piped standard input. Need not be UTF-8.
    Bytes(Vec<u8>),
    /// A file, hashed as its raw contents.
    File(PathBuf),
}

/// One hashing action: what to hash, how, and with which key.
#[derive(Clone)]
pub struct Request {
    pub algorithm: Algorithm,
    pub source: Source,
    /// Secret for the HMAC algorithms, used as UTF-8 bytes.
    pub key: Option<String>,
    pub limits: Limits,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("algorithm", &self.algorithm)
            .field("source", &self.source)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("limits", &self.limits)
            .finish()
    }
}

impl Request {
    /// Creates a request with no key and default limits.
    pub fn new(algorithm: Algorithm, source: Source) -> Self {
        Self {
            algorithm,
            source,
            key: None,
            limits: Limits::default(),
        }
    }

    /// Sets the HMAC key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Replaces the limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates the request, loads the message and returns its hex digest.
    pub fn execute(&self) -> Result<String> {
        match &self.source {
            Source::Text(text) => {
                if text.trim().is_empty() {
                    return Err(Error::EmptyInput);
                }
                let key = self.checked_key()?;
                engine::hash(self.algorithm, text.as_bytes(), key)
            }
            Source::Bytes(bytes) => {
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Err(Error::EmptyInput);
                }
                let key = self.checked_key()?;
                engine::hash(self.algorithm, bytes, key)
            }
            Source::File(path) => {
                let io_err = |source: io::Error| Error::Io {
                    path: path.clone(),
                    source,
                };
                let limit = self.limits.max_file_size;
                let too_large = |size: u64| {
                    log::warn!(
                        "refusing {}: {} bytes exceeds limit of {}",
                        path.display(),
                        size,
                        limit
                    );
                    Error::FileTooLarge { size, limit }
                };

                let file = File::open(path).map_err(io_err)?;
                let size = file.metadata().map_err(io_err)?.len();
                if size > limit {
                    return Err(too_large(size));
                }
                let key = self.checked_key()?;

                // Reported sizes can lie (procfs, growing files), so the
                // read itself stops one byte past the limit.
                log::trace!("reading {} ({} bytes reported)", path.display(), size);
                let mut contents = Vec::new();
                file.take(limit.saturating_add(1))
                    .read_to_end(&mut contents)
                    .map_err(io_err)?;
                if contents.len() as u64 > limit {
                    return Err(too_large(contents.len() as u64));
                }
                engine::hash(self.algorithm, &contents, key)
            }
        }
    }

    /// The key bytes for HMAC algorithms. A blank key counts as missing, but
    /// a usable key is passed through untrimmed.
    fn checked_key(&self) -> Result<Option<&[u8]>> {
        if !self.algorithm.is_hmac() {
            return Ok(None);
        }
        match self.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(Some(key.as_bytes())),
            _ => Err(Error::MissingKey(self.algorithm)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_ten_mebibytes() {
        assert_eq!(Limits::default().max_file_size, 10_485_760);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let request = Request::new(Algorithm::HmacMd5, Source::Text("abc".into())).with_key("  ");
        assert!(matches!(
            request.execute(),
            Err(Error::MissingKey(Algorithm::HmacMd5))
        ));
    }

    #[test]
    fn key_is_not_trimmed() {
        let padded = Request::new(Algorithm::HmacMd5, Source::Text("abc".into())).with_key(" key ");
        let plain = Request::new(Algorithm::HmacMd5, Source::Text("abc".into())).with_key("key");
        assert_ne!(padded.execute().unwrap(), plain.execute().unwrap());
    }

    #[test]
    fn empty_text_is_checked_before_key() {
        let request = Request::new(Algorithm::HmacSha1, Source::Text(" \n\t".into()));
        assert!(matches!(request.execute(), Err(Error::EmptyInput)));
    }

    #[test]
    fn debug_redacts_key() {
        let request = Request::new(Algorithm::HmacMd5, Source::Text("abc".into())).with_key("hunter2");
        let rendered = format!("{:?}", request);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn text_is_hashed_untrimmed() {
        let request = Request::new(Algorithm::Md5, Source::Text(" abc".into()));
        assert_ne!(request.execute().unwrap(), engine::md5_hex("abc"));
    }

    #[test]
    fn blank_bytes_are_empty_input() {
        let request = Request::new(Algorithm::Md5, Source::Bytes(b" \r\n".to_vec()));
        assert!(matches!(request.execute(), Err(Error::EmptyInput)));
    }

    #[test]
    fn bytes_need_not_be_utf8() {
        let request = Request::new(Algorithm::Md5, Source::Bytes(vec![0xff, 0xfe]));
        assert_eq!(request.execute().unwrap(), engine::md5_hex([0xffu8, 0xfe]));
    }

    // procfs files report a size of zero, so only the bounded read catches them.
    #[cfg(target_os = "linux")]
    #[test]
    fn read_is_bounded_when_reported_size_is_wrong() {
        let request = Request::new(Algorithm::Md5, Source::File("/proc/self/maps".into()))
            .with_limits(Limits { max_file_size: 1 });
        match request.execute() {
            Err(Error::FileTooLarge { size, limit }) => {
                assert_eq!(limit, 1);
                assert_eq!(size, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
