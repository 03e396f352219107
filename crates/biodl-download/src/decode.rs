//! Payload decoding.

use std::io::{self, Read};

use biodl_core::PayloadEncoding;
use flate2::read::MultiGzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Does `bytes` start with the gzip magic number?
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Turn a fetched body into the bytes stored on disk.
///
/// `Gzip` bodies must decompress; `Sniff` bodies are decompressed only when
/// they carry the gzip magic.
pub fn decode(body: Vec<u8>, encoding: PayloadEncoding) -> io::Result<Vec<u8>> {
    match encoding {
        PayloadEncoding::Gzip => gunzip(&body),
        PayloadEncoding::Sniff if is_gzip(&body) => gunzip(&body),
        PayloadEncoding::Plain | PayloadEncoding::Sniff => Ok(body),
    }
}

fn gunzip(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len() * 4);
    MultiGzDecoder::new(bytes).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(bytes).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn magic_detection() {
        assert!(is_gzip(&gzip(b"x")));
        assert!(!is_gzip(b"# STOCKHOLM 1.0"));
        assert!(!is_gzip(&[0x1f]));
    }

    #[test]
    fn plain_passes_through_even_if_compressed() {
        let packed = gzip(b"data");
        let decoded = decode(packed.clone(), PayloadEncoding::Plain).unwrap();
        assert_eq!(decoded, packed);
    }

    #[test]
    fn gzip_is_decompressed() {
        let xml = b"<?xml version=\"1.0\"?><entry dbAccessionId=\"2pah\"/>";
        assert_eq!(decode(gzip(xml), PayloadEncoding::Gzip).unwrap(), xml);
    }

    #[test]
    fn gzip_that_is_not_gzip_fails() {
        let html = b"<html>error</html>".to_vec();
        assert!(decode(html, PayloadEncoding::Gzip).is_err());
    }

    #[test]
    fn truncated_gzip_fails() {
        let mut packed = gzip(b"some longer payload that compresses");
        packed.truncate(packed.len() / 2);
        assert!(decode(packed, PayloadEncoding::Gzip).is_err());
    }

    #[test]
    fn sniff_handles_both() {
        let sth = b"# STOCKHOLM 1.0\n//\n";
        assert_eq!(decode(sth.to_vec(), PayloadEncoding::Sniff).unwrap(), sth);
        assert_eq!(decode(gzip(sth), PayloadEncoding::Sniff).unwrap(), sth);
    }
}
