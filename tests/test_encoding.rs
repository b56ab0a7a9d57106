use depot::http::encoding::compress;
use flate2::read::GzDecoder;
use std::io::Read;

#[test]
fn test_compress_roundtrip() {
    let compressed = compress(b"test encode").unwrap();

    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).unwrap();

    assert_eq!(decompressed, b"test encode".to_vec());
}

#[test]
fn test_compress_emits_gzip_magic_bytes() {
    let compressed = compress(b"abc").unwrap();

    assert!(compressed.len() >= 2);
    assert_eq!(compressed[0], 0x1f);
    assert_eq!(compressed[1], 0x8b);
}

#[test]
fn test_compress_empty_input() {
    let compressed = compress(b"").unwrap();

    // Even an empty payload carries the gzip header and trailer.
    assert!(!compressed.is_empty());

    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).unwrap();
    assert!(decompressed.is_empty());
}

#[test]
fn test_compress_binary_input() {
    let input: Vec<u8> = (0u8..=255).collect();
    let compressed = compress(&input).unwrap();

    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).unwrap();

    assert_eq!(decompressed, input);
}
