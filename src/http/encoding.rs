use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// Compresses `data` into a standard gzip container at the default
/// compression level.
pub fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
