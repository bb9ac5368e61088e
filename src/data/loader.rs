use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use num_complex::Complex32;
use tracing::info;

use crate::error::NetError;

/// Bytes per complex64 record: f32 real part then f32 imaginary part.
pub const RECORD_BYTES: usize = 8;

/// Input (X) and output (Y) sample arrays of one data split.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair {
    pub x: Vec<Complex32>,
    pub y: Vec<Complex32>,
}

/// Reads a headerless file of native-endian complex64 samples.
///
/// The sample count is implied by the file size, which must be a multiple
/// of 8 bytes.
pub fn load_complex64<P: AsRef<Path>>(path: P) -> Result<Vec<Complex32>, NetError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    if bytes.len() % RECORD_BYTES != 0 {
        return Err(NetError::TruncatedFile {
            path: path.to_path_buf(),
            len: bytes.len() as u64,
        });
    }

    let samples: Vec<Complex32> = bytes
        .chunks_exact(RECORD_BYTES)
        .map(|record| {
            let re = f32::from_ne_bytes([record[0], record[1], record[2], record[3]]);
            let im = f32::from_ne_bytes([record[4], record[5], record[6], record[7]]);
            Complex32::new(re, im)
        })
        .collect();

    info!(path = %path.display(), samples = samples.len(), "loaded complex64 samples");
    Ok(samples)
}

/// Writes samples in the same raw layout `load_complex64` reads.
pub fn write_complex64<P: AsRef<Path>>(path: P, samples: &[Complex32]) -> Result<(), NetError> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    for sample in samples {
        writer.write_all(&sample.re.to_ne_bytes())?;
        writer.write_all(&sample.im.to_ne_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads the input and output arrays of one split.
pub fn load_pair<P, Q>(input_path: P, output_path: Q) -> Result<SamplePair, NetError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Ok(SamplePair {
        x: load_complex64(input_path)?,
        y: load_complex64(output_path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ferrite-eq-loader-{}-{name}", std::process::id()))
    }

    #[test]
    fn reads_back_written_samples() {
        let path = scratch_path("roundtrip");
        let samples = vec![
            Complex32::new(1.0, 2.0),
            Complex32::new(-0.5, 3.25),
            Complex32::new(f32::MIN_POSITIVE, -7.0),
        ];
        write_complex64(&path, &samples).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 24);
        assert_eq!(load_complex64(&path).unwrap(), samples);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_has_no_samples() {
        let path = scratch_path("empty");
        fs::write(&path, b"").unwrap();
        assert!(load_complex64(&path).unwrap().is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_partial_record() {
        let path = scratch_path("partial");
        fs::write(&path, [0u8; 12]).unwrap();
        match load_complex64(&path) {
            Err(NetError::TruncatedFile { len, .. }) => assert_eq!(len, 12),
            other => panic!("expected TruncatedFile, got {other:?}"),
        }
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = scratch_path("does-not-exist");
        assert!(matches!(load_complex64(&path), Err(NetError::Io(_))));
    }
}
