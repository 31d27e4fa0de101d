//! Export of taps to text files, one value per line.
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::CrossoverDesign;

/// Floating point lowpass taps
pub const LOWPASS_FILE: &str = "lowpass_crossover.txt";
/// Floating point highpass taps
pub const HIGHPASS_FILE: &str = "highpass_crossover.txt";
/// Fixed-point lowpass taps
pub const LOWPASS_FXP_FILE: &str = "lowpass_crossover_fxp.txt";
/// Fixed-point highpass taps
pub const HIGHPASS_FXP_FILE: &str = "highpass_crossover_fxp.txt";

/// Locations of the exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Floating point lowpass taps
    pub lowpass: PathBuf,
    /// Floating point highpass taps
    pub highpass: PathBuf,
    /// Fixed-point lowpass taps
    pub lowpass_fxp: PathBuf,
    /// Fixed-point highpass taps
    pub highpass_fxp: PathBuf,
}

impl OutputPaths {
    /// Output files in `dir`, which has to be an existing directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output path {} is not a directory", dir.display()),
            ));
        }
        Ok(OutputPaths {
            lowpass: dir.join(LOWPASS_FILE),
            highpass: dir.join(HIGHPASS_FILE),
            lowpass_fxp: dir.join(LOWPASS_FXP_FILE),
            highpass_fxp: dir.join(HIGHPASS_FXP_FILE),
        })
    }
}

/// Writes the taps of `design` to `dir` and returns the written files.
///
/// Floating point taps are written unless the design is fixed-point only, fixed-point
/// taps whenever they are present.
pub fn write_design(design: &CrossoverDesign, dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let paths = OutputPaths::in_dir(dir)?;
    let mut written = Vec::new();

    if let Some(q) = design.quantized() {
        write_codes(&paths.lowpass_fxp, &q.lowpass)?;
        write_codes(&paths.highpass_fxp, &q.highpass)?;
        written.push(paths.lowpass_fxp);
        written.push(paths.highpass_fxp);
    }
    if design.export_float() {
        write_taps(&paths.lowpass, design.lowpass())?;
        write_taps(&paths.highpass, design.highpass())?;
        written.push(paths.lowpass);
        written.push(paths.highpass);
    }
    Ok(written)
}

/// Writes floating point `taps` to `path`.
pub fn write_taps(path: &Path, taps: &[f64]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for &t in taps {
        writeln!(w, "{}", format_float(t))?;
    }
    w.flush()
}

/// Writes fixed-point `codes` to `path`.
pub fn write_codes(path: &Path, codes: &[i64]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for c in codes {
        writeln!(w, "{c}")?;
    }
    w.flush()
}

/// Scientific notation with 18 decimals and a signed, at least two digit exponent, e.g.,
/// `-1.562500000000000000e-02`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{value:.18e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_format() {
        assert_eq!(format_float(0.5), "5.000000000000000000e-01");
        assert_eq!(format_float(-0.015625), "-1.562500000000000000e-02");
        // digits of the exact binary value, as printf shows them
        assert_eq!(format_float(-0.0125), "-1.250000000000000069e-02");
        assert_eq!(format_float(0.0), "0.000000000000000000e+00");
        assert_eq!(format_float(1234.0), "1.234000000000000000e+03");
        assert_eq!(format_float(1e-120), "9.999999999999999786e-121");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taps.txt");
        std::fs::write(&file, "").unwrap();
        let e = OutputPaths::in_dir(&file).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
        let e = OutputPaths::in_dir(dir.path().join("missing")).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.txt");
        write_codes(&path, &[16384, -32768, 0]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "16384\n-32768\n0\n");

        write_taps(&path, &[0.5, -0.25]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "5.000000000000000000e-01\n-2.500000000000000000e-01\n"
        );
    }
}
