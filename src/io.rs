//! Plain-text persistence.
//!
//! Each matrix is a directory with one whitespace-separated array per file:
//!
//! | format | files |
//! |---|---|
//! | [`DenseMatrix`] | `data.txt`: `n`, then `n * n` values row by row |
//! | [`SkylineMatrix`] | `ia.txt`, `di.txt`, `al.txt`, `au.txt` |
//! | [`RowColumnSymMatrix`] | `ia.txt`, `ja.txt`, `di.txt`, `al.txt` |
//!
//! Values are written with `Display`, which round-trips `f32`/`f64` exactly.
//! Reading checks token syntax, array lengths and the offset layout, so a
//! damaged file is reported instead of producing an out-of-bounds panic later.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::dense::DenseMatrix;
use crate::skyline::SkylineMatrix;
use crate::sym::RowColumnSymMatrix;
use crate::traits::Scalar;

/// Errors from reading or writing persisted matrices.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}: cannot parse {token:?}", .path.display())]
    Parse { path: PathBuf, token: String },

    #[error("{}: expected {expected} values, found {found}", .path.display())]
    Length {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{}: {message}", .path.display())]
    Layout { path: PathBuf, message: String },
}

/// Save to and load from a directory of text files.
pub trait Persist: Sized {
    /// Write into `dir`, creating it if needed. Existing files are replaced.
    fn write_to(&self, dir: &Path) -> Result<(), PersistError>;

    /// Read a matrix previously written with [`write_to`](Persist::write_to).
    fn read_from(dir: &Path) -> Result<Self, PersistError>;
}

// ── DenseMatrix ─────────────────────────────────────────────────────

impl<T> Persist for DenseMatrix<T>
where
    T: Scalar + Display + FromStr,
{
    fn write_to(&self, dir: &Path) -> Result<(), PersistError> {
        let path = prepare(dir, "data.txt")?;
        let n = self.dims();
        write_file(&path, |w| {
            writeln!(w, "{}", n)?;
            for i in 0..n {
                write_line(w, self.row_slice(i))?;
            }
            Ok(())
        })?;
        debug!("wrote dense matrix (n = {}) to {}", n, dir.display());
        Ok(())
    }

    fn read_from(dir: &Path) -> Result<Self, PersistError> {
        let path = dir.join("data.txt");
        let text = read_file(&path)?;
        let mut tokens = text.split_whitespace();
        let n: usize = match tokens.next() {
            Some(tok) => parse_token(&path, tok)?,
            None => return Err(length_error(&path, 1, 0)),
        };
        let data = tokens
            .map(|tok| parse_token(&path, tok))
            .collect::<Result<Vec<T>, _>>()?;
        let len = n
            .checked_mul(n)
            .ok_or_else(|| layout_error(&path, format!("dimension {} is too large", n)))?;
        expect_len(&path, len, data.len())?;
        debug!("read dense matrix (n = {}) from {}", n, dir.display());
        Ok(DenseMatrix::from_vec(n, data))
    }
}

// ── SkylineMatrix ───────────────────────────────────────────────────

impl<T> Persist for SkylineMatrix<T>
where
    T: Scalar + Display + FromStr,
{
    fn write_to(&self, dir: &Path) -> Result<(), PersistError> {
        write_array(&prepare(dir, "ia.txt")?, self.ia())?;
        write_array(&prepare(dir, "di.txt")?, self.di())?;
        write_array(&prepare(dir, "al.txt")?, self.al())?;
        write_array(&prepare(dir, "au.txt")?, self.au())?;
        debug!(
            "wrote skyline matrix (n = {}, envelope = {}) to {}",
            self.dims(),
            self.envelope_len(),
            dir.display()
        );
        Ok(())
    }

    fn read_from(dir: &Path) -> Result<Self, PersistError> {
        let di: Vec<T> = read_array(&dir.join("di.txt"))?;
        let n = di.len();

        let ia_path = dir.join("ia.txt");
        let ia: Vec<usize> = read_array(&ia_path)?;
        check_offsets(&ia_path, &ia, n)?;
        for i in 0..n {
            if ia[i + 1] - ia[i] > i {
                return Err(layout_error(
                    &ia_path,
                    format!("envelope of row {} reaches past column 0", i),
                ));
            }
        }

        let al_path = dir.join("al.txt");
        let al: Vec<T> = read_array(&al_path)?;
        expect_len(&al_path, ia[n], al.len())?;
        let au_path = dir.join("au.txt");
        let au: Vec<T> = read_array(&au_path)?;
        expect_len(&au_path, ia[n], au.len())?;

        debug!("read skyline matrix (n = {}) from {}", n, dir.display());
        Ok(SkylineMatrix::from_parts(ia, di, al, au))
    }
}

// ── RowColumnSymMatrix ──────────────────────────────────────────────

impl<T> Persist for RowColumnSymMatrix<T>
where
    T: Scalar + Display + FromStr,
{
    fn write_to(&self, dir: &Path) -> Result<(), PersistError> {
        write_array(&prepare(dir, "ia.txt")?, self.ia())?;
        write_array(&prepare(dir, "ja.txt")?, self.ja())?;
        write_array(&prepare(dir, "di.txt")?, self.di())?;
        write_array(&prepare(dir, "al.txt")?, self.al())?;
        debug!(
            "wrote symmetric matrix (n = {}, nnz = {}) to {}",
            self.dims(),
            self.nnz(),
            dir.display()
        );
        Ok(())
    }

    fn read_from(dir: &Path) -> Result<Self, PersistError> {
        let di: Vec<T> = read_array(&dir.join("di.txt"))?;
        let n = di.len();

        let ia_path = dir.join("ia.txt");
        let ia: Vec<usize> = read_array(&ia_path)?;
        check_offsets(&ia_path, &ia, n)?;

        let ja_path = dir.join("ja.txt");
        let ja: Vec<usize> = read_array(&ja_path)?;
        expect_len(&ja_path, ia[n], ja.len())?;
        for i in 0..n {
            if let Some(&c) = ja[ia[i]..ia[i + 1]].iter().find(|&&c| c >= i) {
                return Err(layout_error(
                    &ja_path,
                    format!("row {} stores column {} on or above the diagonal", i, c),
                ));
            }
        }

        let al_path = dir.join("al.txt");
        let al: Vec<T> = read_array(&al_path)?;
        expect_len(&al_path, ia[n], al.len())?;

        debug!("read symmetric matrix (n = {}) from {}", n, dir.display());
        Ok(RowColumnSymMatrix::from_parts(ia, ja, di, al))
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn io_error(path: &Path) -> impl Fn(io::Error) -> PersistError + '_ {
    move |source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn length_error(path: &Path, expected: usize, found: usize) -> PersistError {
    PersistError::Length {
        path: path.to_path_buf(),
        expected,
        found,
    }
}

fn layout_error(path: &Path, message: String) -> PersistError {
    PersistError::Layout {
        path: path.to_path_buf(),
        message,
    }
}

/// Create `dir` if missing and return the path of `name` inside it.
fn prepare(dir: &Path, name: &str) -> Result<PathBuf, PersistError> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    Ok(dir.join(name))
}

fn write_file(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), PersistError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut w = BufWriter::new(file);
    body(&mut w).and_then(|()| w.flush()).map_err(io_error(path))
}

fn write_line<T: Display>(w: &mut impl Write, values: &[T]) -> io::Result<()> {
    for (k, v) in values.iter().enumerate() {
        if k > 0 {
            w.write_all(b" ")?;
        }
        write!(w, "{}", v)?;
    }
    writeln!(w)
}

fn write_array<T: Display>(path: &Path, values: &[T]) -> Result<(), PersistError> {
    write_file(path, |w| write_line(w, values))
}

fn read_file(path: &Path) -> Result<String, PersistError> {
    fs::read_to_string(path).map_err(io_error(path))
}

fn parse_token<T: FromStr>(path: &Path, token: &str) -> Result<T, PersistError> {
    token.parse().map_err(|_| PersistError::Parse {
        path: path.to_path_buf(),
        token: token.to_string(),
    })
}

fn read_array<T: FromStr>(path: &Path) -> Result<Vec<T>, PersistError> {
    read_file(path)?
        .split_whitespace()
        .map(|tok| parse_token(path, tok))
        .collect()
}

fn expect_len(path: &Path, expected: usize, found: usize) -> Result<(), PersistError> {
    if expected == found {
        Ok(())
    } else {
        Err(length_error(path, expected, found))
    }
}

/// `ia` must have `n + 1` entries, start at 0 and never decrease.
fn check_offsets(path: &Path, ia: &[usize], n: usize) -> Result<(), PersistError> {
    expect_len(path, n + 1, ia.len())?;
    if ia[0] != 0 {
        return Err(layout_error(path, format!("first offset is {}, not 0", ia[0])));
    }
    if let Some(i) = ia.windows(2).position(|w| w[0] > w[1]) {
        return Err(layout_error(path, format!("offsets decrease after row {}", i)));
    }
    Ok(())
}
