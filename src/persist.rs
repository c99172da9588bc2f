//! Filesystem persistence of a constructed code: matrices, per-side
//! eigenvalues, and a flat append-only run log, laid out the way the
//! original's `save_code`/`save_graph` did.
//!
//! Only compiled under the `persist` feature so the core library carries no
//! filesystem dependency.

use crate::config::ConstructionParams;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `matrix` as whitespace-separated integers, one row per line,
/// matching `numpy.savetxt(..., fmt="%i")`.
fn write_dense_matrix(path: &Path, matrix: &[Vec<u64>]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for row in matrix {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(file, "{line}")?;
    }
    Ok(())
}

/// Write one generator element per line as its raw coordinates.
fn write_generator_list(path: &Path, generators: &[Vec<u64>]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for g in generators {
        let line = g
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(file, "{line}")?;
    }
    Ok(())
}

/// Write a sorted eigenvalue spectrum, one value per line.
fn write_eigenvalues(path: &Path, eigenvalues: &[f64]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for v in eigenvalues {
        writeln!(file, "{v}")?;
    }
    Ok(())
}

/// Everything about a single constructed code worth writing to disk.
pub struct CodeArtifact<'a> {
    pub name: String,
    pub generator: &'a [Vec<u64>],
    pub parity: &'a [Vec<u64>],
    pub generators_a: &'a [Vec<u64>],
    pub generators_b: &'a [Vec<u64>],
    pub eigenvalues_a: &'a [f64],
    pub eigenvalues_b: &'a [f64],
    pub params: &'a ConstructionParams,
    pub k: usize,
    pub n: usize,
}

/// Write a code artifact under `root/<name>/`, creating the directory if
/// needed, and append a summary line to `root/log.txt`.
pub fn save_code(root: &Path, artifact: &CodeArtifact, kind: &str, timestamp: &str) -> Result<PathBuf> {
    let dir = root.join(&artifact.name);
    fs::create_dir_all(&dir)?;

    write_dense_matrix(&dir.join("parity_check.txt"), artifact.parity)?;
    write_dense_matrix(&dir.join("generator_matrix.txt"), artifact.generator)?;
    write_generator_list(&dir.join("generators_a.txt"), artifact.generators_a)?;
    write_generator_list(&dir.join("generators_b.txt"), artifact.generators_b)?;
    write_eigenvalues(&dir.join("eigenvalues_a.txt"), artifact.eigenvalues_a)?;
    write_eigenvalues(&dir.join("eigenvalues_b.txt"), artifact.eigenvalues_b)?;

    let metadata = serde_json::to_string_pretty(artifact.params)
        .map_err(|e| crate::error::CayleyCodeError::SerializationError(e.to_string()))?;
    fs::write(dir.join("params.json"), metadata)?;

    let rate = artifact.k as f64 / artifact.n as f64;
    let mut log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(root.join("log.txt"))?;
    writeln!(
        log_file,
        "{kind}\t{}\t{}\t{}\t{}\t{}\t{timestamp}",
        artifact.params.prime, artifact.k, artifact.n, rate, artifact.name
    )?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupDescriptor;
    use crate::config::SmallCodeDescriptor;
    use tempfile::tempdir;

    #[test]
    fn writing_an_artifact_creates_the_expected_files() {
        let dir = tempdir().unwrap();
        let params = ConstructionParams {
            prime: 7,
            group: GroupDescriptor::Fqm { q: 7, m: 1 },
            generator_count_a: 2,
            generator_count_b: 2,
            n_order_two_a: 0,
            n_order_two_b: 0,
            code_a: SmallCodeDescriptor::ReedSolomon { n: 4, k: 2 },
            code_b: SmallCodeDescriptor::ReedSolomon { n: 4, k: 2 },
            enforce_tnc: true,
            tnc_resample_trials: 100,
        };
        let artifact = CodeArtifact {
            name: "test_code".to_string(),
            generator: &[vec![1, 0], vec![0, 1]],
            parity: &[vec![1, 1]],
            generators_a: &[vec![1], vec![6]],
            generators_b: &[vec![2], vec![5]],
            eigenvalues_a: &[-1.0, 1.0],
            eigenvalues_b: &[-1.0, 1.0],
            params: &params,
            k: 2,
            n: 2,
        };
        let written = save_code(dir.path(), &artifact, "c3ltc", "2026-01-01").unwrap();
        assert!(written.join("parity_check.txt").exists());
        assert!(written.join("generator_matrix.txt").exists());
        assert!(dir.path().join("log.txt").exists());
    }
}
