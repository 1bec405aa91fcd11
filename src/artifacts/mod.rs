use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::encoding::EncoderBank;
use crate::model::{RegressionModel, Regressor};
use crate::scaling::Scaler;
use crate::shared_interface::{CATEGORICAL_FEATURES, FEATURE_COLUMNS, NUMERICAL_FEATURES};

pub const ENCODERS_FILE: &str = "encoder.bin";
pub const SCALER_FILE: &str = "scaler.bin";
pub const MODEL_FILE: &str = "best_regression_model.bin";

#[derive(Debug)]
pub enum ArtifactError {
    NotFound(PathBuf),
    IsDirectory(PathBuf),
    IO(PathBuf, std::io::Error),
    Codec(PathBuf, bincode::Error),
    Schema(String),
}

impl std::error::Error for ArtifactError {}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::NotFound(p) => write!(f, "Could not find artifact \"{}\".", p.display()),
            ArtifactError::IsDirectory(p) => write!(f, "Artifact \"{}\" is a directory.", p.display()),
            ArtifactError::IO(p, err) => write!(f, "I/O error for {}: {}.", p.display(), err),
            ArtifactError::Codec(p, err) => write!(f, "Could not read or write artifact \"{}\": {}.", p.display(), err),
            ArtifactError::Schema(msg) => write!(f, "Artifacts do not match the feature schema: {}.", msg),
        }
    }
}

/// Locations of the three fitted artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub encoders: PathBuf,
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        ArtifactPaths {
            encoders: dir.join(ENCODERS_FILE),
            scaler: dir.join(SCALER_FILE),
            model: dir.join(MODEL_FILE),
        }
    }
}

/// Fitted encoders, scaler and model. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts<M = RegressionModel> {
    pub encoders: EncoderBank,
    pub scaler: Scaler,
    pub model: M,
}

impl Artifacts<RegressionModel> {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let encoders: EncoderBank = read_artifact(&paths.encoders)?;
        log::debug!("Loaded encoders for {:?} from {}", encoders.feature_names(), paths.encoders.display());

        let scaler: Scaler = read_artifact(&paths.scaler)?;
        log::debug!("Loaded scaler with {} features from {}", scaler.n_features(), paths.scaler.display());

        let model: RegressionModel = read_artifact(&paths.model)?;
        log::debug!("Loaded {} from {}", model.describe(), paths.model.display());

        Ok(Artifacts { encoders, scaler, model })
    }

    pub fn save(&self, paths: &ArtifactPaths) -> Result<(), ArtifactError> {
        write_artifact(&paths.encoders, &self.encoders)?;
        write_artifact(&paths.scaler, &self.scaler)?;
        write_artifact(&paths.model, &self.model)
    }
}

impl<M: Regressor> Artifacts<M> {
    /// Startup check that the artifacts agree with the feature schema.
    pub fn check_schema(&self) -> Result<(), ArtifactError> {
        for feature in CATEGORICAL_FEATURES.iter() {
            if !self.encoders.contains_feature(feature) {
                return Err(ArtifactError::Schema(format!("no encoder for column '{}'", feature)));
            }
        }

        if !self.scaler.is_consistent() {
            return Err(ArtifactError::Schema("scaler parameter lengths differ".to_string()));
        }
        if self.scaler.n_features() != NUMERICAL_FEATURES.len() {
            return Err(ArtifactError::Schema(format!(
                "scaler has {} features, expected {}", self.scaler.n_features(), NUMERICAL_FEATURES.len()
            )));
        }

        match self.model.expected_features() {
            Some(n) if n != FEATURE_COLUMNS.len() => Err(ArtifactError::Schema(format!(
                "model expects {} features, expected {}", n, FEATURE_COLUMNS.len()
            ))),
            _ => Ok(()),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_owned()));
    } else if path.is_dir() {
        return Err(ArtifactError::IsDirectory(path.to_owned()));
    }

    let file = File::open(path).map_err(|e| ArtifactError::IO(path.to_owned(), e))?;
    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    bincode::deserialize_from(reader).map_err(|e| ArtifactError::Codec(path.to_owned(), e))
}

fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let file = File::create(path).map_err(|e| ArtifactError::IO(path.to_owned(), e))?;
    let io_err = |e| ArtifactError::IO(path.to_owned(), e);

    if is_gzip(path) {
        let mut gz_writer = GzEncoder::new(BufWriter::new(file), Compression::default());
        bincode::serialize_into(&mut gz_writer, value).map_err(|e| ArtifactError::Codec(path.to_owned(), e))?;
        gz_writer.finish().map_err(io_err)?.flush().map_err(io_err)
    } else {
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, value).map_err(|e| ArtifactError::Codec(path.to_owned(), e))?;
        writer.flush().map_err(io_err)
    }
}
