use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ArtifactError, ArtifactKind};

pub fn save_artifact<T: Serialize>(
    path: &Path,
    kind: ArtifactKind,
    artifact: &T,
) -> Result<(), ArtifactError> {
    let data = bincode::serialize(artifact).map_err(|source| ArtifactError::Encode { kind, source })?;
    std::fs::write(path, data).map_err(|source| ArtifactError::Write {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_artifact<T: DeserializeOwned>(path: &Path, kind: ArtifactKind) -> Result<T, ArtifactError> {
    let data = std::fs::read(path).map_err(|source| ArtifactError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    bincode::deserialize(&data).map_err(|source| ArtifactError::Decode {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
