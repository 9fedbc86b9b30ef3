use thiserror::Error;

use crate::catalog::MaterialId;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate material id {id} in catalog snapshot")]
    DuplicateMaterial { id: MaterialId },
}
