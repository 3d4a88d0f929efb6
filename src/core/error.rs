use thiserror::Error;

use crate::battle::unit_type::UnitType;
use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum ArmyError {
    #[error("Unit is not part of this army: {0:?}")]
    UnitNotOwned(UnitId),

    #[error("Not enough gold. Need {required}, have {available}")]
    InsufficientGold { required: u32, available: u32 },

    #[error("{0} cannot be transformed")]
    InvalidTransformation(UnitType),

    #[error("Invalid economy config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArmyError>;
