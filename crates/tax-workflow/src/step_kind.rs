use crate::errors::WorkflowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enum para identificar los pasos que sabe construir el crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    TaxpayerInfo,
    SpouseInfo,
}

impl StepKind {
    /// Título mostrado en la cabecera del paso.
    pub fn title(&self) -> &'static str {
        match self {
            StepKind::TaxpayerInfo => "Primary Taxpayer Information",
            StepKind::SpouseInfo => "Spouse Information",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::TaxpayerInfo => "taxpayer-info",
            StepKind::SpouseInfo => "spouse-info",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StepKind {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "taxpayer-info" | "taxpayer" => Ok(StepKind::TaxpayerInfo),
            "spouse-info" | "spouse" => Ok(StepKind::SpouseInfo),
            other => Err(WorkflowError::Config(format!("paso desconocido: '{}'", other))),
        }
    }
}
