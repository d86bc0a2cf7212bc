use crate::errors::WorkflowError;
use crate::step_kind::StepKind;
use form::ValidationEngineConfig;
use serde::{Deserialize, Serialize};

/// Variable con la secuencia de pasos separada por comas.
pub const STEPS_ENV: &str = "TAXFLOW_STEPS";
/// Variable que activa el recorte de espacios antes de validar.
pub const TRIM_INPUT_ENV: &str = "TAXFLOW_TRIM_INPUT";

/// Configuracion del asistente.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
  /// Pasos en orden de navegación.
  pub steps: Vec<StepKind>,
  #[serde(default)]
  pub validation: ValidationEngineConfig,
}

impl Default for WizardConfig {
  fn default() -> Self {
    WizardConfig { steps: vec![StepKind::TaxpayerInfo, StepKind::SpouseInfo],
                   validation: ValidationEngineConfig::default() }
  }
}

impl WizardConfig {
  /// Carga `.env` si existe y aplica `TAXFLOW_STEPS` y `TAXFLOW_TRIM_INPUT`
  /// sobre los valores por defecto.
  pub fn from_env() -> Result<Self, WorkflowError> {
    dotenvy::dotenv().ok();
    Self::from_vars(std::env::var(STEPS_ENV).ok(), std::env::var(TRIM_INPUT_ENV).ok())
  }

  /// Igual que `from_env` pero con los valores ya leídos.
  pub fn from_vars(steps: Option<String>, trim_input: Option<String>) -> Result<Self, WorkflowError> {
    let mut config = WizardConfig::default();
    if let Some(raw) = steps {
      let parsed = raw.split(',')
                      .filter(|s| !s.trim().is_empty())
                      .map(str::parse::<StepKind>)
                      .collect::<Result<Vec<_>, _>>()?;
      if parsed.is_empty() {
        return Err(WorkflowError::Config(format!("{} no contiene pasos", STEPS_ENV)));
      }
      config.steps = parsed;
    }
    if let Some(raw) = trim_input {
      config.validation.trim_input = parse_bool(TRIM_INPUT_ENV, &raw)?;
    }
    Ok(config)
  }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, WorkflowError> {
  match raw.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    other => Err(WorkflowError::Config(format!("{}: valor booleano inválido '{}'", var, other))),
  }
}
