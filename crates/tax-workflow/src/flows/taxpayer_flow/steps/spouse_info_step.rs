use crate::errors::WorkflowError;
use crate::flows::taxpayer_flow::{mapper, resolver};
use crate::step::WizardStep;
use crate::step_kind::StepKind;
use form::{ActiveSchema, Draft};
use tax_domain::{StateSlice, TaxesState};

/// Paso de datos del cónyuge (`taxPayer.spouse`). No tiene casillas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpouseInfoStep;

impl WizardStep for SpouseInfoStep {
  fn kind(&self) -> StepKind {
    StepKind::SpouseInfo
  }

  fn initial_draft(&self, state: &TaxesState) -> Draft {
    state.spouse().map(mapper::spouse_draft).unwrap_or_default()
  }

  fn resolve(&self, draft: &Draft) -> Result<ActiveSchema, WorkflowError> {
    Ok(resolver::resolve_spouse(draft)?)
  }

  fn to_slice(&self, draft: &Draft, trim: bool) -> Result<StateSlice, WorkflowError> {
    Ok(StateSlice::Spouse(mapper::to_spouse(draft, trim)?))
  }
}
