use crate::errors::WorkflowError;
use crate::flows::taxpayer_flow::field_rules::keys;
use crate::flows::taxpayer_flow::{mapper, resolver};
use crate::step::WizardStep;
use crate::step_kind::StepKind;
use form::{ActiveSchema, Draft};
use tax_domain::{StateSlice, TaxesState};

/// Paso de datos del contribuyente principal (`taxPayer.primaryPerson`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxpayerInfoStep;

const TOGGLES: &[&str] = &[keys::IS_FOREIGN_COUNTRY, keys::IS_TAXPAYER_DEPENDENT];

impl WizardStep for TaxpayerInfoStep {
  fn kind(&self) -> StepKind {
    StepKind::TaxpayerInfo
  }

  fn toggles(&self) -> &'static [&'static str] {
    TOGGLES
  }

  fn initial_draft(&self, state: &TaxesState) -> Draft {
    state.primary_person().map(mapper::primary_person_draft).unwrap_or_default()
  }

  fn resolve(&self, draft: &Draft) -> Result<ActiveSchema, WorkflowError> {
    Ok(resolver::resolve(draft, resolver::TaxPayerToggles::from_draft(draft))?)
  }

  fn to_slice(&self, draft: &Draft, trim: bool) -> Result<StateSlice, WorkflowError> {
    Ok(StateSlice::PrimaryPerson(mapper::to_primary_person(draft, trim)?))
  }
}
