use crate::config::WizardConfig;
use crate::flows::taxpayer_flow::steps::{SpouseInfoStep, TaxpayerInfoStep};
use crate::flows::TaxpayerWizard;
use crate::step::WizardStep;
use crate::step_kind::StepKind;
use crate::WorkflowError;
use std::sync::Arc;
use tax_domain::{InMemoryTaxStore, TaxStore};

/// Fábrica de asistentes.
///
/// Traduce la secuencia de `StepKind` de la configuración en pasos concretos
/// y devuelve un `TaxpayerWizard` listo para usarse sobre el almacén dado.
pub struct WizardFactory;

impl WizardFactory {
  /// Paso concreto para un tipo de paso.
  pub fn step_for(kind: StepKind) -> Arc<dyn WizardStep> {
    match kind {
      StepKind::TaxpayerInfo => Arc::new(TaxpayerInfoStep),
      StepKind::SpouseInfo => Arc::new(SpouseInfoStep),
    }
  }

  pub fn steps_for(kinds: &[StepKind]) -> Vec<Arc<dyn WizardStep>> {
    kinds.iter().copied().map(Self::step_for).collect()
  }

  pub fn create(config: &WizardConfig, store: Arc<dyn TaxStore>) -> Result<TaxpayerWizard, WorkflowError> {
    log::debug!("creando asistente con pasos {:?}", config.steps);
    TaxpayerWizard::new(store, Self::steps_for(&config.steps), config.validation.clone())
  }

  /// Atajo para ejemplos y pruebas: asistente sobre un almacén en memoria
  /// vacío.
  pub fn in_memory(config: &WizardConfig) -> Result<TaxpayerWizard, WorkflowError> {
    Self::create(config, Arc::new(InMemoryTaxStore::new()))
  }
}
