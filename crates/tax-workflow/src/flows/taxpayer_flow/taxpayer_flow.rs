// taxpayer_flow.rs
//
// Asistente completo de datos personales: posee el paginador, los pasos en
// orden y el controlador del paso activo. Cada paso nuevo arranca con un
// borrador prellenado desde el almacén.
use crate::engine::{CommitOutcome, NavAffordances, Pager, StepAdvance, StepCommitController};
use crate::errors::WorkflowError;
use crate::step::WizardStep;
use crate::step_kind::StepKind;
use form::{ValidationEngine, ValidationEngineConfig};
use log::info;
use std::sync::Arc;
use tax_domain::TaxStore;

/// Sumidero de avance para el último paso: marca el asistente como
/// terminado en lugar de mover el paginador.
#[derive(Debug, Default)]
struct CompletionSink {
  completed: bool,
}

impl StepAdvance for CompletionSink {
  fn advance(&mut self) -> Result<(), WorkflowError> {
    self.completed = true;
    Ok(())
  }
}

pub struct TaxpayerWizard {
  store: Arc<dyn TaxStore>,
  steps: Vec<Arc<dyn WizardStep>>,
  pager: Pager,
  validation: ValidationEngineConfig,
  controller: StepCommitController,
  completed: bool,
}

impl TaxpayerWizard {
  /// Construye el asistente en el primer paso. `steps` no puede estar vacío.
  pub fn new(store: Arc<dyn TaxStore>,
             steps: Vec<Arc<dyn WizardStep>>,
             validation: ValidationEngineConfig)
             -> Result<Self, WorkflowError> {
    let pager = Pager::new(steps.iter().map(|s| s.kind()).collect())?;
    let controller = StepCommitController::new(steps[0].clone(), store.clone(), ValidationEngine::new(validation.clone()))?;
    Ok(TaxpayerWizard { store, steps, pager, validation, controller, completed: false })
  }

  fn rebuild_controller(&mut self) -> Result<(), WorkflowError> {
    let step = self.steps[self.pager.position()].clone();
    self.controller = StepCommitController::new(step, self.store.clone(), ValidationEngine::new(self.validation.clone()))?;
    Ok(())
  }

  /// Confirma el paso activo. Tras un commit pasa al siguiente paso, o marca
  /// el asistente como completado si era el último. Una vez completado
  /// devuelve `AlreadyCompleted` sin escribir; volver a un paso anterior lo
  /// reabre.
  pub fn submit(&mut self) -> Result<CommitOutcome, WorkflowError> {
    if self.completed {
      log::warn!("envío ignorado: el asistente ya está completado");
      return Err(WorkflowError::AlreadyCompleted);
    }
    let outcome = if self.pager.is_last() {
      let mut sink = CompletionSink::default();
      let outcome = self.controller.submit(&mut sink)?;
      if sink.completed {
        info!("asistente completado");
        self.completed = true;
      }
      outcome
    } else {
      let outcome = self.controller.submit(&mut self.pager)?;
      if outcome.is_committed() {
        info!("paso {} de {}: {}", self.pager.position() + 1, self.pager.len(), self.pager.current());
        self.rebuild_controller()?;
      }
      outcome
    };
    Ok(outcome)
  }

  /// Vuelve al paso anterior sin validar ni confirmar. El borrador del paso
  /// actual se descarta; el anterior se prellena con lo que haya en el
  /// almacén.
  pub fn back(&mut self) -> Result<(), WorkflowError> {
    if self.pager.is_first() {
      return Ok(());
    }
    self.pager.retreat();
    self.completed = false;
    info!("retroceso al paso {}", self.pager.current());
    self.rebuild_controller()
  }

  pub fn current_kind(&self) -> StepKind {
    self.pager.current()
  }

  pub fn controller(&self) -> &StepCommitController {
    &self.controller
  }

  pub fn controller_mut(&mut self) -> &mut StepCommitController {
    &mut self.controller
  }

  pub fn nav_affordances(&self) -> NavAffordances {
    self.pager.nav_affordances()
  }

  pub fn store(&self) -> &Arc<dyn TaxStore> {
    &self.store
  }

  pub fn is_completed(&self) -> bool {
    self.completed
  }
}
