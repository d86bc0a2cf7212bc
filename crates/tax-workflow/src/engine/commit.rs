// commit.rs
//
// Controlador de confirmación de un paso: resolver, validar, mapear, escribir
// en el almacén y avanzar, en ese orden y dentro de la misma llamada.
use super::pager::StepAdvance;
use crate::errors::WorkflowError;
use crate::step::WizardStep;
use form::{ActiveSchema, Draft, FieldError, ValidationEngine, ValidationResult};
use log::{debug, error, info, warn};
use std::sync::Arc;
use tax_domain::{CommitReceipt, TaxStore};

/// Estado del controlador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitState {
  Editing,
  Validating,
  Committed(CommitReceipt),
  RejectedWithErrors,
}

/// Resultado de un intento de confirmación que llegó a validarse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
  Committed(CommitReceipt),
  Rejected(ValidationResult),
}

impl CommitOutcome {
  pub fn is_committed(&self) -> bool {
    matches!(self, CommitOutcome::Committed(_))
  }
}

pub struct StepCommitController {
  step: Arc<dyn WizardStep>,
  store: Arc<dyn TaxStore>,
  engine: ValidationEngine,
  draft: Draft,
  schema: ActiveSchema,
  state: CommitState,
  last_result: Option<ValidationResult>,
}

impl StepCommitController {
  /// Crea el controlador con el borrador prellenado desde el almacén.
  pub fn new(step: Arc<dyn WizardStep>,
             store: Arc<dyn TaxStore>,
             engine: ValidationEngine)
             -> Result<Self, WorkflowError> {
    let snapshot = store.snapshot()?;
    let draft = step.initial_draft(&snapshot);
    Self::with_draft(step, store, engine, draft)
  }

  /// Crea el controlador con un borrador dado.
  pub fn with_draft(step: Arc<dyn WizardStep>,
                    store: Arc<dyn TaxStore>,
                    engine: ValidationEngine,
                    draft: Draft)
                    -> Result<Self, WorkflowError> {
    let schema = step.resolve(&draft)?;
    Ok(StepCommitController { step,
                              store,
                              engine,
                              draft,
                              schema,
                              state: CommitState::Editing,
                              last_result: None })
  }

  pub fn step(&self) -> &Arc<dyn WizardStep> {
    &self.step
  }

  pub fn draft(&self) -> &Draft {
    &self.draft
  }

  pub fn active_schema(&self) -> &ActiveSchema {
    &self.schema
  }

  pub fn state(&self) -> &CommitState {
    &self.state
  }

  pub fn last_result(&self) -> Option<&ValidationResult> {
    self.last_result.as_ref()
  }

  /// Error del último intento para `key`, si lo hubo.
  pub fn field_error(&self, key: &str) -> Option<&FieldError> {
    self.last_result.as_ref().and_then(|r| r.error(key))
  }

  pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<(), WorkflowError> {
    self.draft.set_text(key, value);
    self.after_edit(key)
  }

  pub fn set_flag(&mut self, key: &str, value: bool) -> Result<(), WorkflowError> {
    self.draft.set_flag(key, value);
    self.after_edit(key)
  }

  // Cualquier edición vuelve a `Editing`; las casillas además recalculan el
  // esquema antes de la siguiente lectura.
  fn after_edit(&mut self, key: &str) -> Result<(), WorkflowError> {
    if self.state != CommitState::Editing {
      self.state = CommitState::Editing;
    }
    if self.step.toggles().iter().any(|t| *t == key) {
      self.schema = self.step.resolve(&self.draft)?;
      debug!("casilla '{}' cambiada en {}: {} campos activos", key, self.step.name(), self.schema.len());
    }
    Ok(())
  }

  /// Intenta confirmar el paso.
  ///
  /// Con errores de captura devuelve `Ok(CommitOutcome::Rejected)` sin tocar
  /// el almacén ni llamar a `advance`. Si todo es válido escribe la porción
  /// del paso una sola vez y llama a `advance` exactamente una vez.
  pub fn submit(&mut self, advance: &mut dyn StepAdvance) -> Result<CommitOutcome, WorkflowError> {
    self.state = CommitState::Validating;
    let attempt = self.step.resolve(&self.draft).and_then(|schema| {
                                                  let result = self.engine.validate(&self.draft, &schema)?;
                                                  Ok((schema, result))
                                                });
    let (schema, result) = match attempt {
      Ok(pair) => pair,
      Err(e) => {
        self.state = CommitState::Editing;
        return Err(e);
      }
    };
    self.schema = schema;
    self.last_result = Some(result.clone());

    if !result.is_valid() {
      warn!("{} rechazado con {} errores", self.step.name(), result.error_count());
      self.state = CommitState::RejectedWithErrors;
      return Ok(CommitOutcome::Rejected(result));
    }

    let trim = self.engine.config().trim_input;
    let receipt = match self.step.to_slice(&self.draft, trim).and_then(|slice| Ok(self.store.write(slice)?)) {
      Ok(receipt) => receipt,
      Err(e) => {
        error!("no se pudo confirmar {}: {}", self.step.name(), e);
        self.state = CommitState::Editing;
        return Err(e);
      }
    };
    info!("{} confirmado (revision {})", self.step.name(), receipt.revision);
    self.state = CommitState::Committed(receipt.clone());

    if let Err(e) = advance.advance() {
      error!("commit {} guardado pero el avance falló: {}", receipt.id, e);
      return Err(e);
    }
    Ok(CommitOutcome::Committed(receipt))
  }
}
