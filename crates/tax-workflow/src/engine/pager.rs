// pager.rs
//
// Navegación entre pasos. El paginador sólo conoce posiciones: los datos de
// cada paso viven en el almacén y el controlador de confirmación decide
// cuándo se puede avanzar.
use crate::errors::WorkflowError;
use crate::step_kind::StepKind;
use serde::Serialize;

/// Avance de paso que el controlador de confirmación invoca tras una
/// escritura exitosa.
pub trait StepAdvance {
  fn advance(&mut self) -> Result<(), WorkflowError>;
}

/// Controles visibles para retroceder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorStepControls {
  pub previous: Option<StepKind>,
  pub can_retreat: bool,
}

/// Lo que la capa de presentación necesita para dibujar la navegación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavAffordances {
  /// Posición actual, empezando en cero.
  pub position: usize,
  pub total: usize,
  pub next: Option<StepKind>,
  pub prior_step_controls: PriorStepControls,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
  steps: Vec<StepKind>,
  position: usize,
}

impl Pager {
  pub fn new(steps: Vec<StepKind>) -> Result<Self, WorkflowError> {
    if steps.is_empty() {
      return Err(WorkflowError::Config("la secuencia de pasos está vacía".into()));
    }
    Ok(Pager { steps, position: 0 })
  }

  pub fn position(&self) -> usize {
    self.position
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn steps(&self) -> &[StepKind] {
    &self.steps
  }

  pub fn current(&self) -> StepKind {
    self.steps[self.position]
  }

  pub fn is_first(&self) -> bool {
    self.position == 0
  }

  pub fn is_last(&self) -> bool {
    self.position + 1 == self.steps.len()
  }

  /// Retrocede un paso; en el primero no hace nada.
  pub fn retreat(&mut self) {
    self.position = self.position.saturating_sub(1);
  }

  pub fn nav_affordances(&self) -> NavAffordances {
    let previous = if self.is_first() { None } else { Some(self.steps[self.position - 1]) };
    NavAffordances { position: self.position,
                     total: self.steps.len(),
                     next: self.steps.get(self.position + 1).copied(),
                     prior_step_controls: PriorStepControls { previous, can_retreat: previous.is_some() } }
  }
}

impl StepAdvance for Pager {
  /// Avanza al siguiente paso. En el último devuelve `OutOfRange` y la
  /// posición no cambia.
  fn advance(&mut self) -> Result<(), WorkflowError> {
    if self.is_last() {
      return Err(WorkflowError::OutOfRange { position: self.position + 1, len: self.steps.len() });
    }
    self.position += 1;
    log::debug!("avance al paso {} ({})", self.position, self.current());
    Ok(())
  }
}
