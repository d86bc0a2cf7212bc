use crate::errors::WorkflowError;
use crate::step_kind::StepKind;
use form::{ActiveSchema, Draft};
use tax_domain::{StateSlice, TaxesState};

/// Trait que representa un paso con formulario del asistente.
///
/// Un paso reúne las tres piezas puras que necesita el controlador de
/// confirmación: el resolvedor de esquema, el mapeador a entidad y el
/// prellenado del borrador desde el almacén. No guarda estado propio.
pub trait WizardStep: Send + Sync {
    fn kind(&self) -> StepKind;

    /// Nombre o identificador del paso
    fn name(&self) -> String {
        self.kind().to_string()
    }

    /// Casillas que cambian el esquema. Modificar cualquiera de ellas obliga a
    /// resolver de nuevo.
    fn toggles(&self) -> &'static [&'static str] {
        &[]
    }

    /// Borrador inicial a partir de lo que ya hay en el almacén.
    fn initial_draft(&self, state: &TaxesState) -> Draft;

    /// Calcula los campos activos para el borrador actual.
    fn resolve(&self, draft: &Draft) -> Result<ActiveSchema, WorkflowError>;

    /// Convierte un borrador ya validado en la porción del almacén que este
    /// paso reemplaza. `trim` debe coincidir con el del motor que lo validó.
    fn to_slice(&self, draft: &Draft, trim: bool) -> Result<StateSlice, WorkflowError>;
}
