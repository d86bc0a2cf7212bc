use crate::{DomainError, SliceKind, StateSlice, TaxesState};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Comprobante de una escritura confirmada en el almacén.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReceipt {
    pub id: Uuid,
    pub slice: SliceKind,
    /// Revisión del almacén tras la escritura (la primera escritura deja 1).
    pub revision: u64,
    pub committed_at: DateTime<Utc>,
}

/// Almacén central del asistente.
///
/// Cada escritura reemplaza el estado completo con una única asignación: un
/// lector obtiene el estado anterior o el siguiente, nunca uno a medias.
pub trait TaxStore: Send + Sync {
    /// Estado actual compartido. El `Arc` devuelto no cambia aunque haya
    /// escrituras posteriores.
    fn snapshot(&self) -> Result<Arc<TaxesState>, DomainError>;

    /// Reemplaza la porción indicada y devuelve el comprobante.
    fn write(&self, slice: StateSlice) -> Result<CommitReceipt, DomainError>;

    /// Número de escrituras confirmadas.
    fn revision(&self) -> Result<u64, DomainError>;
}

impl dyn TaxStore {
    /// Lectura por selector sobre el estado actual.
    pub fn read<T>(&self, selector: impl FnOnce(&TaxesState) -> T) -> Result<T, DomainError> {
        let state = self.snapshot()?;
        Ok(selector(&state))
    }
}

struct StoreCell {
    state: Arc<TaxesState>,
    revision: u64,
    history: Vec<CommitReceipt>,
}

/// Implementación en memoria para tests y desarrollo.
pub struct InMemoryTaxStore {
    cell: Mutex<StoreCell>,
}

impl InMemoryTaxStore {
    pub fn new() -> Self {
        Self::with_state(TaxesState::default())
    }

    pub fn with_state(state: TaxesState) -> Self {
        Self { cell: Mutex::new(StoreCell { state: Arc::new(state), revision: 0, history: Vec::new() }) }
    }

    /// Comprobantes de todas las escrituras, en orden.
    pub fn history(&self) -> Result<Vec<CommitReceipt>, DomainError> {
        Ok(self.lock()?.history.clone())
    }

    // Helper to map poisoned mutex errors into DomainError
    fn lock(&self) -> Result<MutexGuard<'_, StoreCell>, DomainError> {
        self.cell
            .lock()
            .map_err(|e| DomainError::StoreError(format!("Mutex 'store' poisoned: {}", e)))
    }
}

impl Default for InMemoryTaxStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxStore for InMemoryTaxStore {
    fn snapshot(&self) -> Result<Arc<TaxesState>, DomainError> {
        Ok(self.lock()?.state.clone())
    }

    fn write(&self, slice: StateSlice) -> Result<CommitReceipt, DomainError> {
        let kind = slice.kind();
        let mut cell = self.lock()?;
        let next = Arc::new(cell.state.with_slice(slice));
        cell.state = next;
        cell.revision += 1;
        let receipt = CommitReceipt { id: Uuid::new_v4(), slice: kind, revision: cell.revision, committed_at: Utc::now() };
        cell.history.push(receipt.clone());
        info!("almacén: {} reemplazado (revisión {})", kind, cell.revision);
        Ok(receipt)
    }

    fn revision(&self) -> Result<u64, DomainError> {
        Ok(self.lock()?.revision)
    }
}
