// Archivo: validation.rs
// Propósito: resultado de un intento de validación. Se crea nuevo en cada
// intento y no se modifica después.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipos de fallo visibles para el usuario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorKind {
    /// Campo activo y obligatorio sin valor.
    Required,
    /// Valor presente que no cumple el formato.
    PatternMismatch,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldErrorKind::Required => "required",
            FieldErrorKind::PatternMismatch => "patternMismatch",
        };
        write!(f, "{}", s)
    }
}

/// Descriptor de error que consume la capa de presentación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "camelCase")]
pub enum FieldStatus {
    Ok,
    Error(FieldError),
}

impl FieldStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, FieldStatus::Ok)
    }
}

/// Estado por campo de un intento de validación, en el orden del esquema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    statuses: IndexMap<String, FieldStatus>,
}

impl ValidationResult {
    pub(crate) fn from_statuses(statuses: IndexMap<String, FieldStatus>) -> Self {
        Self { statuses }
    }

    /// `true` si todos los campos validados están `Ok`.
    pub fn is_valid(&self) -> bool {
        self.statuses.values().all(FieldStatus::is_ok)
    }

    pub fn status(&self, key: &str) -> Option<&FieldStatus> {
        self.statuses.get(key)
    }

    /// Error del campo, si lo hubo. `None` también para campos no validados.
    pub fn error(&self, key: &str) -> Option<&FieldError> {
        match self.statuses.get(key) {
            Some(FieldStatus::Error(e)) => Some(e),
            _ => None,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.statuses.iter().filter_map(|(k, s)| match s {
                                 FieldStatus::Error(e) => Some((k.as_str(), e)),
                                 FieldStatus::Ok => None,
                             })
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.statuses.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
