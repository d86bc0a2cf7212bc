// Archivo: engine.rs
// Propósito: implementar `ValidationEngine`, que evalúa un `Draft` contra un
// `ActiveSchema` ya resuelto.
//
// Nota: el motor no resuelve esquemas ni conoce casillas; recibe el esquema
// final y sólo decide `Ok`, `Required` o `PatternMismatch` por campo.
use crate::domain::Draft;
use crate::errors::Result;
use crate::schema::{ActiveSchema, ValueKind};
use crate::validation::{FieldError, FieldErrorKind, FieldStatus, ValidationResult};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Mensaje para campos obligatorios vacíos.
pub const REQUIRED_MESSAGE: &str = "Input is required";

/// Mensaje para un texto donde se esperaba una casilla, o al revés.
pub const WRONG_KIND_TEXT_MESSAGE: &str = "Input should be text";
pub const WRONG_KIND_FLAG_MESSAGE: &str = "Input should be yes or no";

fn wrong_kind_message(expected: ValueKind) -> &'static str {
    match expected {
        ValueKind::Text => WRONG_KIND_TEXT_MESSAGE,
        ValueKind::Flag => WRONG_KIND_FLAG_MESSAGE,
    }
}

/// Configuración del motor.
///
/// - `trim_input`: los textos con sólo espacios cuentan como vacíos y los
///   valores se recortan antes de evaluar el patrón. Por defecto se valida la
///   entrada cruda.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEngineConfig {
    #[serde(default)]
    pub trim_input: bool,
}

/// Motor de validación síncrono y sin efectos laterales.
///
/// Dos llamadas con el mismo `(draft, schema)` producen el mismo resultado.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: ValidationEngineConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidationEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationEngineConfig {
        &self.config
    }

    /// Valida cada campo del esquema, en orden:
    /// - valor de otro tipo (casilla en un campo de texto o al revés):
    ///   `PatternMismatch`;
    /// - obligatorio y vacío: `Required`;
    /// - presente, con formato y sin coincidencia (sobre `Draft::value`, el
    ///   mismo texto que leen los mapeadores): `PatternMismatch`;
    /// - en otro caso `Ok`.
    ///
    /// Las claves del borrador fuera del esquema no aparecen en el resultado.
    /// Sólo devuelve `Err` si un patrón no compila.
    pub fn validate(&self, draft: &Draft, schema: &ActiveSchema) -> Result<ValidationResult> {
        let trim = self.config.trim_input;
        let mut statuses = IndexMap::with_capacity(schema.len());
        for field in schema.iter() {
            let status = match draft.get(&field.key) {
                Some(value) if !field.kind.accepts(value) => {
                    FieldStatus::Error(FieldError { kind: FieldErrorKind::PatternMismatch,
                                                    message: wrong_kind_message(field.kind).to_string() })
                }
                _ if draft.is_blank(&field.key, trim) => {
                    if field.is_required(draft) {
                        FieldStatus::Error(FieldError { kind: FieldErrorKind::Required,
                                                        message: REQUIRED_MESSAGE.to_string() })
                    } else {
                        FieldStatus::Ok
                    }
                }
                _ => match (field.format, draft.value(&field.key, trim)) {
                    (Some(pattern), Some(candidate)) => {
                        if pattern.is_match(candidate)? {
                            FieldStatus::Ok
                        } else {
                            FieldStatus::Error(FieldError { kind: FieldErrorKind::PatternMismatch,
                                                            message: pattern.message().to_string() })
                        }
                    }
                    _ => FieldStatus::Ok,
                },
            };
            statuses.insert(field.key.clone(), status);
        }
        let result = ValidationResult::from_statuses(statuses);
        debug!("validación: {} campos, {} errores", result.len(), result.error_count());
        Ok(result)
    }
}
