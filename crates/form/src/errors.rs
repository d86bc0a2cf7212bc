// Archivo: errors.rs
// Propósito: definir los errores del motor de formularios y el alias Result<T>
// usado por las APIs del crate. Ninguno de estos errores es visible para el
// usuario final: los fallos de captura (`Required`, `PatternMismatch`) viven en
// `ValidationResult`, no aquí.
use thiserror::Error;
/// Errores del motor de esquemas y validación.
///
/// - `UnknownField`: un esquema referencia una clave sin regla de formato.
/// - `InvalidPattern`: una expresión regular de formato no compila.
/// - `UnsupportedValue`: la entrada contiene un valor que no es texto ni
///   booleano (por ejemplo un arreglo JSON).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
  /// Clave de campo sin regla declarada. Error de programación.
  #[error("Campo desconocido: {0}")]
  UnknownField(String),
  /// El patrón `name` no pudo compilarse.
  #[error("Patrón inválido '{name}': {reason}")]
  InvalidPattern { name: String, reason: String },
  /// Valor de entrada no soportado en la clave indicada.
  #[error("Valor no soportado en '{key}': {reason}")]
  UnsupportedValue { key: String, reason: String },
}
/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, FormError>;
