use thiserror::Error;

// Errores comunes del asistente.
//
// Este enum centraliza los errores que pueden ocurrir durante un paso:
// errores del motor de formularios (`FormError`), errores del dominio o del
// almacén (`DomainError`), de navegación, de configuración y de serialización.
// Los fallos de captura del usuario no son errores: viven en
// `form::ValidationResult`.
#[derive(Error, Debug)]
pub enum WorkflowError {
  /// Errores originados por el motor de esquemas (clave sin regla, patrón
  /// que no compila).
  #[error("Error de formulario: {0}")]
  Form(#[from] form::FormError),

  /// Errores del dominio o del almacén central.
  #[error("Error de dominio: {0}")]
  Domain(#[from] tax_domain::DomainError),

  /// Errores de serializacion/deserializacion JSON.
  #[error("Error de serializacion: {0}")]
  Serialization(#[from] serde_json::Error),

  /// Se intentó avanzar más allá del último paso.
  #[error("Posición fuera de rango: paso {position} de {len}")]
  OutOfRange { position: usize, len: usize },

  /// El asistente ya confirmó su último paso.
  #[error("El asistente ya está completado")]
  AlreadyCompleted,

  /// Se llamó al mapeador con un borrador que no pasó la validación.
  #[error("Precondición incumplida: {0}")]
  Precondition(String),

  /// Configuración inválida (variables de entorno, secuencia de pasos).
  #[error("Error de configuracion: {0}")]
  Config(String),
}
