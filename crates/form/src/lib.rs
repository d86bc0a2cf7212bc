//! Crate `form` — esquemas condicionales y validación de borradores
//!
//! Este crate define el borrador en edición (`Draft`), la descripción de los
//! campos en vigor (`FieldSchema`, `ActiveSchema`) y el motor que valida uno
//! contra el otro (`ValidationEngine`). No conoce ningún dominio concreto: los
//! resolvedores que deciden qué campos están activos viven en los crates que
//! lo usan.
//!
//! Diseño resumido:
//! - Resolución pura: un `ActiveSchema` se calcula desde el borrador y sus
//!   casillas, sin estado oculto; mismas casillas, mismo esquema.
//! - Obligatoriedad como predicado: `Requirement` se evalúa sobre el borrador
//!   con lectura segura de claves ausentes.
//! - Resultados inmutables: cada intento produce un `ValidationResult` nuevo.
//!
//! Ejemplo rápido:
//! ```rust
//! use form::{ActiveSchema, Draft, FieldSchema, Requirement, ValidationEngine};
//! let mut schema = ActiveSchema::new();
//! schema.push(FieldSchema::new("address.city", None, Requirement::Always));
//! let mut draft = Draft::new();
//! draft.set_text("address.city", "Springfield");
//! let result = ValidationEngine::default().validate(&draft, &schema).unwrap();
//! assert!(result.is_valid());
//! ```
pub mod domain;
pub mod engine;
pub mod errors;
pub mod schema;
pub mod validation;

pub use domain::*;
pub use engine::*;
pub use errors::*;
pub use schema::*;
pub use validation::*;
