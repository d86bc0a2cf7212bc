// resolver.rs
//
// Resolución del esquema activo de los pasos de datos personales. Todo es
// función pura del borrador: no hay caché ni suscripciones, se recalcula en
// cada cambio de casilla.
use super::field_rules::{self, keys};
use form::{ActiveSchema, Draft, FieldSchema, FormError, Requirement};
use log::debug;

/// Grupo de campos de dirección en EE. UU.
pub const DOMESTIC_GROUP: &str = "address.domestic";
/// Grupo de campos de dirección en el extranjero.
pub const FOREIGN_GROUP: &str = "address.foreign";

/// Casillas que reescriben el esquema del paso del contribuyente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaxPayerToggles {
  pub foreign_address: bool,
  pub dependent: bool,
}

impl TaxPayerToggles {
  /// Lee las casillas del borrador; ausente equivale a `false`.
  pub fn from_draft(draft: &Draft) -> Self {
    Self { foreign_address: draft.flag(keys::IS_FOREIGN_COUNTRY), dependent: draft.flag(keys::IS_TAXPAYER_DEPENDENT) }
  }
}

fn field(key: &str, required: Requirement) -> Result<FieldSchema, FormError> {
  Ok(FieldSchema::new(key, field_rules::format(key)?, required))
}

// La clave debe tener regla aunque las casillas no lleven formato.
fn flag(key: &str) -> Result<FieldSchema, FormError> {
  field_rules::format(key)?;
  Ok(FieldSchema::flag(key))
}

/// Campos comunes a las personas: nombre, apellido y SSN, todos obligatorios.
pub fn person_fields(schema: &mut ActiveSchema) -> Result<(), FormError> {
  for key in [keys::FIRST_NAME, keys::LAST_NAME, keys::SSID] {
    schema.push(field(key, Requirement::Always)?);
  }
  Ok(())
}

// Sólo el grupo del modo elegido está en el esquema, así que todos sus
// campos son obligatorios.
fn group(name: &str, members: &[&str]) -> Result<Vec<FieldSchema>, FormError> {
  let mut fields = Vec::with_capacity(members.len());
  for key in members {
    fields.push(field(key, Requirement::Always)?.in_group(name));
  }
  Ok(fields)
}

fn domestic_fields() -> Result<Vec<FieldSchema>, FormError> {
  group(DOMESTIC_GROUP, &[keys::STATE, keys::ZIP])
}

fn foreign_fields() -> Result<Vec<FieldSchema>, FormError> {
  group(FOREIGN_GROUP, &[keys::PROVINCE, keys::POSTAL_CODE, keys::FOREIGN_COUNTRY])
}

/// Base común a todos los modos, en orden de presentación. Incluye el grupo
/// doméstico como modo por omisión.
fn base_schema() -> Result<ActiveSchema, FormError> {
  let mut schema = ActiveSchema::new();
  person_fields(&mut schema)?;
  schema.push(flag(keys::IS_TAXPAYER_DEPENDENT)?);
  schema.push(field(keys::ADDRESS, Requirement::Always)?);
  schema.push(field(keys::APT_NO, Requirement::Never)?);
  schema.push(field(keys::CITY, Requirement::Always)?);
  schema.push(flag(keys::IS_FOREIGN_COUNTRY)?);
  for f in domestic_fields()? {
    schema.push(f);
  }
  Ok(schema)
}

/// Esquema activo del paso del contribuyente.
///
/// Orden de evaluación fijo: primero la casilla de dirección extranjera
/// (intercambia el grupo doméstico por el extranjero), luego la de
/// dependiente, que no quita campos y queda registrada en el esquema para los
/// pasos siguientes. El resultado sólo depende de `toggles`: ni los campos
/// activos ni su obligatoriedad leen las casillas del borrador.
pub fn resolve(_draft: &Draft, toggles: TaxPayerToggles) -> Result<ActiveSchema, FormError> {
  let mut schema = base_schema()?;

  if toggles.foreign_address {
    schema.remove_group(DOMESTIC_GROUP);
    for f in foreign_fields()? {
      schema.push(f);
    }
  }
  schema.record_toggle(keys::IS_FOREIGN_COUNTRY, toggles.foreign_address);
  schema.record_toggle(keys::IS_TAXPAYER_DEPENDENT, toggles.dependent);

  debug!("esquema resuelto: extranjero={} dependiente={} campos={}",
         toggles.foreign_address,
         toggles.dependent,
         schema.len());
  Ok(schema)
}

/// Esquema del paso del cónyuge: sólo los campos de persona.
pub fn resolve_spouse(_draft: &Draft) -> Result<ActiveSchema, FormError> {
  let mut schema = ActiveSchema::new();
  person_fields(&mut schema)?;
  Ok(schema)
}
