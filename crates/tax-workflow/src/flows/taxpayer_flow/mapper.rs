// mapper.rs
//
// Conversión entre borradores validados y entidades del dominio. El mapeo a
// entidad sólo está definido para borradores que ya pasaron la validación;
// si falta un campo se devuelve `WorkflowError::Precondition`. Los valores se
// leen con `Draft::value`, igual que el motor de validación, así que con
// `trim` se guardan recortados.
use super::field_rules::keys;
use super::resolver::TaxPayerToggles;
use crate::errors::WorkflowError;
use form::Draft;
use tax_domain::{Address, Locality, Person, PrimaryPerson, Ssid, UsState};

fn required<'a>(draft: &'a Draft, key: &str, trim: bool) -> Result<&'a str, WorkflowError> {
  match draft.value(key, trim) {
    Some(v) if !v.is_empty() => Ok(v),
    _ => {
      log::error!("mapeo sin validar: falta '{}'", key);
      Err(WorkflowError::Precondition(format!("campo '{}' ausente en un borrador validado", key)))
    }
  }
}

fn ssid(draft: &Draft, trim: bool) -> Result<Ssid, WorkflowError> {
  Ssid::parse(required(draft, keys::SSID, trim)?).map_err(|e| WorkflowError::Precondition(e.to_string()))
}

/// Dirección según el modo activo; sólo se leen los subcampos de ese modo.
fn address(draft: &Draft, toggles: TaxPayerToggles, trim: bool) -> Result<Address, WorkflowError> {
  let req = |key| required(draft, key, trim);
  let street = req(keys::ADDRESS)?;
  let apt_no = draft.value(keys::APT_NO, trim);
  let city = req(keys::CITY)?;
  let address = if toggles.foreign_address {
    Address::foreign(street,
                     apt_no,
                     city,
                     req(keys::PROVINCE)?,
                     req(keys::POSTAL_CODE)?,
                     req(keys::FOREIGN_COUNTRY)?)
  } else {
    let state = UsState::parse(req(keys::STATE)?).map_err(|e| WorkflowError::Precondition(e.to_string()))?;
    Address::domestic(street, apt_no, city, state, req(keys::ZIP)?)
  };
  address.map_err(|e| WorkflowError::Precondition(e.to_string()))
}

/// Contribuyente principal a partir del borrador. El SSN se guarda sin guiones
/// y el rol se fija a `PRIMARY`.
pub fn to_primary_person(draft: &Draft, trim: bool) -> Result<PrimaryPerson, WorkflowError> {
  let toggles = TaxPayerToggles::from_draft(draft);
  Ok(PrimaryPerson::new(required(draft, keys::FIRST_NAME, trim)?,
                        required(draft, keys::LAST_NAME, trim)?,
                        ssid(draft, trim)?,
                        address(draft, toggles, trim)?,
                        toggles.dependent))
}

/// Cónyuge a partir del borrador, con rol `SPOUSE`.
pub fn to_spouse(draft: &Draft, trim: bool) -> Result<Person, WorkflowError> {
  Ok(Person::spouse(required(draft, keys::FIRST_NAME, trim)?,
                    required(draft, keys::LAST_NAME, trim)?,
                    ssid(draft, trim)?))
}

/// Borrador prellenado con un contribuyente ya guardado. El SSN queda en su
/// forma almacenada, que también satisface el patrón.
pub fn primary_person_draft(person: &PrimaryPerson) -> Draft {
  let mut draft = Draft::new();
  draft.set_text(keys::FIRST_NAME, person.first_name());
  draft.set_text(keys::LAST_NAME, person.last_name());
  draft.set_text(keys::SSID, person.ssid().as_str());
  draft.set_flag(keys::IS_TAXPAYER_DEPENDENT, person.is_taxpayer_dependent());
  let address = person.address();
  draft.set_text(keys::ADDRESS, address.address());
  if let Some(apt) = address.apt_no() {
    draft.set_text(keys::APT_NO, apt);
  }
  draft.set_text(keys::CITY, address.city());
  draft.set_flag(keys::IS_FOREIGN_COUNTRY, address.is_foreign());
  match address.locality() {
    Locality::Domestic { state, zip } => {
      draft.set_text(keys::STATE, state.code());
      draft.set_text(keys::ZIP, zip.as_str());
    }
    Locality::Foreign { province, postal_code, foreign_country } => {
      draft.set_text(keys::PROVINCE, province.as_str());
      draft.set_text(keys::POSTAL_CODE, postal_code.as_str());
      draft.set_text(keys::FOREIGN_COUNTRY, foreign_country.as_str());
    }
  }
  draft
}

/// Borrador prellenado con el cónyuge guardado.
pub fn spouse_draft(person: &Person) -> Draft {
  let mut draft = Draft::new();
  draft.set_text(keys::FIRST_NAME, person.first_name());
  draft.set_text(keys::LAST_NAME, person.last_name());
  draft.set_text(keys::SSID, person.ssid().as_str());
  draft
}

#[cfg(test)]
mod tests {
  use super::*;
  use tax_domain::{DomainStubs, PersonRole};

  fn domestic_draft() -> Draft {
    let mut d = Draft::new();
    d.set_text(keys::FIRST_NAME, "Ada");
    d.set_text(keys::LAST_NAME, "Lovelace");
    d.set_text(keys::SSID, "123-45-6789");
    d.set_text(keys::ADDRESS, "1 Main St");
    d.set_text(keys::APT_NO, "");
    d.set_text(keys::CITY, "Austin");
    d.set_text(keys::STATE, "TX");
    d.set_text(keys::ZIP, "73301");
    // stale foreign value from an earlier toggle state is ignored
    d.set_text(keys::PROVINCE, "Ontario");
    d
  }

  #[test]
  fn maps_domestic_draft_and_normalizes_ssid() {
    let p = to_primary_person(&domestic_draft(), false).unwrap();
    assert_eq!(p.ssid().as_str(), "123456789");
    assert_eq!(p.role(), PersonRole::Primary);
    assert!(!p.is_taxpayer_dependent());
    assert_eq!(p.address().apt_no(), None);
    match p.address().locality() {
      Locality::Domestic { state, zip } => {
        assert_eq!(state.code(), "TX");
        assert_eq!(zip, "73301");
      }
      other => panic!("unexpected locality {:?}", other),
    }
  }

  #[test]
  fn missing_field_is_a_precondition_error() {
    let mut d = domestic_draft();
    d.remove(keys::ZIP);
    assert!(matches!(to_primary_person(&d, false), Err(WorkflowError::Precondition(_))));
  }

  #[test]
  fn prefill_then_map_gives_back_the_same_entity() {
    for person in [DomainStubs::domestic_primary().unwrap(), DomainStubs::foreign_primary().unwrap()] {
      let draft = primary_person_draft(&person);
      assert_eq!(to_primary_person(&draft, false).unwrap(), person);
    }
    let spouse = DomainStubs::spouse().unwrap();
    assert_eq!(to_spouse(&spouse_draft(&spouse), false).unwrap(), spouse);
  }

  #[test]
  fn trimmed_mapping_stores_trimmed_values() {
    let mut d = domestic_draft();
    d.set_text(keys::SSID, " 123-45-6789 ");
    d.set_text(keys::STATE, "TX ");
    d.set_text(keys::CITY, " Austin");
    d.set_text(keys::APT_NO, "   ");
    let p = to_primary_person(&d, true).unwrap();
    assert_eq!(p.ssid().as_str(), "123456789");
    assert_eq!(p.address().city(), "Austin");
    assert_eq!(p.address().apt_no(), None);
    assert!(matches!(p.address().locality(), Locality::Domestic { state, .. } if state.code() == "TX"));
    // raw mapping keeps the padding and rejects it
    assert!(matches!(to_primary_person(&d, false), Err(WorkflowError::Precondition(_))));
  }
}
