// tax_payer.rs
use crate::{Person, PrimaryPerson};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPayer {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub primary_person: Option<PrimaryPerson>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub spouse: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Information {
  pub tax_payer: TaxPayer,
}

/// Valor completo del almacén central durante la sesión del asistente.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxesState {
  pub information: Information,
}

impl TaxesState {
  /// Devuelve un estado nuevo con la porción reemplazada. `self` no cambia.
  pub fn with_slice(&self, slice: StateSlice) -> Self {
    let mut next = self.clone();
    match slice {
      StateSlice::PrimaryPerson(p) => next.information.tax_payer.primary_person = Some(p),
      StateSlice::Spouse(s) => next.information.tax_payer.spouse = Some(s),
    }
    next
  }

  pub fn primary_person(&self) -> Option<&PrimaryPerson> {
    self.information.tax_payer.primary_person.as_ref()
  }

  pub fn spouse(&self) -> Option<&Person> {
    self.information.tax_payer.spouse.as_ref()
  }
}

/// Porción del estado que escribe un paso al confirmarse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "slice", content = "value", rename_all = "camelCase")]
pub enum StateSlice {
  PrimaryPerson(PrimaryPerson),
  Spouse(Person),
}

impl StateSlice {
  pub fn kind(&self) -> SliceKind {
    match self {
      StateSlice::PrimaryPerson(_) => SliceKind::PrimaryPerson,
      StateSlice::Spouse(_) => SliceKind::Spouse,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliceKind {
  PrimaryPerson,
  Spouse,
}

impl fmt::Display for SliceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      SliceKind::PrimaryPerson => "information.taxPayer.primaryPerson",
      SliceKind::Spouse => "information.taxPayer.spouse",
    };
    write!(f, "{}", s)
  }
}
