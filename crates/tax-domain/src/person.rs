// person.rs
use crate::{Address, Ssid};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonRole {
  Primary,
  Spouse,
  Dependent,
}

impl fmt::Display for PersonRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      PersonRole::Primary => "PRIMARY",
      PersonRole::Spouse => "SPOUSE",
      PersonRole::Dependent => "DEPENDENT",
    };
    write!(f, "{}", s)
  }
}

/// Persona declarada en la planilla que no es el contribuyente principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  first_name: String,
  last_name: String,
  ssid: Ssid,
  role: PersonRole,
}

impl Person {
  pub fn spouse(first_name: &str, last_name: &str, ssid: Ssid) -> Self {
    Self { first_name: first_name.to_string(),
           last_name: last_name.to_string(),
           ssid,
           role: PersonRole::Spouse }
  }

  pub fn first_name(&self) -> &str {
    &self.first_name
  }

  pub fn last_name(&self) -> &str {
    &self.last_name
  }

  pub fn ssid(&self) -> &Ssid {
    &self.ssid
  }

  pub fn role(&self) -> PersonRole {
    self.role
  }
}

/// Contribuyente principal. El rol es siempre `PRIMARY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryPerson {
  first_name: String,
  last_name: String,
  ssid: Ssid,
  address: Address,
  is_taxpayer_dependent: bool,
  role: PersonRole,
}

impl PrimaryPerson {
  pub fn new(first_name: &str, last_name: &str, ssid: Ssid, address: Address, is_taxpayer_dependent: bool) -> Self {
    Self { first_name: first_name.to_string(),
           last_name: last_name.to_string(),
           ssid,
           address,
           is_taxpayer_dependent,
           role: PersonRole::Primary }
  }

  pub fn first_name(&self) -> &str {
    &self.first_name
  }

  pub fn last_name(&self) -> &str {
    &self.last_name
  }

  pub fn ssid(&self) -> &Ssid {
    &self.ssid
  }

  pub fn address(&self) -> &Address {
    &self.address
  }

  pub fn is_taxpayer_dependent(&self) -> bool {
    self.is_taxpayer_dependent
  }

  pub fn role(&self) -> PersonRole {
    self.role
  }
}

impl fmt::Display for PrimaryPerson {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
           "PrimaryPerson({} {}, SSN: {}, {})",
           self.first_name, self.last_name, self.ssid, self.address)
  }
}
