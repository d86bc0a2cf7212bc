// address.rs
use crate::{DomainError, UsState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parte de la dirección que depende del país. Exactamente una de las dos
/// variantes existe en cada dirección.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locality {
  #[serde(rename_all = "camelCase")]
  Domestic { state: UsState, zip: String },
  #[serde(rename_all = "camelCase")]
  Foreign {
    province: String,
    postal_code: String,
    foreign_country: String,
  },
}

/// Dirección postal del contribuyente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  address: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  apt_no: Option<String>,
  city: String,
  #[serde(flatten)]
  locality: Locality,
}

impl Address {
  pub fn new(address: &str, apt_no: Option<&str>, city: &str, locality: Locality) -> Result<Self, DomainError> {
    if address.is_empty() {
      return Err(DomainError::ValidationError("La dirección no puede estar vacía".to_string()));
    }
    if city.is_empty() {
      return Err(DomainError::ValidationError("La ciudad no puede estar vacía".to_string()));
    }
    Ok(Self { address: address.to_string(),
              apt_no: apt_no.filter(|a| !a.is_empty()).map(str::to_string),
              city: city.to_string(),
              locality })
  }

  pub fn domestic(address: &str, apt_no: Option<&str>, city: &str, state: UsState, zip: &str) -> Result<Self, DomainError> {
    Self::new(address, apt_no, city, Locality::Domestic { state, zip: zip.to_string() })
  }

  pub fn foreign(address: &str,
                 apt_no: Option<&str>,
                 city: &str,
                 province: &str,
                 postal_code: &str,
                 foreign_country: &str)
                 -> Result<Self, DomainError> {
    Self::new(address,
              apt_no,
              city,
              Locality::Foreign { province: province.to_string(),
                                  postal_code: postal_code.to_string(),
                                  foreign_country: foreign_country.to_string() })
  }

  pub fn address(&self) -> &str {
    &self.address
  }

  pub fn apt_no(&self) -> Option<&str> {
    self.apt_no.as_deref()
  }

  pub fn city(&self) -> &str {
    &self.city
  }

  pub fn locality(&self) -> &Locality {
    &self.locality
  }

  pub fn is_foreign(&self) -> bool {
    matches!(self.locality, Locality::Foreign { .. })
  }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.address)?;
    if let Some(apt) = &self.apt_no {
      write!(f, " #{}", apt)?;
    }
    match &self.locality {
      Locality::Domestic { state, zip } => write!(f, ", {}, {} {}", self.city, state, zip),
      Locality::Foreign { province, postal_code, foreign_country } => {
        write!(f, ", {}, {} {}, {}", self.city, province, postal_code, foreign_country)
      }
    }
  }
}
