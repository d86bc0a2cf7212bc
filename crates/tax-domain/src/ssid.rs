// ssid.rs
use crate::patterns::us_state_name;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Número de seguro social normalizado: nueve dígitos sin separadores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ssid(String);

impl Ssid {
  /// Quita los guiones y exige exactamente nueve dígitos ASCII.
  pub fn parse(raw: &str) -> Result<Self, DomainError> {
    let digits: String = raw.chars().filter(|c| *c != '-').collect();
    if digits.len() != 9 || !digits.chars().all(|c| c.is_ascii_digit()) {
      return Err(DomainError::ValidationError(format!("SSN debe tener 9 dígitos: '{}'", raw)));
    }
    Ok(Self(digits))
  }

  /// Forma almacenada, sin separadores.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Forma de presentación `NNN-NN-NNNN`.
  pub fn display_form(&self) -> String {
    format!("{}-{}-{}", &self.0[0..3], &self.0[3..5], &self.0[5..9])
  }
}

impl TryFrom<String> for Ssid {
  type Error = DomainError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Ssid::parse(&value)
  }
}

impl From<Ssid> for String {
  fn from(s: Ssid) -> Self {
    s.0
  }
}

impl fmt::Display for Ssid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_form())
  }
}

/// Código de estado de EE. UU. validado contra la lista del selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UsState(String);

impl UsState {
  pub fn parse(code: &str) -> Result<Self, DomainError> {
    match us_state_name(code) {
      Some(_) => Ok(Self(code.to_string())),
      None => Err(DomainError::ValidationError(format!("Estado desconocido: '{}'", code))),
    }
  }

  pub fn code(&self) -> &str {
    &self.0
  }

  pub fn name(&self) -> &'static str {
    us_state_name(&self.0).unwrap_or_default()
  }
}

impl TryFrom<String> for UsState {
  type Error = DomainError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    UsState::parse(&value)
  }
}

impl From<UsState> for String {
  fn from(s: UsState) -> Self {
    s.0
  }
}

impl fmt::Display for UsState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
