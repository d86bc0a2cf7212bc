// field_rules.rs
//
// Reglas de formato por clave de campo. Todas las claves que declaran los
// pasos del asistente deben aparecer aquí; cualquier otra es un error de
// programación (`UnknownField`).
use form::{FormError, Pattern};
use tax_domain::patterns;

/// Claves de campo (rutas con puntos) de los pasos de datos personales.
pub mod keys {
  pub const FIRST_NAME: &str = "firstName";
  pub const LAST_NAME: &str = "lastName";
  pub const SSID: &str = "ssid";
  pub const IS_TAXPAYER_DEPENDENT: &str = "isTaxpayerDependent";
  pub const IS_FOREIGN_COUNTRY: &str = "isForeignCountry";
  pub const ADDRESS: &str = "address.address";
  pub const APT_NO: &str = "address.aptNo";
  pub const CITY: &str = "address.city";
  pub const STATE: &str = "address.state";
  pub const ZIP: &str = "address.zip";
  pub const PROVINCE: &str = "address.province";
  pub const POSTAL_CODE: &str = "address.postalCode";
  pub const FOREIGN_COUNTRY: &str = "address.foreignCountry";
}

pub const NAME_MESSAGE: &str = "Input should only include English letters and spaces";
pub const SSID_MESSAGE: &str = "Input should be filled with 9 numbers";
pub const ZIP_MESSAGE: &str = "Input should be filled with 5 or 9 numbers";
pub const STATE_MESSAGE: &str = "Select a US state";

pub fn name() -> Pattern {
  Pattern::new("name", NAME_MESSAGE, &patterns::NAME)
}

pub fn ssid() -> Pattern {
  Pattern::new("ssid", SSID_MESSAGE, &patterns::SSID)
}

pub fn zip() -> Pattern {
  Pattern::new("zip", ZIP_MESSAGE, &patterns::ZIP)
}

pub fn us_state() -> Pattern {
  Pattern::new("usState", STATE_MESSAGE, &patterns::US_STATE)
}

/// Patrón de formato de una clave, o `None` si el campo es texto libre o una
/// casilla.
pub fn format(key: &str) -> Result<Option<Pattern>, FormError> {
  use keys::*;
  match key {
    FIRST_NAME | LAST_NAME | CITY => Ok(Some(name())),
    SSID => Ok(Some(ssid())),
    ZIP => Ok(Some(zip())),
    STATE => Ok(Some(us_state())),
    IS_TAXPAYER_DEPENDENT | IS_FOREIGN_COUNTRY | ADDRESS | APT_NO | PROVINCE | POSTAL_CODE | FOREIGN_COUNTRY => Ok(None),
    other => {
      log::error!("regla de formato inexistente para '{}'", other);
      Err(FormError::UnknownField(other.to_string()))
    }
  }
}
