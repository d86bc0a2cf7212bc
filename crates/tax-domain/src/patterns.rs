// patterns.rs
//
// Expresiones de formato de la entrada cruda. Se compilan una sola vez; si
// alguna no compila el error queda guardado en la celda y se propaga a quien
// la evalúe.
use once_cell::sync::Lazy;
use regex::Regex;

/// Estados de EE. UU. (más DC) ofrecidos en el selector de estado.
pub const US_STATES: [(&str, &str); 51] = [("AL", "Alabama"),
                                           ("AK", "Alaska"),
                                           ("AZ", "Arizona"),
                                           ("AR", "Arkansas"),
                                           ("CA", "California"),
                                           ("CO", "Colorado"),
                                           ("CT", "Connecticut"),
                                           ("DE", "Delaware"),
                                           ("DC", "District of Columbia"),
                                           ("FL", "Florida"),
                                           ("GA", "Georgia"),
                                           ("HI", "Hawaii"),
                                           ("ID", "Idaho"),
                                           ("IL", "Illinois"),
                                           ("IN", "Indiana"),
                                           ("IA", "Iowa"),
                                           ("KS", "Kansas"),
                                           ("KY", "Kentucky"),
                                           ("LA", "Louisiana"),
                                           ("ME", "Maine"),
                                           ("MD", "Maryland"),
                                           ("MA", "Massachusetts"),
                                           ("MI", "Michigan"),
                                           ("MN", "Minnesota"),
                                           ("MS", "Mississippi"),
                                           ("MO", "Missouri"),
                                           ("MT", "Montana"),
                                           ("NE", "Nebraska"),
                                           ("NV", "Nevada"),
                                           ("NH", "New Hampshire"),
                                           ("NJ", "New Jersey"),
                                           ("NM", "New Mexico"),
                                           ("NY", "New York"),
                                           ("NC", "North Carolina"),
                                           ("ND", "North Dakota"),
                                           ("OH", "Ohio"),
                                           ("OK", "Oklahoma"),
                                           ("OR", "Oregon"),
                                           ("PA", "Pennsylvania"),
                                           ("RI", "Rhode Island"),
                                           ("SC", "South Carolina"),
                                           ("SD", "South Dakota"),
                                           ("TN", "Tennessee"),
                                           ("TX", "Texas"),
                                           ("UT", "Utah"),
                                           ("VT", "Vermont"),
                                           ("VA", "Virginia"),
                                           ("WA", "Washington"),
                                           ("WV", "West Virginia"),
                                           ("WI", "Wisconsin"),
                                           ("WY", "Wyoming")];

/// Nombres de persona y ciudad: letras ASCII con espacios, puntos, apóstrofos
/// o guiones internos ("St. Louis", "O'Fallon", "Winston-Salem").
pub static NAME: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z .'-]*$"));

/// Nueve dígitos con guiones opcionales en las posiciones habituales.
pub static SSID: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^\d{3}-?\d{2}-?\d{4}$"));

/// ZIP de 5 dígitos o ZIP+4.
pub static ZIP: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$"));

/// Código exacto de alguno de `US_STATES`.
pub static US_STATE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
  let codes: Vec<&str> = US_STATES.iter().map(|(code, _)| *code).collect();
  Regex::new(&format!("^({})$", codes.join("|")))
});

/// Nombre largo de un código de estado, si existe.
pub fn us_state_name(code: &str) -> Option<&'static str> {
  US_STATES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}
