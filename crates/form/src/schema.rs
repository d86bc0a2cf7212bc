// Archivo: schema.rs
// Propósito: describir qué campos están activos y cuándo son obligatorios.
// `ActiveSchema` es el resultado de un resolvedor puro; aquí sólo viven los
// tipos y las primitivas de reescritura que usan los resolvedores.
use crate::domain::{Draft, FieldValue};
use crate::errors::{FormError, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Celda perezosa con una expresión regular compilada una única vez.
pub type PatternCell = Lazy<std::result::Result<Regex, regex::Error>>;

/// Restricción de formato sobre la entrada cruda de un campo.
///
/// Dos patrones son iguales si tienen el mismo nombre.
#[derive(Clone, Copy)]
pub struct Pattern {
    name: &'static str,
    message: &'static str,
    regex: &'static PatternCell,
}

impl Pattern {
    pub const fn new(name: &'static str, message: &'static str, regex: &'static PatternCell) -> Self {
        Self { name, message, regex }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Mensaje mostrado al usuario cuando el valor no cumple el patrón.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Evalúa el patrón. Sólo falla si la expresión no compila.
    pub fn is_match(&self, value: &str) -> Result<bool> {
        let re = self.regex.as_ref().map_err(|e| FormError::InvalidPattern { name: self.name.to_string(),
                                                                             reason: e.to_string() })?;
        Ok(re.is_match(value))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self.name)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Pattern {}

/// Predicado `requiredWhen` de un campo. Es puro y total: una casilla ausente
/// se lee como `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Always,
    Never,
    /// Obligatorio cuando la casilla `key` vale `expected`.
    WhenFlag { key: String, expected: bool },
}

impl Requirement {
    pub fn when_flag(key: &str, expected: bool) -> Self {
        Requirement::WhenFlag { key: key.to_string(), expected }
    }

    pub fn is_required(&self, draft: &Draft) -> bool {
        match self {
            Requirement::Always => true,
            Requirement::Never => false,
            Requirement::WhenFlag { key, expected } => draft.flag(key) == *expected,
        }
    }
}

/// Tipo de valor que admite un campo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueKind {
    #[default]
    Text,
    Flag,
}

impl ValueKind {
    /// `true` si `value` es del tipo esperado.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!((self, value), (ValueKind::Text, FieldValue::Text(_)) | (ValueKind::Flag, FieldValue::Flag(_)))
    }
}

/// Entrada del esquema para un campo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub key: String,
    pub kind: ValueKind,
    pub format: Option<Pattern>,
    pub required: Requirement,
    /// Subesquema al que pertenece (por ejemplo `address.domestic`). Los
    /// resolvedores intercambian grupos completos.
    pub group: Option<String>,
}

impl FieldSchema {
    pub fn new(key: &str, format: Option<Pattern>, required: Requirement) -> Self {
        Self { key: key.to_string(), kind: ValueKind::Text, format, required, group: None }
    }

    /// Campo de casilla: sin formato y nunca obligatorio.
    pub fn flag(key: &str) -> Self {
        Self { key: key.to_string(), kind: ValueKind::Flag, format: None, required: Requirement::Never, group: None }
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn is_required(&self, draft: &Draft) -> bool {
        self.required.is_required(draft)
    }
}

/// Conjunto ordenado de campos en vigor más el estado de las casillas que lo
/// produjeron.
#[derive(Debug, Clone, Default)]
pub struct ActiveSchema {
    fields: IndexMap<String, FieldSchema>,
    toggles: BTreeMap<String, bool>,
}

impl ActiveSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un campo al final. Si la clave ya existe se reemplaza en su
    /// posición original.
    pub fn push(&mut self, field: FieldSchema) {
        self.fields.insert(field.key.clone(), field);
    }

    /// Quita todos los campos del grupo y devuelve cuántos había.
    pub fn remove_group(&mut self, group: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|_, f| f.group.as_deref() != Some(group));
        before - self.fields.len()
    }

    /// Cambia el predicado de obligatoriedad de un campo ya activo.
    pub fn set_requirement(&mut self, key: &str, required: Requirement) -> Result<()> {
        match self.fields.get_mut(key) {
            Some(f) => {
                f.required = required;
                Ok(())
            }
            None => Err(FormError::UnknownField(key.to_string())),
        }
    }

    /// Registra el valor de una casilla que participó en la resolución.
    pub fn record_toggle(&mut self, name: &str, value: bool) {
        self.toggles.insert(name.to_string(), value);
    }

    pub fn toggle(&self, name: &str) -> Option<bool> {
        self.toggles.get(name).copied()
    }

    pub fn get(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.fields.values().any(|f| f.group.as_deref() == Some(group))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &FieldSchema> {
        self.fields.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Claves obligatorias para el borrador dado, en orden.
    pub fn required_keys<'a>(&'a self, draft: &'a Draft) -> impl Iterator<Item = &'a str> + 'a {
        self.fields.values().filter(move |f| f.is_required(draft)).map(|f| f.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// El orden forma parte de la identidad del esquema.
impl PartialEq for ActiveSchema {
    fn eq(&self, other: &Self) -> bool {
        self.fields.iter().eq(other.fields.iter()) && self.toggles == other.toggles
    }
}

impl Eq for ActiveSchema {}

#[cfg(test)]
mod tests {
    use super::*;

    static DIGITS: PatternCell = Lazy::new(|| Regex::new(r"^\d+$"));
    static BROKEN: PatternCell = Lazy::new(|| Regex::new(r"(unclosed"));

    fn base() -> ActiveSchema {
        let mut s = ActiveSchema::new();
        s.push(FieldSchema::new("a", None, Requirement::Always));
        s.push(FieldSchema::new("b", None, Requirement::Never).in_group("g1"));
        s.push(FieldSchema::new("c", None, Requirement::Never).in_group("g1"));
        s.push(FieldSchema::new("d", None, Requirement::Never));
        s
    }

    #[test]
    fn remove_group_keeps_order_of_the_rest() {
        let mut s = base();
        assert_eq!(s.remove_group("g1"), 2);
        assert_eq!(s.keys().collect::<Vec<_>>(), vec!["a", "d"]);
        assert!(!s.has_group("g1"));
    }

    #[test]
    fn set_requirement_on_missing_field_is_unknown() {
        let mut s = base();
        assert_eq!(s.set_requirement("zzz", Requirement::Always),
                   Err(FormError::UnknownField("zzz".into())));
        s.set_requirement("d", Requirement::Always).unwrap();
        assert_eq!(s.get("d").unwrap().required, Requirement::Always);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut reversed = ActiveSchema::new();
        for f in base().iter().rev() {
            reversed.push(f.clone());
        }
        assert_ne!(base(), reversed);
        assert_eq!(base(), base());
    }

    #[test]
    fn when_flag_reads_absent_flag_as_false() {
        let mut d = Draft::new();
        let req = Requirement::when_flag("foreign", false);
        assert!(req.is_required(&d));
        d.set_flag("foreign", true);
        assert!(!req.is_required(&d));
    }

    #[test]
    fn pattern_reports_compile_failures() {
        let ok = Pattern::new("digits", "numbers only", &DIGITS);
        assert!(ok.is_match("123").unwrap());
        assert!(!ok.is_match("12a").unwrap());
        let bad = Pattern::new("broken", "never", &BROKEN);
        assert!(matches!(bad.is_match("x"), Err(FormError::InvalidPattern { .. })));
    }
}
