// Archivo: domain.rs
// Propósito: tipos del borrador (`Draft`) que se edita dentro de un paso del
// asistente. Las claves son rutas separadas por puntos (`address.zip`) y los
// valores llegan sin tipar: texto o booleano.
use crate::errors::{FormError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::borrow::Cow;

/// Valor crudo de un campo tal y como lo entrega la capa de captura.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Casilla de verificación.
    Flag(bool),
    /// Entrada de texto libre.
    Text(String),
}

impl FieldValue {
    /// Representación textual usada al evaluar patrones.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Flag(true) => Cow::Borrowed("true"),
            FieldValue::Flag(false) => Cow::Borrowed("false"),
        }
    }
}

/// Registro mutable en edición para el paso activo.
///
/// El borrador acepta cualquier clave: las que no declara el esquema activo se
/// conservan intactas y simplemente no se validan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft {
    values: IndexMap<String, FieldValue>,
}

impl Draft {
    /// Crea un borrador vacío.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye un borrador a partir de JSON anidado, aplanando los objetos
    /// en claves con puntos: `{"address": {"zip": "1"}}` produce `address.zip`.
    /// Los `null` se ignoran y los números se guardan como texto.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let mut draft = Draft::new();
        match value {
            JsonValue::Object(map) => {
                for (k, v) in map {
                    flatten_into(&mut draft, k.clone(), v)?;
                }
                Ok(draft)
            }
            other => Err(FormError::UnsupportedValue { key: String::new(),
                                                       reason: format!("se esperaba un objeto, llegó {}", other) }),
        }
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), FieldValue::Flag(value));
    }

    /// Elimina la clave; devuelve el valor previo si existía.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.values.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Texto de la clave, sólo si el valor es de texto.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Texto tal como lo evalúan los patrones: recortado si `trim`. Las
    /// casillas no tienen texto.
    pub fn value(&self, key: &str, trim: bool) -> Option<&str> {
        self.text(key).map(|s| if trim { s.trim() } else { s })
    }

    /// Lectura segura de una casilla: ausente (o no booleana) cuenta como
    /// `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FieldValue::Flag(true)))
    }

    /// Un campo está vacío si falta o si su texto es la cadena vacía. Con
    /// `trim` también cuentan como vacíos los textos con sólo espacios. Las
    /// casillas nunca están vacías.
    pub fn is_blank(&self, key: &str, trim: bool) -> bool {
        match self.values.get(key) {
            None => true,
            Some(FieldValue::Flag(_)) => false,
            Some(FieldValue::Text(s)) if trim => s.trim().is_empty(),
            Some(FieldValue::Text(s)) => s.is_empty(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flatten_into(draft: &mut Draft, key: String, value: &JsonValue) -> Result<()> {
    match value {
        JsonValue::Null => Ok(()),
        JsonValue::Bool(b) => {
            draft.set_flag(&key, *b);
            Ok(())
        }
        JsonValue::String(s) => {
            draft.set_text(&key, s.clone());
            Ok(())
        }
        JsonValue::Number(n) => {
            draft.set_text(&key, n.to_string());
            Ok(())
        }
        JsonValue::Object(map) => {
            for (k, v) in map {
                flatten_into(draft, format!("{}.{}", key, k), v)?;
            }
            Ok(())
        }
        JsonValue::Array(_) => Err(FormError::UnsupportedValue { key,
                                                                 reason: "los arreglos no son campos de formulario".into() }),
    }
}
