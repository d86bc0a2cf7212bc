use form::{ActiveSchema, Draft, FieldErrorKind, FieldSchema, FieldStatus, Pattern, PatternCell, Requirement,
           ValidationEngine, ValidationEngineConfig, REQUIRED_MESSAGE, WRONG_KIND_FLAG_MESSAGE, WRONG_KIND_TEXT_MESSAGE};
use once_cell::sync::Lazy;
use regex::Regex;

static ZIP: PatternCell = Lazy::new(|| Regex::new(r"^\d{5}$"));

fn zip() -> Pattern {
  Pattern::new("zip", "five digits", &ZIP)
}

fn schema() -> ActiveSchema {
  let mut s = ActiveSchema::new();
  s.push(FieldSchema::new("address.city", None, Requirement::Always));
  s.push(FieldSchema::new("address.aptNo", None, Requirement::Never));
  s.push(FieldSchema::new("address.zip", Some(zip()), Requirement::when_flag("isForeignCountry", false)));
  s
}

#[test]
fn required_field_missing_reports_required() {
  let draft = Draft::new();
  let result = ValidationEngine::default().validate(&draft, &schema()).expect("validate");
  assert!(!result.is_valid());
  let err = result.error("address.city").expect("city error");
  assert_eq!(err.kind, FieldErrorKind::Required);
  assert_eq!(err.message, REQUIRED_MESSAGE);
  // optional field stays Ok even when absent
  assert_eq!(result.status("address.aptNo"), Some(&FieldStatus::Ok));
}

#[test]
fn present_value_failing_format_reports_pattern_mismatch() {
  let mut draft = Draft::new();
  draft.set_text("address.city", "Springfield");
  draft.set_text("address.zip", "12a45");
  let result = ValidationEngine::default().validate(&draft, &schema()).unwrap();
  let err = result.error("address.zip").unwrap();
  assert_eq!(err.kind, FieldErrorKind::PatternMismatch);
  assert_eq!(err.message, "five digits");
  assert_eq!(result.error_count(), 1);
}

#[test]
fn optional_value_is_still_checked_against_format() {
  let mut draft = Draft::new();
  draft.set_flag("isForeignCountry", true);
  draft.set_text("address.city", "Springfield");
  // zip is not required in foreign mode, but a present value must match
  draft.set_text("address.zip", "nope");
  let result = ValidationEngine::default().validate(&draft, &schema()).unwrap();
  assert_eq!(result.error("address.zip").unwrap().kind, FieldErrorKind::PatternMismatch);
  draft.remove("address.zip");
  let result = ValidationEngine::default().validate(&draft, &schema()).unwrap();
  assert!(result.is_valid());
}

#[test]
fn fields_outside_the_schema_are_not_reported() {
  let mut draft = Draft::new();
  draft.set_text("address.city", "Springfield");
  draft.set_text("address.zip", "12345");
  draft.set_text("address.province", "???");
  draft.set_text("somethingElse", "");
  let result = ValidationEngine::default().validate(&draft, &schema()).unwrap();
  assert!(result.is_valid());
  assert!(result.status("address.province").is_none());
  assert!(result.status("somethingElse").is_none());
  assert_eq!(result.keys().collect::<Vec<_>>(), vec!["address.city", "address.aptNo", "address.zip"]);
}

#[test]
fn validating_twice_yields_identical_results() {
  let mut draft = Draft::new();
  draft.set_text("address.zip", "1234");
  let engine = ValidationEngine::default();
  let s = schema();
  let first = engine.validate(&draft, &s).unwrap();
  let second = engine.validate(&draft, &s).unwrap();
  assert_eq!(first, second);
}

#[test]
fn trim_input_treats_whitespace_as_empty() {
  let mut draft = Draft::new();
  draft.set_text("address.city", "   ");
  draft.set_text("address.zip", " 12345 ");

  let raw = ValidationEngine::default().validate(&draft, &schema()).unwrap();
  assert!(raw.error("address.city").is_none());
  assert_eq!(raw.error("address.zip").unwrap().kind, FieldErrorKind::PatternMismatch);

  let trimming = ValidationEngine::new(ValidationEngineConfig { trim_input: true });
  let trimmed = trimming.validate(&draft, &schema()).unwrap();
  assert_eq!(trimmed.error("address.city").unwrap().kind, FieldErrorKind::Required);
  assert!(trimmed.error("address.zip").is_none());
}

#[test]
fn value_of_the_wrong_kind_is_a_mismatch() {
  let mut s = schema();
  s.push(FieldSchema::flag("isForeignCountry"));
  let draft = Draft::from_json(&serde_json::json!({
    "isForeignCountry": "yes",
    "address": { "city": true, "aptNo": false, "zip": "12345" }
  })).unwrap();
  let result = ValidationEngine::default().validate(&draft, &s).unwrap();
  let city = result.error("address.city").unwrap();
  assert_eq!(city.kind, FieldErrorKind::PatternMismatch);
  assert_eq!(city.message, WRONG_KIND_TEXT_MESSAGE);
  // optional text fields reject flags as well
  assert_eq!(result.error("address.aptNo").unwrap().message, WRONG_KIND_TEXT_MESSAGE);
  assert_eq!(result.error("isForeignCountry").unwrap().message, WRONG_KIND_FLAG_MESSAGE);
  assert_eq!(result.status("address.zip"), Some(&FieldStatus::Ok));
}

#[test]
fn draft_value_is_the_text_patterns_see() {
  let mut draft = Draft::new();
  draft.set_text("ssid", " 123-45-6789 ");
  draft.set_flag("isForeignCountry", true);
  assert_eq!(draft.value("ssid", true), Some("123-45-6789"));
  assert_eq!(draft.value("ssid", false), Some(" 123-45-6789 "));
  assert_eq!(draft.value("isForeignCountry", true), None);
  assert_eq!(draft.value("missing", true), None);
}
