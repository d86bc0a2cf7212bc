use form::{Draft, FieldErrorKind, ValidationEngine, ValidationEngineConfig};
use serde_json::json;
use std::sync::Arc;
use tax_domain::{CommitReceipt, DomainError, InMemoryTaxStore, Locality, StateSlice, TaxStore, TaxesState};
use tax_workflow::flows::taxpayer_flow::field_rules::keys;
use tax_workflow::flows::taxpayer_flow::resolver::{self, TaxPayerToggles, DOMESTIC_GROUP, FOREIGN_GROUP};
use tax_workflow::{CommitOutcome, CommitState, StepAdvance, StepCommitController, TaxpayerInfoStep, WorkflowError};

/// Registra cuántas veces se pidió avanzar.
#[derive(Default)]
struct RecordingAdvance {
  calls: usize,
}

impl StepAdvance for RecordingAdvance {
  fn advance(&mut self) -> Result<(), WorkflowError> {
    self.calls += 1;
    Ok(())
  }
}

/// Almacén que rechaza toda escritura.
struct FailingStore;

impl TaxStore for FailingStore {
  fn snapshot(&self) -> Result<Arc<TaxesState>, DomainError> {
    Ok(Arc::new(TaxesState::default()))
  }

  fn write(&self, _slice: StateSlice) -> Result<CommitReceipt, DomainError> {
    Err(DomainError::StoreError("disco lleno".into()))
  }

  fn revision(&self) -> Result<u64, DomainError> {
    Ok(0)
  }
}

fn domestic_draft() -> Draft {
  Draft::from_json(&json!({
    "firstName": "Ada",
    "lastName": "Lovelace",
    "ssid": "123-45-6789",
    "isTaxpayerDependent": false,
    "isForeignCountry": false,
    "address": { "address": "1 Main St", "city": "Austin", "state": "TX", "zip": "73301" }
  })).unwrap()
}

fn foreign_draft_without_country() -> Draft {
  Draft::from_json(&json!({
    "firstName": "Jean",
    "lastName": "Tremblay",
    "ssid": "987654321",
    "isForeignCountry": true,
    "address": { "address": "24 Sussex Drive", "city": "Ottawa", "province": "Ontario", "postalCode": "K1M 1M4" }
  })).unwrap()
}

fn controller(store: Arc<dyn TaxStore>, draft: Draft) -> Result<StepCommitController, WorkflowError> {
  StepCommitController::with_draft(Arc::new(TaxpayerInfoStep), store, ValidationEngine::default(), draft)
}

#[test]
fn domestic_happy_path_commits_and_advances_once() -> Result<(), WorkflowError> {
  let store = Arc::new(InMemoryTaxStore::new());
  let mut ctl = controller(store.clone(), domestic_draft())?;
  let mut advance = RecordingAdvance::default();

  let outcome = ctl.submit(&mut advance)?;
  assert!(outcome.is_committed());
  assert_eq!(advance.calls, 1);
  assert!(matches!(ctl.state(), CommitState::Committed(r) if r.revision == 1));

  let person = store.snapshot()?.primary_person().cloned().expect("stored primary person");
  assert_eq!(person.ssid().as_str(), "123456789");
  assert!(!person.address().is_foreign());
  match person.address().locality() {
    Locality::Domestic { state, zip } => {
      assert_eq!(state.code(), "TX");
      assert_eq!(zip, "73301");
    }
    other => panic!("unexpected locality {:?}", other),
  }
  Ok(())
}

#[test]
fn foreign_without_country_reports_only_that_field() -> Result<(), WorkflowError> {
  let store = Arc::new(InMemoryTaxStore::new());
  let mut ctl = controller(store.clone(), foreign_draft_without_country())?;
  let mut advance = RecordingAdvance::default();

  let outcome = ctl.submit(&mut advance)?;
  let result = match outcome {
    CommitOutcome::Rejected(result) => result,
    other => panic!("expected rejection, got {:?}", other),
  };
  let errors: Vec<_> = result.errors().map(|(k, e)| (k.to_string(), e.kind)).collect();
  assert_eq!(errors, vec![(keys::FOREIGN_COUNTRY.to_string(), FieldErrorKind::Required)]);
  assert_eq!(ctl.field_error(keys::FOREIGN_COUNTRY).map(|e| e.message.as_str()), Some("Input is required"));
  assert_eq!(ctl.state(), &CommitState::RejectedWithErrors);
  assert_eq!(advance.calls, 0);
  assert_eq!(store.revision()?, 0);
  assert!(store.snapshot()?.primary_person().is_none());
  Ok(())
}

#[test]
fn resubmission_after_fix_commits() -> Result<(), WorkflowError> {
  let store = Arc::new(InMemoryTaxStore::new());
  let mut ctl = controller(store.clone(), foreign_draft_without_country())?;
  let mut advance = RecordingAdvance::default();

  assert!(!ctl.submit(&mut advance)?.is_committed());
  ctl.set_text(keys::FOREIGN_COUNTRY, "Canada")?;
  assert_eq!(ctl.state(), &CommitState::Editing);
  assert!(ctl.submit(&mut advance)?.is_committed());
  assert_eq!(advance.calls, 1);
  assert!(ctl.field_error(keys::FOREIGN_COUNTRY).is_none());
  Ok(())
}

#[test]
fn flipping_toggle_to_domestic_drops_foreign_requirements() -> Result<(), WorkflowError> {
  let store = Arc::new(InMemoryTaxStore::new());
  let mut ctl = controller(store.clone(), foreign_draft_without_country())?;
  assert!(ctl.active_schema().contains(keys::PROVINCE));

  ctl.set_flag(keys::IS_FOREIGN_COUNTRY, false)?;
  assert!(!ctl.active_schema().contains(keys::PROVINCE));
  assert!(ctl.active_schema().contains(keys::STATE));

  ctl.set_text(keys::STATE, "ON")?;
  ctl.set_text(keys::ZIP, "12345")?;
  let mut advance = RecordingAdvance::default();
  // "ON" no es un estado de EE. UU.
  let rejected = ctl.submit(&mut advance)?;
  assert!(!rejected.is_committed());
  assert_eq!(ctl.field_error(keys::STATE).map(|e| e.kind), Some(FieldErrorKind::PatternMismatch));

  ctl.set_text(keys::STATE, "NY")?;
  assert!(ctl.submit(&mut advance)?.is_committed());
  assert_eq!(advance.calls, 1);
  let person = store.snapshot()?.primary_person().cloned().expect("stored primary person");
  assert!(!person.address().is_foreign());
  Ok(())
}

#[test]
fn resolve_is_deterministic_and_groups_are_exclusive() -> Result<(), WorkflowError> {
  for foreign_address in [false, true] {
    for dependent in [false, true] {
      let toggles = TaxPayerToggles { foreign_address, dependent };
      let a = resolver::resolve(&domestic_draft(), toggles)?;
      let b = resolver::resolve(&Draft::new(), toggles)?;
      assert_eq!(a, b);
      assert_ne!(a.has_group(DOMESTIC_GROUP), a.has_group(FOREIGN_GROUP));
      assert_eq!(a.has_group(FOREIGN_GROUP), foreign_address);
      assert_eq!(a.toggle(keys::IS_TAXPAYER_DEPENDENT), Some(dependent));
    }
  }
  Ok(())
}

#[test]
fn invalid_patterns_are_reported_without_store_write() -> Result<(), WorkflowError> {
  let store = Arc::new(InMemoryTaxStore::new());
  let mut draft = domestic_draft();
  draft.set_text(keys::SSID, "12-345-678");
  draft.set_text(keys::ZIP, "7330");
  draft.set_text(keys::FIRST_NAME, "Ada1");
  let mut ctl = controller(store.clone(), draft)?;
  let mut advance = RecordingAdvance::default();

  let outcome = ctl.submit(&mut advance)?;
  assert!(!outcome.is_committed());
  let ssid = ctl.field_error(keys::SSID).cloned().expect("ssid error");
  assert_eq!(ssid.message, "Input should be filled with 9 numbers");
  let zip = ctl.field_error(keys::ZIP).cloned().expect("zip error");
  assert_eq!(zip.message, "Input should be filled with 5 or 9 numbers");
  let name = ctl.field_error(keys::FIRST_NAME).cloned().expect("name error");
  assert_eq!(name.message, "Input should only include English letters and spaces");
  assert_eq!(store.revision()?, 0);
  assert_eq!(advance.calls, 0);
  // el borrador queda intacto
  assert_eq!(ctl.draft().text(keys::ZIP), Some("7330"));
  Ok(())
}

#[test]
fn failed_store_write_keeps_editing_without_advancing() -> Result<(), WorkflowError> {
  let mut ctl = controller(Arc::new(FailingStore), domestic_draft())?;
  let mut advance = RecordingAdvance::default();

  let err = ctl.submit(&mut advance).unwrap_err();
  assert!(matches!(err, WorkflowError::Domain(DomainError::StoreError(_))));
  assert_eq!(ctl.state(), &CommitState::Editing);
  assert_eq!(advance.calls, 0);
  Ok(())
}

#[test]
fn trimmed_input_is_committed_in_trimmed_form() -> Result<(), WorkflowError> {
  let mut draft = domestic_draft();
  draft.set_text(keys::SSID, " 123-45-6789 ");
  draft.set_text(keys::STATE, "TX ");
  draft.set_text(keys::ZIP, " 73301 ");
  draft.set_text(keys::CITY, "Austin  ");
  let engine = ValidationEngine::new(ValidationEngineConfig { trim_input: true });
  let store = Arc::new(InMemoryTaxStore::new());
  let mut ctl = StepCommitController::with_draft(Arc::new(TaxpayerInfoStep), store.clone(), engine, draft)?;
  let mut advance = RecordingAdvance::default();

  assert!(ctl.submit(&mut advance)?.is_committed());
  assert_eq!(advance.calls, 1);
  let person = store.snapshot()?.primary_person().cloned().expect("stored primary person");
  assert_eq!(person.ssid().as_str(), "123456789");
  assert_eq!(person.address().city(), "Austin");
  match person.address().locality() {
    Locality::Domestic { state, zip } => {
      assert_eq!(state.code(), "TX");
      assert_eq!(zip, "73301");
    }
    other => panic!("unexpected locality {:?}", other),
  }
  Ok(())
}

#[test]
fn flag_in_a_text_field_is_rejected_before_mapping() -> Result<(), WorkflowError> {
  let mut draft = domestic_draft();
  draft.set_flag(keys::FIRST_NAME, true);
  draft.set_flag(keys::ADDRESS, false);
  let store = Arc::new(InMemoryTaxStore::new());
  let mut ctl = controller(store.clone(), draft)?;
  let mut advance = RecordingAdvance::default();

  let outcome = ctl.submit(&mut advance)?;
  assert!(!outcome.is_committed());
  assert_eq!(ctl.field_error(keys::FIRST_NAME).map(|e| e.kind), Some(FieldErrorKind::PatternMismatch));
  assert_eq!(ctl.field_error(keys::ADDRESS).map(|e| e.message.as_str()), Some(form::WRONG_KIND_TEXT_MESSAGE));
  assert_eq!(ctl.state(), &CommitState::RejectedWithErrors);
  assert_eq!(advance.calls, 0);
  assert_eq!(store.revision()?, 0);
  Ok(())
}

#[test]
fn resolved_group_is_required_from_toggles_alone() -> Result<(), WorkflowError> {
  // el borrador no tiene la casilla; manda `toggles`
  let empty = Draft::new();
  let foreign = resolver::resolve(&empty, TaxPayerToggles { foreign_address: true, dependent: false })?;
  let required: Vec<_> = foreign.required_keys(&empty).collect();
  for key in [keys::PROVINCE, keys::POSTAL_CODE, keys::FOREIGN_COUNTRY] {
    assert!(required.contains(&key), "{} should be required", key);
  }
  assert!(!required.contains(&keys::ZIP));

  let domestic = resolver::resolve(&foreign_draft_without_country(), TaxPayerToggles::default())?;
  let required: Vec<_> = domestic.required_keys(&empty).collect();
  assert!(required.contains(&keys::STATE) && required.contains(&keys::ZIP));
  assert!(!domestic.contains(keys::PROVINCE));
  Ok(())
}
