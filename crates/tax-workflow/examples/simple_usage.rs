// Runs the two-step wizard over an in-memory store, including one rejected
// submission, and prints the resulting store as JSON.
use form::Draft;
use serde_json::json;
use std::sync::Arc;
use tax_domain::{InMemoryTaxStore, TaxStore};
use tax_workflow::flows::taxpayer_flow::field_rules::keys;
use tax_workflow::{CommitOutcome, WizardConfig, WizardFactory};

fn main() {
    let store: Arc<dyn TaxStore> = Arc::new(InMemoryTaxStore::new());
    let mut wizard = WizardFactory::create(&WizardConfig::default(), store.clone()).expect("create wizard");

    let input = Draft::from_json(&json!({
        "firstName": "Jean",
        "lastName": "Tremblay",
        "ssid": "987-65-4321",
        "isForeignCountry": true,
        "address": { "address": "24 Sussex Drive", "city": "Ottawa", "province": "Ontario", "postalCode": "K1M 1M4" }
    }))
    .expect("draft");
    for (key, value) in input.iter() {
        match value {
            form::FieldValue::Flag(b) => wizard.controller_mut().set_flag(key, *b).expect("set flag"),
            form::FieldValue::Text(s) => wizard.controller_mut().set_text(key, s.clone()).expect("set text"),
        }
    }

    // foreignCountry is missing
    if let CommitOutcome::Rejected(result) = wizard.submit().expect("submit") {
        for (key, err) in result.errors() {
            println!("rejected: {} -> {} ({})", key, err.message, err.kind);
        }
    }

    wizard.controller_mut().set_text(keys::FOREIGN_COUNTRY, "Canada").expect("set text");
    let outcome = wizard.submit().expect("submit");
    println!("committed: {} now at {:?}", outcome.is_committed(), wizard.nav_affordances());

    let state = store.snapshot().expect("snapshot");
    println!("{}", serde_json::to_string_pretty(&*state).expect("serialize"));
}
