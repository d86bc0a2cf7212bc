mod address;
mod domain_store;
mod domain_stubs;
mod errors;
pub mod patterns;
mod person;
mod ssid;
mod tax_payer;

pub use address::{Address, Locality};
pub use domain_store::{CommitReceipt, InMemoryTaxStore, TaxStore};
pub use errors::DomainError;
pub use person::{Person, PersonRole, PrimaryPerson};
pub use ssid::{Ssid, UsState};
pub use tax_payer::{Information, SliceKind, StateSlice, TaxPayer, TaxesState};
// Re-export stubs so the workflow crate and demos can seed a store
pub use domain_stubs::DomainStubs;
