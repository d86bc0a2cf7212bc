use crate::domain_store::InMemoryTaxStore;
use crate::{Address, DomainError, Person, PrimaryPerson, Ssid, TaxesState, UsState};

pub struct DomainStubs;

impl DomainStubs {
    /// Contribuyente con dirección en EE. UU.
    pub fn domestic_primary() -> Result<PrimaryPerson, DomainError> {
        let address = Address::domestic("742 Evergreen Terrace", None, "Springfield", UsState::parse("IL")?, "62704")?;
        Ok(PrimaryPerson::new("Homer", "Simpson", Ssid::parse("123-45-6789")?, address, false))
    }

    /// Contribuyente con dirección en el extranjero.
    pub fn foreign_primary() -> Result<PrimaryPerson, DomainError> {
        let address = Address::foreign("24 Sussex Drive", Some("2"), "Ottawa", "Ontario", "K1M 1M4", "Canada")?;
        Ok(PrimaryPerson::new("Jean", "Tremblay", Ssid::parse("987654321")?, address, true))
    }

    pub fn spouse() -> Result<Person, DomainError> {
        Ok(Person::spouse("Marge", "Simpson", Ssid::parse("111-22-3333")?))
    }

    /// Estado con un contribuyente principal doméstico ya guardado.
    pub fn sample_state() -> Result<TaxesState, DomainError> {
        let mut state = TaxesState::default();
        state.information.tax_payer.primary_person = Some(Self::domestic_primary()?);
        Ok(state)
    }

    /// Almacén en memoria pre-poblado con `sample_state`.
    pub fn sample_store() -> Result<InMemoryTaxStore, DomainError> {
        Ok(InMemoryTaxStore::with_state(Self::sample_state()?))
    }
}
