pub mod field_rules;
pub mod mapper;
pub mod resolver;
pub mod steps;
#[allow(clippy::module_inception)]
pub mod taxpayer_flow;

pub use taxpayer_flow::TaxpayerWizard;
