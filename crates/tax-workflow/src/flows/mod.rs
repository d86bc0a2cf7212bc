pub mod taxpayer_flow;

pub use taxpayer_flow::TaxpayerWizard;
