//! tax-workflow: asistente de datos del contribuyente
//!
//! Reúne las reglas de formato por campo, el resolvedor de esquemas
//! condicionales, el mapeo a entidades de `tax_domain` y el controlador que
//! valida, confirma en el `TaxStore` y avanza de paso.
//!
//! ```
//! use tax_workflow::{WizardConfig, WizardFactory};
//!
//! let mut wizard = WizardFactory::in_memory(&WizardConfig::default()).unwrap();
//! let outcome = wizard.submit().unwrap();
//! assert!(!outcome.is_committed());
//! assert_eq!(wizard.nav_affordances().position, 0);
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod factory;
pub mod flows;
pub mod step;
pub mod step_kind;

pub use config::WizardConfig;
pub use engine::{CommitOutcome, CommitState, NavAffordances, Pager, PriorStepControls, StepAdvance, StepCommitController};
pub use errors::WorkflowError;
pub use factory::WizardFactory;
pub use flows::taxpayer_flow::steps::{SpouseInfoStep, TaxpayerInfoStep};
pub use flows::TaxpayerWizard;
pub use step::WizardStep;
pub use step_kind::StepKind;
