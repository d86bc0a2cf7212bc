mod trait_step;

pub use trait_step::WizardStep;
