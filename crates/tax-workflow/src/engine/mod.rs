pub mod commit;
pub mod pager;

pub use commit::{CommitOutcome, CommitState, StepCommitController};
pub use pager::{NavAffordances, Pager, PriorStepControls, StepAdvance};
