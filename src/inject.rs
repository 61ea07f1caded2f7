//! Message injection: sending, the run loop and run statistics.

pub mod run;
pub mod sender;
pub mod stats;

pub use run::{build_injector, Injector, Preview};
pub use sender::{HttpSender, SendOutcome};
pub use stats::{FailureBreakdown, RunStats};
