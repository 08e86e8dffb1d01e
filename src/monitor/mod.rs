//! Search monitors.
//!
//! Monitors observe the permutation search and may ask it to stop. The
//! optimizer polls [`SearchMonitor::search_command`] once per candidate
//! ordering, so cancellation is cooperative and takes effect within one
//! evaluation.
//!
//! | Monitor | Terminates when |
//! |---------|-----------------|
//! | `NoOpMonitor` | never |
//! | `InterruptMonitor` | a shared `AtomicBool` is set |
//! | `TimeLimitMonitor` | a wall-clock budget is exhausted |
//! | `CompositeMonitor` | any child monitor terminates |

mod composite;
mod interrupt;
mod no_op;
mod search_monitor;
mod time_limit;

pub use composite::CompositeMonitor;
pub use interrupt::InterruptMonitor;
pub use no_op::NoOpMonitor;
pub use search_monitor::{SearchCommand, SearchMonitor};
pub use time_limit::TimeLimitMonitor;
