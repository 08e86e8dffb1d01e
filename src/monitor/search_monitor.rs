//! Monitor trait and the command it returns to the search.

use std::fmt;

/// Instruction returned by a monitor to the running search.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl SearchCommand {
    /// Whether the search should stop.
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, SearchCommand::Terminate(_))
    }
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Observer of the permutation search.
///
/// Lifecycle: `on_enter_search` once, then per candidate `on_step` followed
/// by `search_command`, `on_improvement` whenever the incumbent changes, and
/// `on_exit_search` once the search stops for any reason.
pub trait SearchMonitor {
    fn name(&self) -> &str;

    /// Called before the first candidate with the number of blocks.
    fn on_enter_search(&mut self, _block_count: usize) {}

    fn on_exit_search(&mut self) {}

    /// Called when a strictly cheaper ordering becomes the incumbent.
    fn on_improvement(&mut self, _order: &[usize], _cost: u64) {}

    fn on_step(&mut self) {}

    fn search_command(&self) -> SearchCommand;
}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self, block_count: usize) {
        (**self).on_enter_search(block_count)
    }

    fn on_exit_search(&mut self) {
        (**self).on_exit_search()
    }

    fn on_improvement(&mut self, order: &[usize], cost: u64) {
        (**self).on_improvement(order, cost)
    }

    fn on_step(&mut self) {
        (**self).on_step()
    }

    fn search_command(&self) -> SearchCommand {
        (**self).search_command()
    }
}

impl fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
