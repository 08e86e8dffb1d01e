use super::search_monitor::{SearchCommand, SearchMonitor};

/// A monitor that never interferes with the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    pub fn new() -> Self {
        Self
    }
}

impl SearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_always_continues() {
        let mut monitor = NoOpMonitor::new();
        monitor.on_enter_search(5);
        monitor.on_step();
        monitor.on_improvement(&[0, 1], 3);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        assert_eq!(monitor.name(), "NoOpMonitor");
    }
}
