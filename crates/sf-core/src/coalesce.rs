//! Opt-in coalescing of resize bursts.
//!
//! Dragging a window edge fires resize dozens of times a second. With a
//! non-zero delay, each signal hands out a ticket and the host arms a timer;
//! when the timer fires only the newest ticket runs a cycle.

/// Ticket for one deferred resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResize {
    generation: u64,
}

/// What the host should do with a window resize signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    /// Run a cycle right away.
    RunNow,
    /// Arm a timer for `delay_ms`; when it fires, run a cycle only if
    /// [`Coalescer::is_current`] still holds for `ticket`.
    Defer { ticket: PendingResize, delay_ms: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct Coalescer {
    delay_ms: u32,
    generation: u64,
}

impl Coalescer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
        }
    }

    /// Record a resize signal. With a zero delay every signal runs
    /// immediately; otherwise the new ticket supersedes any earlier one.
    pub fn on_resize(&mut self) -> ResizeAction {
        if self.delay_ms == 0 {
            return ResizeAction::RunNow;
        }
        self.generation = self.generation.wrapping_add(1);
        ResizeAction::Defer {
            ticket: PendingResize {
                generation: self.generation,
            },
            delay_ms: self.delay_ms,
        }
    }

    /// Whether `ticket` is still the latest resize.
    pub fn is_current(&self, ticket: PendingResize) -> bool {
        ticket.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticket(action: ResizeAction) -> PendingResize {
        match action {
            ResizeAction::Defer { ticket, .. } => ticket,
            ResizeAction::RunNow => panic!("expected a deferred resize"),
        }
    }

    #[test]
    fn zero_delay_runs_every_signal_now() {
        let mut coalescer = Coalescer::new(0);
        assert_eq!(coalescer.on_resize(), ResizeAction::RunNow);
        assert_eq!(coalescer.on_resize(), ResizeAction::RunNow);
    }

    #[test]
    fn non_zero_delay_defers_with_configured_delay() {
        let mut coalescer = Coalescer::new(16);
        match coalescer.on_resize() {
            ResizeAction::Defer { delay_ms, .. } => assert_eq!(delay_ms, 16),
            ResizeAction::RunNow => panic!("expected a deferred resize"),
        }
    }

    #[test]
    fn burst_of_three_leaves_one_current_ticket() {
        let mut coalescer = Coalescer::new(50);
        let tickets = [
            ticket(coalescer.on_resize()),
            ticket(coalescer.on_resize()),
            ticket(coalescer.on_resize()),
        ];

        let runs = tickets.iter().filter(|t| coalescer.is_current(**t)).count();

        assert_eq!(runs, 1);
        assert!(coalescer.is_current(tickets[2]));
    }

    #[test]
    fn ticket_stays_current_without_new_signals() {
        let mut coalescer = Coalescer::new(50);
        let ticket = ticket(coalescer.on_resize());
        assert!(coalescer.is_current(ticket));
        assert!(coalescer.is_current(ticket));
    }
}
