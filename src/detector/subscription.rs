/// Identifies one subscription attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holds at most one live subscription handle.
///
/// Every attempt starts with [`SubscriptionSlot::begin`], which drops the
/// previous handle before issuing a fresh ticket. Attempts finish
/// asynchronously (after a permission prompt), so a handle is only kept if
/// its ticket is still the latest one.
#[derive(Debug)]
pub struct SubscriptionSlot<T> {
    generation: u64,
    active: Option<T>,
}

impl<T> Default for SubscriptionSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SubscriptionSlot<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            active: None,
        }
    }

    pub fn begin(&mut self) -> Ticket {
        self.clear();
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Store `handle` if `ticket` is still current; a stale handle is
    /// dropped and `false` returned.
    pub fn install(&mut self, ticket: Ticket, handle: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.active = Some(handle);
        true
    }

    /// Drop the live handle and invalidate any attempt still in flight.
    pub fn clear(&mut self) {
        self.active = None;
        self.generation += 1;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
