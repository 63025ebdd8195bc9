//! Ordering of customer refetches
//!
//! Every refetch gets a ticket. Only the newest ticket may write its result
//! or clear the loading flag, so a slow response cannot overwrite a newer one.

/// Ticket handed out for one customer refetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Tracks which customer refetch is the latest one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRefresh {
    issued: u64,
    pending: Option<u64>,
}

impl SessionRefresh {
    /// Start a refetch. Any refetch still outstanding becomes stale.
    pub fn begin(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        RefreshTicket(self.issued)
    }

    /// Settle a refetch.
    ///
    /// Returns `true` when `ticket` is the latest one; its result should be
    /// applied and loading is over. Stale tickets return `false`.
    pub fn finish(&mut self, ticket: RefreshTicket) -> bool {
        if self.pending != Some(ticket.0) {
            return false;
        }

        self.pending = None;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
