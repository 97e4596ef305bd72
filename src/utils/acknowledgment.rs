/// Identifies one raise of an [`Acknowledgment`]. Only the most recent ticket
/// may lower the flag again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AckTicket(u64);

/// Transient "thank you" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Acknowledgment {
    issued: u64,
    active: bool,
}

impl Acknowledgment {
    pub fn raise(&mut self) -> AckTicket {
        self.issued += 1;
        self.active = true;
        AckTicket(self.issued)
    }

    /// Lowers the flag if `ticket` is the latest one. Returns whether it did.
    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if self.active && ticket.0 == self.issued {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticket of the raise currently showing, if any.
    pub fn pending(&self) -> Option<AckTicket> {
        self.active.then_some(AckTicket(self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_ticket_does_not_lower() {
        let mut ack = Acknowledgment::default();
        let first = ack.raise();
        let second = ack.raise();

        assert!(!ack.expire(first));
        assert!(ack.is_active());
        assert!(ack.expire(second));
        assert!(!ack.is_active());
        assert_eq!(ack.pending(), None);
    }

    #[test]
    fn test_clear_then_expire_is_noop() {
        let mut ack = Acknowledgment::default();
        let ticket = ack.raise();
        assert_eq!(ack.pending(), Some(ticket));
        ack.clear();
        assert!(!ack.expire(ticket));
    }
}
