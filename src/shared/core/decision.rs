/// Outcome of a pure decide function.
///
/// Accepted decisions carry the events to append and the intents to hand to
/// the outbox. Rejected decisions carry the typed reason.
#[derive(Debug)]
pub enum Decision<TEvent, TIntent, TReason> {
    Accepted {
        events: Vec<TEvent>,
        intents: Vec<TIntent>,
    },
    Rejected {
        reason: TReason,
    },
}

impl<TEvent, TIntent, TReason> Decision<TEvent, TIntent, TReason> {
    pub fn accept(events: Vec<TEvent>) -> Self {
        Decision::Accepted {
            events,
            intents: Vec::new(),
        }
    }

    pub fn reject(reason: TReason) -> Self {
        Decision::Rejected { reason }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }
}
