use crate::debounce::ScanDebouncer;
use crate::error::ScanError;
use crate::lookup::LookupOutcome;
use crate::parser::parse_member;
use derive_getters::Getters;
use dto::member_record::MemberRecord;
use dto::parsed_member::ParsedMember;
use log::debug;
use std::time::Instant;

/// What the view layer should render.
///
/// The whole cycle lives in one value: there is no way to be both loading
/// and resolved, and an unknown document number is `NotFound`, never mistaken
/// for a lookup still in flight.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LookupState {
    Idle,
    Loading {
        scanned: ParsedMember,
    },
    Found {
        scanned: ParsedMember,
        record: MemberRecord,
    },
    NotFound {
        scanned: ParsedMember,
    },
    Failed {
        scanned: ParsedMember,
        error: String,
    },
}

/// A lookup accepted by the gate, tagged with the sequence number of the
/// scan that triggered it. Resolving the session with a stale tag is a
/// no-op, so a slow answer can't overwrite the state of a newer scan.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct PendingLookup {
    sequence: u64,
    member: ParsedMember,
}

/// State machine driving one scan-render cycle.
///
/// Events come from the host shell: decoded camera frames, the unlock timer,
/// app lifecycle transitions and the "scan again" button. Each accepted scan
/// replaces the previous cycle wholesale.
pub struct ScanSession {
    debouncer: ScanDebouncer,
    sequence: u64,
    state: LookupState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::with_debouncer(ScanDebouncer::new())
    }

    pub fn with_debouncer(debouncer: ScanDebouncer) -> Self {
        Self {
            debouncer,
            sequence: 0,
            state: LookupState::Idle,
        }
    }

    /// Camera frame event. An empty payload neither locks the gate nor
    /// triggers a lookup; a payload arriving while the gate is locked is
    /// dropped. An accepted payload bumps the sequence, parses the card and
    /// moves the session to `Loading`.
    pub fn on_scan(&mut self, raw: &str, now: Instant) -> Option<PendingLookup> {
        if raw.trim().is_empty() {
            return None;
        }

        if !self.debouncer.try_lock(now) {
            return None;
        }

        self.sequence += 1;
        let member = parse_member(raw);
        self.state = LookupState::Loading {
            scanned: member.clone(),
        };

        Some(PendingLookup {
            sequence: self.sequence,
            member,
        })
    }

    /// Apply the outcome of a lookup. Outcomes tagged with a sequence number
    /// older than the current scan are discarded.
    pub fn resolve(&mut self, pending: &PendingLookup, outcome: Result<LookupOutcome, ScanError>) {
        if pending.sequence != self.sequence {
            debug!(
                "Discarding stale lookup [sequence: {}, current: {}]",
                pending.sequence, self.sequence
            );
            return;
        }

        let scanned = pending.member.clone();
        self.state = match outcome {
            Ok(LookupOutcome::Found(record)) => LookupState::Found { scanned, record },
            Ok(LookupOutcome::NotFound) => LookupState::NotFound { scanned },
            Err(error) => LookupState::Failed {
                scanned,
                error: error.to_string(),
            },
        };
    }

    /// The host's unlock timer fired: re-arm the gate.
    pub fn on_unlock_timeout(&mut self) {
        self.debouncer.unlock();
    }

    /// The app came back to the foreground: re-arm the gate immediately,
    /// even when the lock window hasn't elapsed yet.
    pub fn on_foreground(&mut self) {
        self.debouncer.unlock();
    }

    /// "Scan again" button: drop the current result and re-offer the camera.
    pub fn scan_again(&mut self) {
        self.state = LookupState::Idle;
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScanError::ConnectionFailed;
    use crate::lookup::LookupOutcome;
    use crate::session::{LookupState, ScanSession};
    use dto::member_record::tests::activo_senior_record;
    use dto::parsed_member::tests::{jon_doe, jon_doe_card_payload};
    use std::time::{Duration, Instant};

    #[test]
    fn should_start_idle() {
        let session = ScanSession::new();

        assert_eq!(&LookupState::Idle, session.state());
    }

    #[test]
    fn should_move_to_loading_on_accepted_scan() {
        let mut session = ScanSession::new();

        let pending = session.on_scan(&jon_doe_card_payload(), Instant::now());

        assert_eq!(&jon_doe(), pending.unwrap().member());
        assert_eq!(
            &LookupState::Loading { scanned: jon_doe() },
            session.state()
        );
    }

    #[test]
    fn should_not_trigger_on_empty_payload_nor_lock_the_gate() {
        let mut session = ScanSession::new();
        let now = Instant::now();

        assert_eq!(None, session.on_scan("", now));
        assert_eq!(None, session.on_scan("   \r\n", now));
        assert_eq!(&LookupState::Idle, session.state());

        // The gate is still armed: a real payload goes through right away.
        assert!(session.on_scan(&jon_doe_card_payload(), now).is_some());
    }

    #[test]
    fn should_drop_second_scan_within_lock_window() {
        let mut session = ScanSession::new();
        let start = Instant::now();

        let first = session.on_scan(&jon_doe_card_payload(), start);
        let second = session.on_scan(
            &jon_doe_card_payload(),
            start + Duration::from_millis(500),
        );

        assert!(first.is_some());
        assert_eq!(None, second);
    }

    #[test]
    fn should_accept_scan_after_lock_window() {
        let mut session = ScanSession::new();
        let start = Instant::now();

        session.on_scan(&jon_doe_card_payload(), start);
        let second = session.on_scan(&jon_doe_card_payload(), start + Duration::from_secs(1));

        assert!(second.is_some());
    }

    #[test]
    fn should_accept_scan_right_after_foreground_transition() {
        let mut session = ScanSession::new();
        let start = Instant::now();

        session.on_scan(&jon_doe_card_payload(), start);
        session.on_foreground();
        let second = session.on_scan(
            &jon_doe_card_payload(),
            start + Duration::from_millis(10),
        );

        assert!(second.is_some());
    }

    #[test]
    fn should_resolve_to_found() {
        let mut session = ScanSession::new();
        let pending = session
            .on_scan(&jon_doe_card_payload(), Instant::now())
            .unwrap();

        session.resolve(&pending, Ok(LookupOutcome::Found(activo_senior_record())));

        assert_eq!(
            &LookupState::Found {
                scanned: jon_doe(),
                record: activo_senior_record(),
            },
            session.state()
        );
    }

    #[test]
    fn should_resolve_to_not_found_distinct_from_loading() {
        let mut session = ScanSession::new();
        let pending = session
            .on_scan(&jon_doe_card_payload(), Instant::now())
            .unwrap();

        session.resolve(&pending, Ok(LookupOutcome::NotFound));

        assert_eq!(&LookupState::NotFound { scanned: jon_doe() }, session.state());
    }

    #[test]
    fn should_resolve_to_failed_on_lookup_error() {
        let mut session = ScanSession::new();
        let pending = session
            .on_scan(&jon_doe_card_payload(), Instant::now())
            .unwrap();

        session.resolve(&pending, Err(ConnectionFailed));

        assert_eq!(
            &LookupState::Failed {
                scanned: jon_doe(),
                error: ConnectionFailed.to_string(),
            },
            session.state()
        );
    }

    #[test]
    fn should_discard_stale_outcome_after_newer_scan() {
        let mut session = ScanSession::new();
        let start = Instant::now();

        let first = session.on_scan(&jon_doe_card_payload(), start).unwrap();
        session.on_foreground();
        let second = session
            .on_scan(&jon_doe_card_payload(), start + Duration::from_millis(10))
            .unwrap();

        // The answer of the first scan arrives after the second started.
        session.resolve(&first, Ok(LookupOutcome::NotFound));
        assert_eq!(
            &LookupState::Loading { scanned: jon_doe() },
            session.state()
        );

        session.resolve(&second, Ok(LookupOutcome::Found(activo_senior_record())));
        assert_eq!(
            &LookupState::Found {
                scanned: jon_doe(),
                record: activo_senior_record(),
            },
            session.state()
        );
    }

    #[test]
    fn should_go_back_to_idle_on_scan_again() {
        let mut session = ScanSession::new();
        let pending = session
            .on_scan(&jon_doe_card_payload(), Instant::now())
            .unwrap();
        session.resolve(&pending, Ok(LookupOutcome::Found(activo_senior_record())));

        session.scan_again();

        assert_eq!(&LookupState::Idle, session.state());
    }
}
