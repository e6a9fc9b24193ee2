use web_sys::js_sys;

/// Wrong answers allowed before a form locks.
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
        }
    }
}

/// An arithmetic human-check over two small integers. Subtraction keeps the
/// larger operand first so the displayed question never has a negative answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaChallenge {
    a: u32,
    b: u32,
    op: Operator,
}

impl CaptchaChallenge {
    pub fn new(a: u32, b: u32, op: Operator) -> Self {
        match op {
            Operator::Sub if b > a => Self { a: b, b: a, op },
            _ => Self { a, b, op },
        }
    }

    /// Builds a challenge from a picker returning a value in `lo..=hi`.
    /// Keeping the picker injectable keeps the generator deterministic in tests.
    pub fn generate<R: FnMut(u32, u32) -> u32>(mut pick: R) -> Self {
        let a = pick(1, 10);
        let b = pick(1, 10);
        let op = if pick(0, 1) == 0 {
            Operator::Add
        } else {
            Operator::Sub
        };
        Self::new(a, b, op)
    }

    pub fn random() -> Self {
        Self::generate(|lo, hi| {
            let span = (hi - lo + 1) as f64;
            lo + (js_sys::Math::random() * span) as u32
        })
    }

    pub fn question(&self) -> String {
        format!("¿Cuánto es {} {} {}?", self.a, self.op.symbol(), self.b)
    }

    pub fn expected(&self) -> u32 {
        match self.op {
            Operator::Add => self.a + self.b,
            Operator::Sub => self.a - self.b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptchaState {
    Pending,
    Resolved,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Retry { attempts_left: u32 },
    Locked,
}

/// Per-form challenge/response session. The expected answer and the retry
/// counter live here instead of in ambient globals, so each form owns its own
/// lockout state and the machine can be driven in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    challenge: CaptchaChallenge,
    attempts: u32,
    state: CaptchaState,
}

impl FormSession {
    pub fn new(challenge: CaptchaChallenge) -> Self {
        Self {
            challenge,
            attempts: 0,
            state: CaptchaState::Pending,
        }
    }

    pub fn challenge(&self) -> &CaptchaChallenge {
        &self.challenge
    }

    pub fn state(&self) -> CaptchaState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == CaptchaState::Locked
    }

    /// Checks an answer against the current challenge. `next` supplies the
    /// replacement challenge; the old answer is invalidated on every miss and
    /// after a success. Input that does not parse counts as a mismatch.
    pub fn submit<F: FnOnce() -> CaptchaChallenge>(
        &mut self,
        answer: &str,
        next: F,
    ) -> SubmitOutcome {
        if self.state == CaptchaState::Locked {
            return SubmitOutcome::Locked;
        }
        let parsed = answer.trim().parse::<u32>().ok();
        if parsed == Some(self.challenge.expected()) {
            self.state = CaptchaState::Resolved;
            self.attempts = 0;
            self.challenge = next();
            SubmitOutcome::Accepted
        } else {
            self.attempts += 1;
            if self.attempts >= MAX_ATTEMPTS {
                self.state = CaptchaState::Locked;
                SubmitOutcome::Locked
            } else {
                self.challenge = next();
                SubmitOutcome::Retry {
                    attempts_left: MAX_ATTEMPTS - self.attempts,
                }
            }
        }
    }

    /// Re-opens a resolved session for another submission. The challenge was
    /// already regenerated on success, so only the state flips back.
    pub fn rearm(&mut self) {
        if self.state == CaptchaState::Resolved {
            self.state = CaptchaState::Pending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(a: u32, b: u32, op: Operator) -> impl FnOnce() -> CaptchaChallenge {
        move || CaptchaChallenge::new(a, b, op)
    }

    #[test]
    fn displayed_answer_matches_expected_for_all_operand_pairs() {
        for a in 1..=10u32 {
            for b in 1..=10u32 {
                let add = CaptchaChallenge::new(a, b, Operator::Add);
                assert_eq!(add.expected(), a + b);
                assert!(add.question().contains('+'));

                let sub = CaptchaChallenge::new(a, b, Operator::Sub);
                // larger - smaller, never negative
                assert_eq!(sub.expected(), a.max(b) - a.min(b));
            }
        }
    }

    #[test]
    fn generate_stays_inside_the_requested_ranges() {
        // Picker that always returns the upper bound.
        let c = CaptchaChallenge::generate(|_, hi| hi);
        assert_eq!(c, CaptchaChallenge::new(10, 10, Operator::Sub));
        assert_eq!(c.expected(), 0);

        let c = CaptchaChallenge::generate(|lo, _| lo);
        assert_eq!(c, CaptchaChallenge::new(1, 1, Operator::Add));
        assert_eq!(c.expected(), 2);
    }

    #[test]
    fn correct_answer_resolves_and_resets_the_counter() {
        let mut session = FormSession::new(CaptchaChallenge::new(7, 3, Operator::Add));
        assert_eq!(
            session.submit("99", fixed(2, 2, Operator::Add)),
            SubmitOutcome::Retry { attempts_left: 2 }
        );
        assert_eq!(
            session.submit("4", fixed(5, 1, Operator::Sub)),
            SubmitOutcome::Accepted
        );
        assert_eq!(session.state(), CaptchaState::Resolved);
        // challenge regenerated after success, old answer no longer valid
        assert_eq!(session.challenge().expected(), 4);
    }

    #[test]
    fn a_miss_invalidates_the_previous_answer() {
        let mut session = FormSession::new(CaptchaChallenge::new(7, 3, Operator::Add));
        session.submit("11", fixed(9, 4, Operator::Sub));
        // the original answer (10) is stale now
        assert_eq!(
            session.submit("10", fixed(1, 1, Operator::Add)),
            SubmitOutcome::Retry { attempts_left: 1 }
        );
    }

    #[test]
    fn two_wrong_answers_do_not_lock() {
        let mut session = FormSession::new(CaptchaChallenge::new(2, 2, Operator::Add));
        session.submit("0", fixed(2, 2, Operator::Add));
        session.submit("0", fixed(2, 2, Operator::Add));
        assert_eq!(session.state(), CaptchaState::Pending);
        assert!(!session.is_locked());
    }

    #[test]
    fn three_wrong_answers_lock_the_form() {
        let mut session = FormSession::new(CaptchaChallenge::new(2, 2, Operator::Add));
        session.submit("0", fixed(2, 2, Operator::Add));
        session.submit("0", fixed(2, 2, Operator::Add));
        assert_eq!(
            session.submit("0", fixed(2, 2, Operator::Add)),
            SubmitOutcome::Locked
        );
        assert!(session.is_locked());
        // locked is terminal, even a correct answer is rejected
        assert_eq!(
            session.submit("4", fixed(2, 2, Operator::Add)),
            SubmitOutcome::Locked
        );
    }

    #[test]
    fn success_between_misses_resets_the_counter() {
        let mut session = FormSession::new(CaptchaChallenge::new(2, 2, Operator::Add));
        session.submit("0", fixed(3, 3, Operator::Add));
        session.submit("0", fixed(1, 1, Operator::Add));
        assert_eq!(
            session.submit("2", fixed(5, 5, Operator::Add)),
            SubmitOutcome::Accepted
        );
        session.rearm();
        assert_eq!(session.state(), CaptchaState::Pending);
        // counter started over: two fresh misses still do not lock
        session.submit("0", fixed(5, 5, Operator::Add));
        session.submit("0", fixed(5, 5, Operator::Add));
        assert!(!session.is_locked());
    }

    #[test]
    fn unparsable_input_counts_as_a_mismatch() {
        let mut session = FormSession::new(CaptchaChallenge::new(2, 2, Operator::Add));
        assert_eq!(
            session.submit("cuatro", fixed(2, 2, Operator::Add)),
            SubmitOutcome::Retry { attempts_left: 2 }
        );
        assert_eq!(
            session.submit("", fixed(2, 2, Operator::Add)),
            SubmitOutcome::Retry { attempts_left: 1 }
        );
    }

    #[test]
    fn answer_with_surrounding_whitespace_is_accepted() {
        let mut session = FormSession::new(CaptchaChallenge::new(6, 2, Operator::Sub));
        assert_eq!(
            session.submit("  4 ", fixed(2, 2, Operator::Add)),
            SubmitOutcome::Accepted
        );
    }
}
