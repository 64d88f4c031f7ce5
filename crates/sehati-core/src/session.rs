//! Caller-side recompute policy for the profile screen.
//!
//! The decision components are pure and cheap, but the profile form changes
//! on every keystroke. The screen therefore recomputes flags and suggestions
//! only once edits have been quiet for a short while, and autosaves the
//! draft on an independent, slower timer. Both timers take the current
//! `Instant` from the caller so they stay deterministic under test.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::debug;

use sehati_contracts::{error::SehatiResult, profile::MedicalProfile, suggestion::ProfileReview};

use crate::assessor::Assessor;

/// Timer settings for a profile session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// Quiet period after the last edit before flags/suggestions recompute.
    pub debounce: Duration,
    /// Interval between draft autosaves.
    pub autosave: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            autosave: Duration::from_millis(8000),
        }
    }
}

/// Fires once after `quiet` has passed since the most recent `touch`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending_since: None,
        }
    }

    /// Record a change. Restarts the quiet period.
    pub fn touch(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// True exactly once per burst of changes, when the quiet period is over.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.quiet => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

/// Fires every `interval`, measured from construction or the last firing.
#[derive(Debug, Clone)]
pub struct AutosaveTimer {
    interval: Duration,
    last: Instant,
}

impl AutosaveTimer {
    pub fn new(interval: Duration, started: Instant) -> Self {
        Self {
            interval,
            last: started,
        }
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// What a `tick` did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tick {
    /// Fresh flags and suggestions, when the debounce fired.
    pub review: Option<ProfileReview>,
    /// True when the autosave wrote a changed draft.
    pub saved: bool,
}

/// One patient editing one profile draft.
pub struct ProfileSession<'a> {
    assessor: &'a Assessor,
    draft: MedicalProfile,
    recompute: Debouncer,
    autosave: AutosaveTimer,
    unsaved: bool,
}

impl<'a> ProfileSession<'a> {
    pub fn new(
        assessor: &'a Assessor,
        draft: MedicalProfile,
        timing: SessionTiming,
        now: Instant,
    ) -> Self {
        Self {
            assessor,
            draft,
            recompute: Debouncer::new(timing.debounce),
            autosave: AutosaveTimer::new(timing.autosave, now),
            unsaved: false,
        }
    }

    pub fn draft(&self) -> &MedicalProfile {
        &self.draft
    }

    /// An edit is waiting for its quiet period before the review reruns.
    pub fn review_pending(&self) -> bool {
        self.recompute.is_pending()
    }

    /// Replace the draft with the form's latest state.
    pub fn edit(&mut self, profile: MedicalProfile, now: Instant) {
        self.draft = profile;
        self.unsaved = true;
        self.recompute.touch(now);
    }

    /// Advance both timers to `now`.
    ///
    /// `today` anchors the age calculation of any recomputed suggestions.
    pub fn tick(&mut self, now: Instant, today: NaiveDate) -> SehatiResult<Tick> {
        let mut tick = Tick::default();

        if self.recompute.ready(now) {
            tick.review = Some(self.assessor.review_profile(&self.draft, today));
        }

        if self.autosave.due(now) && self.unsaved {
            tick.saved = self.assessor.save_draft(&self.draft)?;
            self.unsaved = false;
            debug!(changed = tick.saved, "autosave ran");
        }

        Ok(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn debounce_waits_for_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(500));

        assert!(!d.is_pending());
        assert!(!d.ready(t0), "nothing pending yet");

        d.touch(t0);
        assert!(!d.ready(t0 + ms(499)));
        assert!(d.is_pending());
        assert!(d.ready(t0 + ms(500)));
        // Consumed: does not fire again without a new touch.
        assert!(!d.is_pending());
        assert!(!d.ready(t0 + ms(2000)));
    }

    #[test]
    fn debounce_restarts_on_each_touch() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(500));

        d.touch(t0);
        d.touch(t0 + ms(400));
        assert!(!d.ready(t0 + ms(600)), "second edit restarted the quiet period");
        assert!(d.ready(t0 + ms(900)));
    }

    #[test]
    fn autosave_fires_every_interval() {
        let t0 = Instant::now();
        let mut timer = AutosaveTimer::new(ms(8000), t0);

        assert!(!timer.due(t0 + ms(7999)));
        assert!(timer.due(t0 + ms(8000)));
        assert!(!timer.due(t0 + ms(9000)));
        assert!(timer.due(t0 + ms(16000)));
    }

    #[test]
    fn default_timing_matches_profile_screen() {
        let timing = SessionTiming::default();
        assert_eq!(timing.debounce, ms(500));
        assert_eq!(timing.autosave, ms(8000));
    }
}
