//! Dismissal state machine of a single toast.
//!
//! ```text
//!            hover enter             hover leave (resume countdown)
//! Scheduled ─────────────► Paused ─────────────────────────────► Scheduled
//!     │ deadline / close      │ close
//!     ▼                       ▼
//!  Leaving ◄──────────────────┘
//!     │ exit interval elapsed
//!     ▼
//!  Removed
//! ```
//!
//! Once a toast is `Leaving` no hover or close event can schedule anything else,
//! so a fired timer and a manual close can never both remove it.

use std::time::Duration;

/// Durations governing the toast lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    /// Time on screen before auto-dismiss
    pub display: Duration,
    /// Countdown restarted after the pointer leaves a hovered toast
    pub resume: Duration,
    /// Length of the exit animation before the element is detached
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self::with_display(Duration::from_millis(2500))
    }
}

impl ToastTimings {
    /// Timings for a given display time. The resume countdown is two thirds
    /// of it and the exit animation keeps its default length.
    ///
    /// # Example
    ///
    /// ```
    /// use dxhealth::toast::ToastTimings;
    /// use std::time::Duration;
    ///
    /// let timings = ToastTimings::with_display(Duration::from_millis(300));
    /// assert_eq!(timings.resume, Duration::from_millis(200));
    /// assert_eq!(timings.exit, Duration::from_millis(160));
    /// ```
    pub fn with_display(display: Duration) -> Self {
        Self {
            display,
            resume: display * 2 / 3,
            exit: Duration::from_millis(160),
        }
    }
}

/// Where a toast is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Visible, auto-dismiss due at `deadline`
    Scheduled { deadline: Duration },
    /// Visible and hovered, no countdown
    Paused,
    /// Exit animation running until `until`
    Leaving { until: Duration },
    /// Detached; terminal
    Removed,
}

/// What the owner has to do after [`Lifecycle::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Nothing due yet
    Idle,
    /// Auto-dismiss fired: start the exit animation
    Exit,
    /// Exit animation finished: detach the element
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifecycle {
    phase: Phase,
    timings: ToastTimings,
}

impl Lifecycle {
    /// Starts a visible toast at `now`.
    pub fn start(now: Duration, timings: ToastTimings) -> Self {
        Self {
            phase: Phase::Scheduled {
                deadline: now + timings.display,
            },
            timings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Next time at which [`poll`](Self::poll) has work to do.
    pub fn deadline(&self) -> Option<Duration> {
        match self.phase {
            Phase::Scheduled { deadline } => Some(deadline),
            Phase::Leaving { until } => Some(until),
            Phase::Paused | Phase::Removed => None,
        }
    }

    /// Pointer entered: cancels the countdown. Returns true if it was running.
    pub fn hover_enter(&mut self) -> bool {
        match self.phase {
            Phase::Scheduled { .. } => {
                self.phase = Phase::Paused;
                true
            }
            _ => false,
        }
    }

    /// Pointer left: restarts a shortened countdown. Returns true if paused.
    pub fn hover_leave(&mut self, now: Duration) -> bool {
        match self.phase {
            Phase::Paused => {
                self.phase = Phase::Scheduled {
                    deadline: now + self.timings.resume,
                };
                true
            }
            _ => false,
        }
    }

    /// Manual close: cancels the countdown and starts leaving.
    ///
    /// Returns true if the toast was visible, false if it was already leaving
    /// or removed.
    pub fn dismiss(&mut self, now: Duration) -> bool {
        match self.phase {
            Phase::Scheduled { .. } | Phase::Paused => {
                self.phase = Phase::Leaving {
                    until: now + self.timings.exit,
                };
                true
            }
            Phase::Leaving { .. } | Phase::Removed => false,
        }
    }

    /// Marks the toast removed without animating, e.g. when its element
    /// vanished from the document.
    pub fn discard(&mut self) {
        self.phase = Phase::Removed;
    }

    /// Advances the transition due at `now`, if any.
    ///
    /// The exit interval counts from the poll that starts it, so a late poll
    /// still leaves the full animation on screen before `Remove`.
    pub fn poll(&mut self, now: Duration) -> Step {
        match self.phase {
            Phase::Scheduled { deadline } if deadline <= now => {
                self.phase = Phase::Leaving {
                    until: now + self.timings.exit,
                };
                Step::Exit
            }
            Phase::Leaving { until } if until <= now => {
                self.phase = Phase::Removed;
                Step::Remove
            }
            _ => Step::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_default_timings() {
        let timings = ToastTimings::default();
        assert_eq!(timings.display, ms(2500));
        assert_eq!(timings.exit, ms(160));
        assert!(timings.resume > ms(1666) && timings.resume < ms(1667));
    }

    #[test]
    fn test_with_display_scales_resume() {
        let timings = ToastTimings::with_display(ms(300));
        assert_eq!(timings.resume, ms(200));
        assert_eq!(timings.exit, ms(160));

        let instant = ToastTimings::with_display(Duration::ZERO);
        assert_eq!(instant.resume, Duration::ZERO);
        let mut life = Lifecycle::start(ms(0), instant);
        life.hover_enter();
        assert!(life.hover_leave(ms(50)));
        assert_eq!(life.deadline(), Some(ms(50)));
    }

    #[test]
    fn test_auto_dismiss_then_remove() {
        let mut life = Lifecycle::start(ms(0), ToastTimings::default());
        assert_eq!(life.deadline(), Some(ms(2500)));
        assert_eq!(life.poll(ms(2499)), Step::Idle);

        assert_eq!(life.poll(ms(2500)), Step::Exit);
        assert_eq!(life.phase(), Phase::Leaving { until: ms(2660) });
        assert_eq!(life.poll(ms(2600)), Step::Idle);

        assert_eq!(life.poll(ms(2660)), Step::Remove);
        assert!(life.is_removed());
        assert_eq!(life.deadline(), None);
        assert_eq!(life.poll(ms(10_000)), Step::Idle);
    }

    #[test]
    fn test_late_poll_keeps_full_exit_animation() {
        let mut life = Lifecycle::start(ms(0), ToastTimings::default());
        assert_eq!(life.poll(ms(5000)), Step::Exit);
        assert_eq!(life.phase(), Phase::Leaving { until: ms(5160) });
        assert_eq!(life.poll(ms(5000)), Step::Idle);
        assert_eq!(life.poll(ms(5159)), Step::Idle);
        assert_eq!(life.poll(ms(5160)), Step::Remove);
    }

    #[test]
    fn test_hover_pauses_and_leave_shortens() {
        let timings = ToastTimings::default();
        let mut life = Lifecycle::start(ms(0), timings);

        assert!(life.hover_enter());
        assert_eq!(life.phase(), Phase::Paused);
        assert_eq!(life.poll(ms(60_000)), Step::Idle);

        assert!(life.hover_leave(ms(60_000)));
        assert_eq!(life.deadline(), Some(ms(60_000) + timings.resume));
    }

    #[test]
    fn test_leave_without_enter_is_ignored() {
        let mut life = Lifecycle::start(ms(0), ToastTimings::default());
        assert!(!life.hover_leave(ms(100)));
        assert_eq!(life.deadline(), Some(ms(2500)));
    }

    #[test]
    fn test_dismiss_cancels_countdown() {
        let mut life = Lifecycle::start(ms(0), ToastTimings::default());
        assert!(life.dismiss(ms(100)));
        assert_eq!(life.deadline(), Some(ms(260)));

        // A second close or a hover does not reschedule.
        assert!(!life.dismiss(ms(150)));
        assert!(!life.hover_enter());
        assert!(!life.hover_leave(ms(150)));

        assert_eq!(life.poll(ms(260)), Step::Remove);
    }

    #[test]
    fn test_dismiss_while_paused() {
        let mut life = Lifecycle::start(ms(0), ToastTimings::default());
        life.hover_enter();
        assert!(life.dismiss(ms(4000)));
        assert_eq!(life.phase(), Phase::Leaving { until: ms(4160) });
    }

    #[test]
    fn test_discard() {
        let mut life = Lifecycle::start(ms(0), ToastTimings::default());
        life.discard();
        assert!(life.is_removed());
        assert!(!life.dismiss(ms(1)));
    }
}
