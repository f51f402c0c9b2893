//! Assistant speech bubble state machine

use log::debug;
use serde::Serialize;

use super::messages::{Message, TIPS};
use crate::config::AssistantTimings;

/// Bubble phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BubblePhase {
    /// No bubble; the assistant walks around
    Idle,
    /// Bubble fully visible
    Showing,
    /// Bubble fading out
    Fading,
    /// Bubble gone for a while
    Hidden,
    /// Assistant dismissed for the session
    Dismissed,
}

/// One lap of the cycle: idle, showing, fading, hidden
const MAX_TRANSITIONS_PER_TICK: usize = 4;

/// A transition waiting on the clock
#[derive(Clone, Copy, Debug, PartialEq)]
struct Scheduled {
    due_ms: f64,
    to: BubblePhase,
}

/// Timer-driven speech bubble
///
/// At most one transition is pending at any time; scheduling a new one
/// replaces the old. The host calls [`Assistant::tick`] from its frame loop.
#[derive(Clone, Debug)]
pub struct Assistant {
    phase: BubblePhase,
    message: Message,
    /// When the current phase began
    since_ms: f64,
    pending: Option<Scheduled>,
    /// Whether the welcome has been shown
    welcomed: bool,
    timings: AssistantTimings,
}

impl Assistant {
    /// Start idle with the welcome message scheduled
    pub fn new(now_ms: f64, timings: AssistantTimings) -> Self {
        let mut assistant = Self {
            phase: BubblePhase::Idle,
            message: Message::Welcome,
            since_ms: now_ms,
            pending: None,
            welcomed: false,
            timings,
        };
        assistant.schedule(now_ms + timings.welcome_delay_ms, BubblePhase::Showing);
        assistant
    }

    /// Current phase
    pub fn phase(&self) -> BubblePhase {
        self.phase
    }

    /// Current message
    pub fn message(&self) -> Message {
        self.message
    }

    /// When the pending transition fires, if any
    pub fn next_transition_ms(&self) -> Option<f64> {
        self.pending.map(|p| p.due_ms)
    }

    /// Bubble opacity at `now_ms`
    pub fn opacity(&self, now_ms: f64) -> f32 {
        match self.phase {
            BubblePhase::Showing => 1.0,
            BubblePhase::Fading if self.timings.fade_ms > 0.0 => {
                let progress = ((now_ms - self.since_ms) / self.timings.fade_ms).clamp(0.0, 1.0);
                (1.0 - progress) as f32
            }
            _ => 0.0,
        }
    }

    /// Fire transitions due at `now_ms`; returns true if the phase changed
    ///
    /// At most one lap of the cycle runs per call, so a long gap between
    /// ticks (or zero-length timings) cannot spin.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut changed = false;

        for _ in 0..MAX_TRANSITIONS_PER_TICK {
            let Some(due) = self.pending.filter(|p| p.due_ms <= now_ms) else {
                break;
            };
            self.pending = None;
            if self.phase == BubblePhase::Idle && due.to == BubblePhase::Showing && self.welcomed {
                self.message = self.message.next(TIPS.len());
            }
            self.enter(due.to, due.due_ms);
            changed = true;
        }

        changed
    }

    /// Bubble clicked: advance to the next message now
    pub fn click_bubble(&mut self, now_ms: f64) {
        if self.phase == BubblePhase::Dismissed {
            return;
        }
        self.message = self.message.next(TIPS.len());
        self.enter(BubblePhase::Showing, now_ms);
    }

    /// Assistant clicked: show the current message again
    pub fn click_assistant(&mut self, now_ms: f64) {
        if self.phase == BubblePhase::Dismissed {
            return;
        }
        if self.message == Message::Welcome {
            self.message = Message::Tip(0);
        }
        self.enter(BubblePhase::Showing, now_ms);
    }

    /// Close button: fade the bubble out
    pub fn close(&mut self, now_ms: f64) {
        if self.phase == BubblePhase::Showing {
            self.enter(BubblePhase::Fading, now_ms);
        }
    }

    /// Dismiss for good, cancelling anything pending
    pub fn dismiss(&mut self) {
        debug!("[assistant] dismissed");
        self.phase = BubblePhase::Dismissed;
        self.pending = None;
    }

    fn enter(&mut self, phase: BubblePhase, at_ms: f64) {
        debug!("[assistant] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.since_ms = at_ms;

        let t = &self.timings;
        let next = match phase {
            BubblePhase::Showing => {
                self.welcomed = true;
                let display = if self.message == Message::Welcome {
                    t.welcome_display_ms
                } else {
                    t.message_display_ms
                };
                Some((at_ms + display, BubblePhase::Fading))
            }
            BubblePhase::Fading => Some((at_ms + t.fade_ms, BubblePhase::Hidden)),
            BubblePhase::Hidden => Some((at_ms + t.hidden_ms, BubblePhase::Idle)),
            BubblePhase::Idle => Some((at_ms + t.auto_advance_ms, BubblePhase::Showing)),
            BubblePhase::Dismissed => None,
        };

        self.pending = None;
        if let Some((due_ms, to)) = next {
            self.schedule(due_ms, to);
        }
    }

    fn schedule(&mut self, due_ms: f64, to: BubblePhase) {
        self.pending = Some(Scheduled { due_ms, to });
    }
}
