use crate::schedule::Scheduler;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub full_pause_ms: u32,
    pub empty_pause_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Deleting,
}

/// Text to display after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Cursor over a fixed list of words. Each `tick` adds or removes one character;
/// the long pauses happen at full length and at empty, before the phase flips.
#[derive(Clone, Debug)]
pub struct TypingAnimator {
    words: Vec<String>,
    index: usize,
    char_index: usize,
    phase: TypingPhase,
    timings: TypingTimings,
}

impl TypingAnimator {
    pub fn new<I, S>(words: I, timings: TypingTimings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
            timings,
        }
    }

    /// Returns `None` only when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypingStep> {
        let word = self.words.get(self.index)?;
        let len = word.chars().count();
        let shown = match self.phase {
            TypingPhase::Typing => (self.char_index + 1).min(len),
            TypingPhase::Deleting => self.char_index.saturating_sub(1),
        };
        let text: String = word.chars().take(shown).collect();

        self.char_index = shown;
        let delay_ms = match self.phase {
            TypingPhase::Typing if shown == len => {
                self.phase = TypingPhase::Deleting;
                self.timings.full_pause_ms
            }
            TypingPhase::Typing => self.timings.type_delay_ms,
            TypingPhase::Deleting if shown == 0 => {
                self.phase = TypingPhase::Typing;
                self.index = (self.index + 1) % self.words.len();
                self.timings.empty_pause_ms
            }
            TypingPhase::Deleting => self.timings.delete_delay_ms,
        };

        Some(TypingStep { text, delay_ms })
    }
}

/// Schedules the first tick after `delay_ms`; every tick schedules the next.
pub fn schedule_typing(
    mut animator: TypingAnimator,
    scheduler: Rc<dyn Scheduler>,
    display: Rc<dyn Fn(&str)>,
    delay_ms: u32,
) {
    let next_scheduler = Rc::clone(&scheduler);
    scheduler.after(
        delay_ms,
        Box::new(move || {
            let Some(step) = animator.tick() else {
                return;
            };
            display(&step.text);
            schedule_typing(animator, next_scheduler, display, step.delay_ms);
        }),
    );
}
