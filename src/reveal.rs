use crate::schedule::Scheduler;
use std::rc::Rc;

pub const SECTION_SELECTOR: &str = ".section";
pub const REVEALED_CLASS: &str = "animate";
pub const SKILLS_SECTION_ID: &str = "skills";
pub const COLLAPSED_WIDTH: &str = "0%";

#[derive(Debug)]
struct TrackedSection {
    id: Option<String>,
    revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub key: usize,
    pub refill_progress: bool,
}

/// Per-section one-way "revealed" flags, keyed by observation order.
#[derive(Debug)]
pub struct RevealTracker {
    sections: Vec<TrackedSection>,
}

impl RevealTracker {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            sections: ids
                .into_iter()
                .map(|id| TrackedSection { id, revealed: false })
                .collect(),
        }
    }

    /// Returns a reveal the first time `key` intersects, `None` ever after.
    pub fn on_intersection(&mut self, key: usize, is_intersecting: bool) -> Option<Reveal> {
        if !is_intersecting {
            return None;
        }

        let section = self.sections.get_mut(key)?;
        if section.revealed {
            return None;
        }
        section.revealed = true;

        Some(Reveal {
            key,
            refill_progress: section.id.as_deref() == Some(SKILLS_SECTION_ID),
        })
    }
}

/// Collapses every bar now and restores each to its level after `delay_ms`.
pub fn refill_progress_bars<B: 'static>(
    bars: Vec<(B, u8)>,
    scheduler: &dyn Scheduler,
    delay_ms: u32,
    set_width: Rc<dyn Fn(&B, &str)>,
) {
    for (bar, _) in &bars {
        set_width(bar, COLLAPSED_WIDTH);
    }

    scheduler.after(
        delay_ms,
        Box::new(move || {
            for (bar, level) in &bars {
                set_width(bar, &format!("{level}%"));
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::manual::ManualScheduler;
    use std::cell::RefCell;

    fn is_revealed(tracker: &RevealTracker, key: usize) -> bool {
        tracker.sections.get(key).is_some_and(|section| section.revealed)
    }

    fn tracker() -> RevealTracker {
        RevealTracker::new([Some("about".to_string()), Some("skills".to_string()), None])
    }

    #[test]
    fn first_intersection_reveals_once() {
        let mut tracker = tracker();

        assert_eq!(
            tracker.on_intersection(0, true),
            Some(Reveal { key: 0, refill_progress: false })
        );
        assert_eq!(tracker.on_intersection(0, true), None);
        assert!(is_revealed(&tracker, 0));
    }

    #[test]
    fn skills_section_refills_progress_only_once() {
        let mut tracker = tracker();

        let reveals: Vec<Reveal> = (0..3).filter_map(|_| tracker.on_intersection(1, true)).collect();
        assert_eq!(reveals, vec![Reveal { key: 1, refill_progress: true }]);
    }

    #[test]
    fn leaving_viewport_does_not_reveal_or_revert() {
        let mut tracker = tracker();

        assert_eq!(tracker.on_intersection(2, false), None);
        assert!(!is_revealed(&tracker, 2));

        tracker.on_intersection(2, true);
        tracker.on_intersection(2, false);
        assert!(is_revealed(&tracker, 2));
    }

    #[test]
    fn batched_events_are_handled_independently() {
        let mut tracker = tracker();

        let batch = [(2, true), (0, true), (2, true), (7, true)];
        let keys: Vec<usize> = batch
            .into_iter()
            .filter_map(|(key, intersecting)| tracker.on_intersection(key, intersecting))
            .map(|reveal| reveal.key)
            .collect();

        assert_eq!(keys, vec![2, 0]);
        assert!(!is_revealed(&tracker, 1));
    }

    #[test]
    fn progress_bars_collapse_then_fill_from_levels() {
        let scheduler = ManualScheduler::default();
        let widths = Rc::new(RefCell::new(vec![String::new(); 2]));
        let sink = Rc::clone(&widths);

        refill_progress_bars(
            vec![(0_usize, 95), (1_usize, 50)],
            &scheduler,
            100,
            Rc::new(move |bar: &usize, width: &str| sink.borrow_mut()[*bar] = width.to_string()),
        );

        assert_eq!(*widths.borrow(), vec!["0%", "0%"]);
        assert_eq!(scheduler.run_next(), Some(100));
        assert_eq!(*widths.borrow(), vec!["95%", "50%"]);
    }
}
