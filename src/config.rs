use crate::logging::LogLevel;
use crate::typing::TypingTimings;
use serde_json::{json, Value};

const DEFAULT_TYPING_START_DELAY_MS: u32 = 1_000;
const DEFAULT_TYPING_TYPE_DELAY_MS: u32 = 150;
const DEFAULT_TYPING_DELETE_DELAY_MS: u32 = 50;
const DEFAULT_TYPING_FULL_PAUSE_MS: u32 = 1_500;
const DEFAULT_TYPING_EMPTY_PAUSE_MS: u32 = 800;
const DEFAULT_REVEAL_THRESHOLD_PERCENT: u32 = 20;
const DEFAULT_PROGRESS_FILL_DELAY_MS: u32 = 100;
const DEFAULT_BACK_TO_TOP_OFFSET: u32 = 400;
const DEFAULT_ANCHOR_MARGIN: u32 = 10;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PAUSE_MS_BOUNDS: (u32, u32) = (0, 60_000);
const STEP_DELAY_MS_BOUNDS: (u32, u32) = (10, 5_000);
const REVEAL_THRESHOLD_PERCENT_BOUNDS: (u32, u32) = (0, 100);
const PROGRESS_FILL_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const BACK_TO_TOP_OFFSET_BOUNDS: (u32, u32) = (0, 100_000);
const ANCHOR_MARGIN_BOUNDS: (u32, u32) = (0, 1_000);

/// Page tunables, read once from `data-*` attributes on `<body>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub typing_start_delay_ms: u32,
    pub typing: TypingTimings,
    pub reveal_threshold_percent: u32,
    pub progress_fill_delay_ms: u32,
    pub back_to_top_offset: u32,
    pub anchor_margin: u32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl PageConfig {
    /// `lookup` receives attribute names without the `data-` prefix.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let typing_start_delay_ms = parse_u32_with_bounds(
            &lookup,
            "typing-start-delay-ms",
            DEFAULT_TYPING_START_DELAY_MS,
            PAUSE_MS_BOUNDS,
        );
        let type_delay_ms = parse_u32_with_bounds(
            &lookup,
            "typing-type-delay-ms",
            DEFAULT_TYPING_TYPE_DELAY_MS,
            STEP_DELAY_MS_BOUNDS,
        );
        let delete_delay_ms = parse_u32_with_bounds(
            &lookup,
            "typing-delete-delay-ms",
            DEFAULT_TYPING_DELETE_DELAY_MS,
            STEP_DELAY_MS_BOUNDS,
        );
        let full_pause_ms = parse_u32_with_bounds(
            &lookup,
            "typing-full-pause-ms",
            DEFAULT_TYPING_FULL_PAUSE_MS,
            PAUSE_MS_BOUNDS,
        );
        let empty_pause_ms = parse_u32_with_bounds(
            &lookup,
            "typing-empty-pause-ms",
            DEFAULT_TYPING_EMPTY_PAUSE_MS,
            PAUSE_MS_BOUNDS,
        );
        let reveal_threshold_percent = parse_u32_with_bounds(
            &lookup,
            "reveal-threshold-percent",
            DEFAULT_REVEAL_THRESHOLD_PERCENT,
            REVEAL_THRESHOLD_PERCENT_BOUNDS,
        );
        let progress_fill_delay_ms = parse_u32_with_bounds(
            &lookup,
            "progress-fill-delay-ms",
            DEFAULT_PROGRESS_FILL_DELAY_MS,
            PROGRESS_FILL_DELAY_MS_BOUNDS,
        );
        let back_to_top_offset = parse_u32_with_bounds(
            &lookup,
            "back-to-top-offset",
            DEFAULT_BACK_TO_TOP_OFFSET,
            BACK_TO_TOP_OFFSET_BOUNDS,
        );
        let anchor_margin = parse_u32_with_bounds(
            &lookup,
            "anchor-margin",
            DEFAULT_ANCHOR_MARGIN,
            ANCHOR_MARGIN_BOUNDS,
        );
        let log_level = lookup("log-level")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            typing_start_delay_ms,
            typing: TypingTimings {
                type_delay_ms,
                delete_delay_ms,
                full_pause_ms,
                empty_pause_ms,
            },
            reveal_threshold_percent,
            progress_fill_delay_ms,
            back_to_top_offset,
            anchor_margin,
            log_level,
        }
    }

    pub fn reveal_threshold(&self) -> f64 {
        f64::from(self.reveal_threshold_percent) / 100.0
    }

    pub fn summary(&self) -> Value {
        json!({
            "typing_start_delay_ms": self.typing_start_delay_ms,
            "reveal_threshold_percent": self.reveal_threshold_percent,
            "back_to_top_offset": self.back_to_top_offset,
            "anchor_margin": self.anchor_margin,
            "log_level": self.log_level,
        })
    }
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
