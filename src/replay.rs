//! Headless replay of recorded scroll sessions.
//!
//! Input is JSON lines, one timestamped host event per line. Every event is
//! fed to a fresh [`ScrollController`] and the resulting frame plus effects are
//! written back out as JSON lines. Blank lines and `#` comments are skipped.

use crate::config::SkierConfig;
use crate::controller::{Effect, Message, PopupGeometry, ScrollController};
use crate::frame::Frame;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export)]
pub struct ReplayEvent {
    /// Milliseconds since the start of the recording.
    #[ts(type = "number")]
    pub at_ms: u64,
    #[serde(flatten)]
    pub kind: ReplayEventKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ReplayEventKind {
    OuterScroll {
        fraction: f64,
    },
    PopupScroll {
        id: String,
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
    },
    PopupMounted {
        id: String,
    },
    PopupUnmounted {
        id: String,
    },
    Resize {
        viewport_width: f64,
        viewport_height: f64,
        content_height: f64,
    },
    LockScroll {
        offset_px: f64,
    },
    UnlockScroll,
    Tick,
}

impl From<ReplayEventKind> for Message {
    fn from(kind: ReplayEventKind) -> Self {
        match kind {
            ReplayEventKind::OuterScroll { fraction } => Message::OuterScrolled { fraction },
            ReplayEventKind::PopupScroll {
                id,
                scroll_top,
                scroll_height,
                client_height,
            } => Message::PopupScrolled {
                id,
                geometry: PopupGeometry {
                    scroll_top,
                    scroll_height,
                    client_height,
                },
            },
            ReplayEventKind::PopupMounted { id } => Message::PopupMounted(id),
            ReplayEventKind::PopupUnmounted { id } => Message::PopupUnmounted(id),
            ReplayEventKind::Resize {
                viewport_width,
                viewport_height,
                content_height,
            } => Message::Resized {
                viewport_width,
                viewport_height,
                content_height,
            },
            ReplayEventKind::LockScroll { offset_px } => Message::LockScroll { offset_px },
            ReplayEventKind::UnlockScroll => Message::UnlockScroll,
            ReplayEventKind::Tick => Message::Tick,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub frame: Frame,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub effects: usize,
}

pub fn parse_event(line: &str) -> Result<ReplayEvent> {
    serde_json::from_str(line).with_context(|| format!("invalid replay event: {line}"))
}

/// Run every event from `input` through a controller and write one
/// [`ReplayStep`] per event to `output`.
pub fn replay(
    input: impl BufRead,
    config: SkierConfig,
    mut output: impl Write,
) -> Result<ReplaySummary> {
    let mut controller = ScrollController::new(config);
    let base = Instant::now();
    let mut summary = ReplaySummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read replay line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = parse_event(trimmed).with_context(|| format!("line {}", idx + 1))?;
        let now = base + Duration::from_millis(event.at_ms);
        let effects = controller.dispatch(event.kind.into(), now);
        debug!(at_ms = event.at_ms, effects = effects.len(), "Replayed event");

        summary.events += 1;
        summary.effects += effects.len();
        let step = ReplayStep {
            at_ms: event.at_ms,
            frame: controller.frame(),
            effects,
        };
        serde_json::to_writer(&mut output, &step).context("failed to write replay step")?;
        writeln!(output).context("failed to write replay step")?;
    }

    controller.teardown();
    info!(
        events = summary.events,
        effects = summary.effects,
        "Replay finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"
# viewport first, then a slow scroll down
{"at_ms": 0, "kind": "resize", "viewport_width": 1500, "viewport_height": 900, "content_height": 9900}
{"at_ms": 0, "kind": "popup_mounted", "id": "aboutMe"}
{"at_ms": 16, "kind": "outer_scroll", "fraction": 0.1}

{"at_ms": 32, "kind": "outer_scroll", "fraction": 0.2}
{"at_ms": 4000, "kind": "tick"}
"#;

    #[test]
    fn parses_tagged_events() {
        let event = parse_event(
            r#"{"at_ms": 12, "kind": "popup_scroll", "id": "projects", "scroll_top": 40, "scroll_height": 900, "client_height": 300}"#,
        )
        .expect("popup scroll event");
        assert_eq!(event.at_ms, 12);
        assert_eq!(
            Message::from(event.kind),
            Message::PopupScrolled {
                id: "projects".to_string(),
                geometry: PopupGeometry {
                    scroll_top: 40.0,
                    scroll_height: 900.0,
                    client_height: 300.0,
                },
            }
        );
        assert!(parse_event(r#"{"at_ms": 1, "kind": "warp"}"#).is_err());
    }

    #[test]
    fn replays_session_into_json_lines() {
        let mut out = Vec::new();
        let summary = replay(SESSION.as_bytes(), SkierConfig::default(), &mut out)
            .expect("session replays");
        assert_eq!(summary.events, 5);

        let text = String::from_utf8(out).expect("utf8 output");
        let steps: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json step"))
            .collect();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[2]["frame"]["raw_progress"], 0.1);
        assert_eq!(steps[2]["effects"][0]["kind"], "idle_changed");
        assert_eq!(steps[4]["frame"]["idle"], true);
        assert_eq!(steps[4]["frame"]["pose"], "idle");
    }

    #[test]
    fn bad_line_reports_its_number() {
        let input = "{\"at_ms\": 0, \"kind\": \"tick\"}\nnot json\n";
        let err = replay(input.as_bytes(), SkierConfig::default(), Vec::new())
            .expect_err("second line is invalid");
        assert!(format!("{err:#}").contains("line 2"));
    }
}
