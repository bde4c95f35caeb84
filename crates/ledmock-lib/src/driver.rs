//! Driver loop — advance, render, sleep, until told to stop.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::pattern::Pattern;
use crate::strip::Strip;

/// Run frames until `running` is cleared or `max_frames` have been drawn.
///
/// Each frame advances `pattern`, renders `strip`, then sleeps for
/// `frame_delay`. Returns the number of frames drawn.
pub fn run<W: Write, P: Pattern>(
    pattern: &mut P,
    strip: &mut Strip<W>,
    frame_delay: Duration,
    running: &AtomicBool,
    max_frames: Option<u64>,
) -> std::io::Result<u64> {
    log::info!("driver loop started ({} ms per frame)", frame_delay.as_millis());
    let mut frames = 0u64;
    while running.load(Ordering::SeqCst) && max_frames.is_none_or(|max| frames < max) {
        pattern.advance(strip);
        strip.render()?;
        frames += 1;
        if !frame_delay.is_zero() {
            std::thread::sleep(frame_delay);
        }
    }
    log::info!("driver loop stopped after {frames} frames");
    Ok(frames)
}
