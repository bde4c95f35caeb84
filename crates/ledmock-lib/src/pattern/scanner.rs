//! Larson scanner — a red beam bouncing between the strip ends with a fading tail.

use std::io::Write;

use heapless::Deque;

use super::Pattern;
use crate::strip::Strip;

/// Number of recent head positions painted full red.
pub const TRAIL_LEN: usize = 5;

/// Per-step channel multiplier for the fade.
const FADE: f64 = 0.90;

/// The scanner only moves on every third frame.
const FRAMES_PER_STEP: u64 = 3;

#[derive(Debug, Clone)]
pub struct Scanner {
    /// Most recent head first; the oldest entry drops off once full.
    trail: Deque<usize, TRAIL_LEN>,
    step: isize,
    frames: u64,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        let mut scanner = Scanner {
            trail: Deque::new(),
            step: 1,
            frames: 0,
        };
        scanner.push_head(0);
        scanner
    }

    /// Current head position.
    pub fn head(&self) -> usize {
        self.trail.front().copied().unwrap_or(0)
    }

    /// `+1` moving up the strip, `-1` moving down.
    pub fn direction(&self) -> isize {
        self.step
    }

    /// Trail positions, newest first.
    pub fn trail(&self) -> impl Iterator<Item = usize> + '_ {
        self.trail.iter().copied()
    }

    /// Frames seen so far, including the idle ones.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Record `head` as the newest trail entry, dropping the oldest when full.
    fn push_head(&mut self, head: usize) {
        if self.trail.is_full() {
            self.trail.pop_back();
        }
        let pushed = self.trail.push_front(head);
        debug_assert!(pushed.is_ok(), "trail has room after pop");
    }

    fn next_head(&mut self, len: usize) -> usize {
        let in_range = |pos: isize| pos >= 0 && (pos as usize) < len;
        let head = self.head() as isize;
        let mut next = head + self.step;
        if !in_range(next) {
            self.step = -self.step;
            next = head + self.step;
        }
        if in_range(next) {
            next as usize
        } else {
            // Single-LED strip: both directions leave the range.
            head as usize
        }
    }
}

impl Pattern for Scanner {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        self.frames += 1;
        if self.frames % FRAMES_PER_STEP != 0 {
            return;
        }

        for led in strip.iter_mut() {
            led.scale(FADE);
        }
        for &pos in self.trail.iter() {
            if let Ok(led) = strip.get_mut(pos as isize) {
                led.set_rgb(255, 0, 0);
            }
        }

        let next = self.next_head(strip.len());
        self.push_head(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led::Led;

    fn strip(size: usize) -> Strip<Vec<u8>> {
        Strip::with_width(size, "*", 0, Vec::new()).unwrap()
    }

    const RED: Led = Led::new(255, 0, 0);

    #[test]
    fn idle_frames_leave_strip_untouched() {
        let mut s = strip(4);
        let mut scanner = Scanner::new();
        scanner.advance(&mut s);
        scanner.advance(&mut s);
        assert!(s.iter().all(|led| *led == Led::WHITE));
        assert_eq!(scanner.head(), 0);
        scanner.advance(&mut s);
        assert_eq!(scanner.head(), 1);
    }

    #[test]
    fn first_step_fades_then_paints_head() {
        let mut s = strip(3);
        let mut scanner = Scanner::new();
        for _ in 0..3 {
            scanner.advance(&mut s);
        }
        assert_eq!(*s.get(0).unwrap(), RED);
        assert_eq!(s.get(1).unwrap().rgb(), (229, 229, 229));
        assert_eq!(s.get(2).unwrap().rgb(), (229, 229, 229));
    }

    #[test]
    fn bounces_within_range() {
        let mut s = strip(4);
        let mut scanner = Scanner::new();
        let mut heads = Vec::new();
        for _ in 0..10 {
            for _ in 0..3 {
                scanner.advance(&mut s);
            }
            heads.push(scanner.head());
        }
        assert_eq!(heads, vec![1, 2, 3, 2, 1, 0, 1, 2, 3, 2]);
    }

    #[test]
    fn direction_flips_only_at_ends() {
        let len = 6;
        let mut s = strip(len);
        let mut scanner = Scanner::new();
        for _ in 0..300 {
            let head = scanner.head() as isize;
            let dir = scanner.direction();
            let acting = (scanner.frames() + 1) % 3 == 0;
            scanner.advance(&mut s);
            let would_leave = head + dir < 0 || head + dir >= len as isize;
            if acting && would_leave {
                assert_eq!(scanner.direction(), -dir);
            } else {
                assert_eq!(scanner.direction(), dir);
            }
            assert!(scanner.head() < len);
        }
    }

    #[test]
    fn trail_capped_at_five() {
        let mut s = strip(20);
        let mut scanner = Scanner::new();
        for _ in 0..(3 * 12) {
            scanner.advance(&mut s);
            assert!(scanner.trail().count() <= TRAIL_LEN);
        }
        let trail: Vec<usize> = scanner.trail().collect();
        assert_eq!(trail, vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn trail_holds_newest_five_after_many_steps() {
        let mut s = strip(3);
        let mut scanner = Scanner::new();
        for step in 1..=100 {
            for _ in 0..3 {
                scanner.advance(&mut s);
            }
            let expected = (step + 1).min(TRAIL_LEN);
            assert_eq!(scanner.trail().count(), expected, "step {step}");
            assert_eq!(scanner.trail().next(), Some(scanner.head()));
        }
    }

    #[test]
    fn single_led_strip_stays_put() {
        let mut s = strip(1);
        let mut scanner = Scanner::new();
        for _ in 0..30 {
            scanner.advance(&mut s);
            assert_eq!(scanner.head(), 0);
        }
        assert_eq!(*s.get(0).unwrap(), RED);
    }
}
