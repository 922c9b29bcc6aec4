//! Scramble-to-resolve text effect.
//!
//! [`frame`] renders one frame for a given cursor position and [`Scrambler`]
//! walks the cursor through the Idle → Scrambling → Resolved states one tick
//! at a time. Neither knows anything about timers; the `TextReveal`
//! component drives them from an interval.

use rand::Rng;

use crate::config::SCRAMBLE_STEP;

/// Placeholder alphabet for characters that have not resolved yet.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Renders `text` with every position below `cursor` resolved.
///
/// Unresolved positions get a random letter from [`ALPHABET`]; spaces are
/// never scrambled.
pub fn frame<R: Rng>(text: &[char], cursor: f64, rng: &mut R) -> String {
    text.iter()
        .enumerate()
        .map(|(index, &ch)| {
            if ch == ' ' {
                ' '
            } else if (index as f64) < cursor {
                ch
            } else {
                ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
            }
        })
        .collect()
}

/// Number of ticks a text of `len` characters needs to resolve.
pub fn ticks_to_resolve(len: usize) -> usize {
    (len as f64 / SCRAMBLE_STEP).ceil() as usize
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Phase {
    /// Hidden; every position is blank.
    Idle,
    /// Visible and still resolving; the cursor is the next frame's threshold.
    Scrambling { cursor: f64 },
    /// Visible and showing the final text.
    Resolved,
}

/// One text's scramble state machine.
#[derive(Clone, Debug)]
pub struct Scrambler {
    text: Vec<char>,
    phase: Phase,
    display: Vec<Option<char>>,
}

impl Scrambler {
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let display = vec![None; text.len()];
        Scrambler {
            text,
            phase: Phase::Idle,
            display,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a tick source should keep calling [`Scrambler::tick`].
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Scrambling { .. })
    }

    /// Per-position glyphs; `None` is a blank slot.
    pub fn display(&self) -> &[Option<char>] {
        &self.display
    }

    pub fn display_string(&self) -> String {
        self.display.iter().map(|slot| slot.unwrap_or(' ')).collect()
    }

    /// Shows or hides the text. Showing from Idle starts a fresh scramble;
    /// hiding always returns to Idle so the next show restarts.
    pub fn set_visible(&mut self, visible: bool) {
        match (visible, self.phase) {
            (true, Phase::Idle) if self.text.is_empty() => self.resolve(),
            (true, Phase::Idle) => self.phase = Phase::Scrambling { cursor: 0.0 },
            (true, _) => {}
            (false, _) => {
                self.phase = Phase::Idle;
                self.display = vec![None; self.text.len()];
            }
        }
    }

    /// Advances one frame. Does nothing unless scrambling.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Phase {
        let Phase::Scrambling { cursor } = self.phase else {
            return self.phase;
        };
        self.display = frame(&self.text, cursor, rng).chars().map(Some).collect();
        let cursor = cursor + SCRAMBLE_STEP;
        if cursor >= self.text.len() as f64 {
            self.resolve();
        } else {
            self.phase = Phase::Scrambling { cursor };
        }
        self.phase
    }

    fn resolve(&mut self) {
        self.phase = Phase::Resolved;
        self.display = self.text.iter().copied().map(Some).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run_to_end(scrambler: &mut Scrambler, rng: &mut StdRng) -> usize {
        let mut ticks = 0;
        while scrambler.is_running() {
            scrambler.tick(rng);
            ticks += 1;
            assert!(ticks <= 10_000, "scramble never resolved");
        }
        ticks
    }

    #[test]
    fn frame_keeps_spaces_and_resolved_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = chars("HELLO WORLD");
        let out: Vec<char> = frame(&text, 3.0, &mut rng).chars().collect();
        assert_eq!(out.len(), text.len());
        assert_eq!(&out[..3], &['H', 'E', 'L']);
        assert_eq!(out[5], ' ');
        for &ch in &out[3..] {
            assert!(ch == ' ' || ALPHABET.contains(&(ch as u8)));
        }
    }

    #[test]
    fn frame_at_full_cursor_is_the_text() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(frame(&chars("What I Do"), 9.0, &mut rng), "What I Do");
    }

    #[test]
    fn fractional_cursor_resolves_the_index_below_it() {
        let mut rng = StdRng::seed_from_u64(3);
        let out: Vec<char> = frame(&chars("AB"), 0.5, &mut rng).chars().collect();
        assert_eq!(out[0], 'A');
    }

    #[test]
    fn starts_idle_and_blank() {
        let scrambler = Scrambler::new("Hi there");
        assert_eq!(scrambler.phase(), Phase::Idle);
        assert!(scrambler.display().iter().all(Option::is_none));
        assert!(!scrambler.is_running());
    }

    #[test]
    fn two_letter_text_ends_exactly_resolved() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut scrambler = Scrambler::new("AB");
        scrambler.set_visible(true);
        assert_eq!(scrambler.phase(), Phase::Scrambling { cursor: 0.0 });

        assert_eq!(scrambler.tick(&mut rng), Phase::Scrambling { cursor: 0.5 });
        assert_eq!(scrambler.tick(&mut rng), Phase::Scrambling { cursor: 1.0 });
        assert_eq!(scrambler.display()[0], Some('A'));
        assert_eq!(scrambler.tick(&mut rng), Phase::Scrambling { cursor: 1.5 });
        assert_eq!(scrambler.tick(&mut rng), Phase::Resolved);
        assert_eq!(scrambler.display_string(), "AB");
    }

    #[test]
    fn resolves_within_tick_bound() {
        let mut rng = StdRng::seed_from_u64(99);
        for text in ["A", "AB", "Featured Projects", "What I Do", "Experience ✓"] {
            let mut scrambler = Scrambler::new(text);
            scrambler.set_visible(true);
            let ticks = run_to_end(&mut scrambler, &mut rng);
            assert!(ticks <= ticks_to_resolve(text.chars().count()), "{text}: {ticks}");
            assert_eq!(scrambler.display_string(), text);
            assert_eq!(scrambler.phase(), Phase::Resolved);
        }
    }

    #[test]
    fn no_position_resolves_early() {
        // Tick n (1-based) renders with cursor (n - 1) * step, so index i can
        // only be pinned to its final char once (n - 1) * step > i.
        let text = "SCRAMBLE ME";
        let expected = chars(text);
        let mut rng = StdRng::seed_from_u64(5);
        let mut scrambler = Scrambler::new(text);
        scrambler.set_visible(true);
        let mut tick = 0usize;
        while let Phase::Scrambling { cursor } = scrambler.phase() {
            tick += 1;
            scrambler.tick(&mut rng);
            if !scrambler.is_running() {
                break;
            }
            for (index, slot) in scrambler.display().iter().enumerate() {
                let ch = slot.unwrap();
                if expected[index] == ' ' {
                    assert_eq!(ch, ' ');
                } else if (index as f64) < cursor {
                    assert_eq!(ch, expected[index], "tick {tick} index {index}");
                } else {
                    assert!(ALPHABET.contains(&(ch as u8)));
                }
            }
        }
        assert_eq!(scrambler.display_string(), text);
    }

    #[test]
    fn hiding_mid_scramble_resets_and_show_restarts() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scrambler = Scrambler::new("RESTART");
        scrambler.set_visible(true);
        scrambler.tick(&mut rng);
        scrambler.tick(&mut rng);
        scrambler.set_visible(false);
        assert_eq!(scrambler.phase(), Phase::Idle);
        assert!(scrambler.display().iter().all(Option::is_none));

        scrambler.set_visible(true);
        assert_eq!(scrambler.phase(), Phase::Scrambling { cursor: 0.0 });
        let ticks = run_to_end(&mut scrambler, &mut rng);
        assert_eq!(ticks, ticks_to_resolve(7));
    }

    #[test]
    fn showing_again_while_visible_does_not_restart() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut scrambler = Scrambler::new("ABC");
        scrambler.set_visible(true);
        scrambler.tick(&mut rng);
        scrambler.set_visible(true);
        assert_eq!(scrambler.phase(), Phase::Scrambling { cursor: 0.5 });
    }

    #[test]
    fn empty_text_resolves_immediately() {
        let mut scrambler = Scrambler::new("");
        scrambler.set_visible(true);
        assert_eq!(scrambler.phase(), Phase::Resolved);
        assert!(!scrambler.is_running());
        assert_eq!(scrambler.display_string(), "");
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut scrambler = Scrambler::new("IDLE");
        assert_eq!(scrambler.tick(&mut rng), Phase::Idle);
        assert!(scrambler.display().iter().all(Option::is_none));
    }
}
