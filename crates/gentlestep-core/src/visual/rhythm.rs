//! Abstract per-exercise animation shown inside the progress ring.
//!
//! Each exercise type gets its own motion, selected by tagged dispatch on
//! [`ExerciseType`]. Frames are pure functions of the time since the session
//! last started running; a stopped pattern rests at its first frame.

use std::time::Duration;

use serde::Serialize;

use crate::catalog::ExerciseType;

const ORBIT_RADIUS: f64 = 70.0;
const ORBIT_PERIOD: Duration = Duration::from_millis(3500);
const BOB_AMPLITUDE: f64 = 55.0;
const SWING_PERIOD: Duration = Duration::from_millis(1500);
const FLEX_BAR_WIDTH: (f64, f64) = (36.0, 140.0);
const FLEX_BAR_HEIGHT: (f64, f64) = (24.0, 8.0);
const FLEX_DOT_OFFSET: (f64, f64) = (18.0, 70.0);
const RIPPLE_PERIOD: Duration = Duration::from_millis(3000);
/// (delay, peak scale) for the two expanding rings.
const RIPPLES: [(Duration, f64); 2] = [(Duration::ZERO, 2.2), (Duration::from_millis(1000), 1.6)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhythmPattern {
    /// A dot circling the ring at constant speed.
    Orbit,
    /// A marker rising and falling along a vertical track.
    Bob,
    /// A bar stretching and flattening while two dots spread apart.
    Flex,
    /// Rings expanding and fading out, staggered.
    Ripple,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ripple {
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum RhythmFrame {
    Orbit { angle_deg: f64, radius: f64 },
    Bob { offset_y: f64 },
    Flex { bar_width: f64, bar_height: f64, dot_offset: f64 },
    Ripple { rings: [Ripple; 2] },
}

impl RhythmPattern {
    pub fn for_type(exercise_type: ExerciseType) -> Self {
        match exercise_type {
            ExerciseType::AnkleCircles => RhythmPattern::Orbit,
            ExerciseType::HeelRaises => RhythmPattern::Bob,
            ExerciseType::ToeFlex => RhythmPattern::Flex,
            ExerciseType::SeatedStretch => RhythmPattern::Ripple,
        }
    }

    pub fn frame(self, since_start: Duration, running: bool) -> RhythmFrame {
        let t = if running { since_start } else { Duration::ZERO };
        match self {
            RhythmPattern::Orbit => {
                let turn = cycle_fraction(t, ORBIT_PERIOD);
                RhythmFrame::Orbit {
                    angle_deg: 360.0 * turn,
                    radius: ORBIT_RADIUS,
                }
            }
            RhythmPattern::Bob => {
                let e = ease_in_out(back_and_forth(t, SWING_PERIOD));
                RhythmFrame::Bob {
                    offset_y: BOB_AMPLITUDE - 2.0 * BOB_AMPLITUDE * e,
                }
            }
            RhythmPattern::Flex => {
                let e = ease_in_out(back_and_forth(t, SWING_PERIOD));
                RhythmFrame::Flex {
                    bar_width: lerp(FLEX_BAR_WIDTH, e),
                    bar_height: lerp(FLEX_BAR_HEIGHT, e),
                    dot_offset: lerp(FLEX_DOT_OFFSET, e),
                }
            }
            RhythmPattern::Ripple => {
                let rings = RIPPLES.map(|(delay, peak)| match t.checked_sub(delay) {
                    Some(local) if running => {
                        let e = ease_out(cycle_fraction(local, RIPPLE_PERIOD));
                        Ripple {
                            scale: 1.0 + (peak - 1.0) * e,
                            opacity: 1.0 - e,
                        }
                    }
                    _ => Ripple { scale: 1.0, opacity: 1.0 },
                });
                RhythmFrame::Ripple { rings }
            }
        }
    }
}

impl RhythmFrame {
    /// One-line terminal depiction.
    pub fn glyph(&self) -> String {
        match *self {
            RhythmFrame::Orbit { angle_deg, .. } => {
                const ARROWS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];
                let idx = (angle_deg / 45.0).round() as usize % ARROWS.len();
                format!("( {} )", ARROWS[idx])
            }
            RhythmFrame::Bob { offset_y } => {
                const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
                let height = (BOB_AMPLITUDE - offset_y) / (2.0 * BOB_AMPLITUDE);
                let idx = (height.clamp(0.0, 1.0) * 7.0).round() as usize;
                format!("[{}]", LEVELS[idx])
            }
            RhythmFrame::Flex { dot_offset, .. } => {
                let span = ((dot_offset / FLEX_DOT_OFFSET.1) * 8.0).round() as usize;
                format!("•{}•", "=".repeat(span))
            }
            RhythmFrame::Ripple { rings } => {
                let depth = ((rings[0].scale - 1.0) * 3.0).round() as usize;
                if rings[0].opacity < 0.15 {
                    "·".to_string()
                } else {
                    format!("{}·{}", "(".repeat(depth + 1), ")".repeat(depth + 1))
                }
            }
        }
    }
}

/// Position within a repeating cycle, `0.0..1.0`.
fn cycle_fraction(t: Duration, period: Duration) -> f64 {
    let p = period.as_secs_f64();
    if p <= 0.0 {
        return 0.0;
    }
    (t.as_secs_f64() / p).fract()
}

/// Auto-reversing position: 0 to 1 over one period, then back.
fn back_and_forth(t: Duration, period: Duration) -> f64 {
    let p = period.as_secs_f64();
    if p <= 0.0 {
        return 0.0;
    }
    let cycles = t.as_secs_f64() / p;
    let frac = cycles.fract();
    if (cycles.floor() as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}

fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn lerp((from, to): (f64, f64), t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn each_type_has_its_own_pattern() {
        let patterns: Vec<_> = ExerciseType::ALL.into_iter().map(RhythmPattern::for_type).collect();
        assert_eq!(
            patterns,
            vec![RhythmPattern::Orbit, RhythmPattern::Bob, RhythmPattern::Flex, RhythmPattern::Ripple]
        );
    }

    #[test]
    fn stopped_patterns_rest() {
        let frame = RhythmPattern::Bob.frame(ms(700), false);
        assert_eq!(frame, RhythmFrame::Bob { offset_y: 55.0 });
        let frame = RhythmPattern::Flex.frame(ms(700), false);
        assert_eq!(
            frame,
            RhythmFrame::Flex { bar_width: 36.0, bar_height: 24.0, dot_offset: 18.0 }
        );
        match RhythmPattern::Ripple.frame(ms(2500), false) {
            RhythmFrame::Ripple { rings } => {
                assert!(rings.iter().all(|r| r.scale == 1.0 && r.opacity == 1.0));
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn orbit_turns_once_per_period() {
        match RhythmPattern::Orbit.frame(ms(1750), true) {
            RhythmFrame::Orbit { angle_deg, radius } => {
                assert!(approx(angle_deg, 180.0));
                assert_eq!(radius, 70.0);
            }
            other => panic!("unexpected frame {other:?}"),
        }
        match RhythmPattern::Orbit.frame(ms(3500), true) {
            RhythmFrame::Orbit { angle_deg, .. } => assert!(approx(angle_deg, 0.0)),
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn bob_reverses_each_period() {
        assert_eq!(RhythmPattern::Bob.frame(ms(1500), true), RhythmFrame::Bob { offset_y: -55.0 });
        assert_eq!(RhythmPattern::Bob.frame(ms(3000), true), RhythmFrame::Bob { offset_y: 55.0 });
        match RhythmPattern::Bob.frame(ms(750), true) {
            RhythmFrame::Bob { offset_y } => assert!(approx(offset_y, 0.0)),
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn flex_reaches_full_stretch() {
        assert_eq!(
            RhythmPattern::Flex.frame(ms(1500), true),
            RhythmFrame::Flex { bar_width: 140.0, bar_height: 8.0, dot_offset: 70.0 }
        );
    }

    #[test]
    fn second_ripple_is_delayed() {
        match RhythmPattern::Ripple.frame(ms(500), true) {
            RhythmFrame::Ripple { rings } => {
                assert!(rings[0].scale > 1.0 && rings[0].opacity < 1.0);
                assert_eq!(rings[1], Ripple { scale: 1.0, opacity: 1.0 });
            }
            other => panic!("unexpected frame {other:?}"),
        }
        match RhythmPattern::Ripple.frame(ms(2500), true) {
            RhythmFrame::Ripple { rings } => {
                assert!(rings[1].scale > 1.0 && rings[1].scale < 1.6);
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn glyphs_render() {
        assert_eq!(RhythmPattern::Orbit.frame(ms(0), true).glyph(), "( ↑ )");
        assert_eq!(RhythmPattern::Bob.frame(ms(1500), true).glyph(), "[█]");
        assert_eq!(RhythmPattern::Flex.frame(ms(0), false).glyph(), "•==•");
        assert_eq!(RhythmPattern::Ripple.frame(ms(0), false).glyph(), "(·)");
    }
}
