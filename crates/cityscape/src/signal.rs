//! Traffic signal phase function.

/// Full red → green → yellow cycle, seconds.
pub const SIGNAL_CYCLE: f64 = 6.0;
const RED_END: f64 = 2.5;
const GREEN_END: f64 = 5.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SignalLight {
    Red,
    Green,
    Yellow,
}

/// Light shown at `traffic_timer` by a signal running `offset` seconds ahead.
///
/// Red for `[0, 2.5)`, green for `[2.5, 5)`, yellow for `[5, 6)` of the cycle.
pub fn signal_phase(traffic_timer: f64, offset: f64) -> SignalLight {
    let t = (traffic_timer + offset).rem_euclid(SIGNAL_CYCLE);
    if t < RED_END {
        SignalLight::Red
    } else if t < GREEN_END {
        SignalLight::Green
    } else {
        SignalLight::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_at_offset_zero() {
        assert_eq!(signal_phase(0.0, 0.0), SignalLight::Red);
        assert_eq!(signal_phase(2.6, 0.0), SignalLight::Green);
        assert_eq!(signal_phase(5.1, 0.0), SignalLight::Yellow);
        assert_eq!(signal_phase(6.0, 0.0), SignalLight::Red);
    }

    #[test]
    fn boundaries_belong_to_the_later_phase() {
        assert_eq!(signal_phase(2.5, 0.0), SignalLight::Green);
        assert_eq!(signal_phase(5.0, 0.0), SignalLight::Yellow);
        assert_eq!(signal_phase(2.4999, 0.0), SignalLight::Red);
    }

    #[test]
    fn offset_signals_disagree() {
        for t in [0.0, 2.6, 5.1] {
            assert_ne!(signal_phase(t, 0.0), signal_phase(t, 3.0), "t = {t}");
        }
        assert_eq!(signal_phase(0.0, 3.0), SignalLight::Green);
        assert_eq!(signal_phase(5.1, 3.0), SignalLight::Red);
    }

    #[test]
    fn phase_repeats_every_cycle() {
        for k in 0..5 {
            let base = 1.3;
            assert_eq!(
                signal_phase(base + k as f64 * SIGNAL_CYCLE, 0.0),
                signal_phase(base, 0.0)
            );
        }
    }
}
