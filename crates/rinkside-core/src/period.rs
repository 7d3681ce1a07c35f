//! Period sequencing: the clock ticks of one period.
//!
//! A period starts with an exact `MM:00` tick at its full length, then
//! counts down whole seconds in steps of [`CLOCK_STEP`] until either the
//! period ends or the cutoff (the horizon) is reached. The final minute of
//! regulation counts down in tenths of a second instead, again stepped by
//! [`CLOCK_STEP`], so the end of regulation plays out more slowly.

use rinkside_types::{ClockState, GameTime, LAST_TENTH, ParseError, Period};

/// Step between consecutive ticks, in seconds (or tenths of a second in
/// the final minute of regulation).
pub const CLOCK_STEP: usize = 3;

/// Highest second value within a minute.
const LAST_SECOND: u8 = 59;

/// Produce the ticks of one period.
///
/// `cutoff` is the remaining time at which the period stops early. Ticks
/// earlier than the cutoff are not produced; the cutoff itself appears only
/// when it lands on the step grid. `None` plays the period to its end.
///
/// # Errors
///
/// Returns [`ParseError`] if a tick falls outside the clock's range, which
/// the step grid never produces.
pub fn sequence_period(
    period: Period,
    duration_minutes: u8,
    cutoff: Option<GameTime>,
) -> Result<Vec<ClockState>, ParseError> {
    let final_minute_in_tenths = period == Period::LAST_REGULATION;
    let stop_minute = cutoff.map_or(0, GameTime::minute);

    let mut ticks = vec![ClockState::new(period, GameTime::minutes(duration_minutes))];

    for minute in (stop_minute..duration_minutes).rev() {
        if final_minute_in_tenths && minute == 0 {
            break;
        }
        for second in second_steps(minute, cutoff) {
            ticks.push(ClockState::new(period, GameTime::new(minute, second)?));
        }
    }

    if final_minute_in_tenths && stop_minute == 0 {
        for second in second_steps(0, cutoff) {
            let clock = ClockState::new(period, GameTime::new(0, second)?);
            for tenth in (0..=LAST_TENTH).rev().step_by(CLOCK_STEP) {
                ticks.push(clock.with_tenth(tenth)?);
            }
        }
    }

    Ok(ticks)
}

/// Seconds to tick through within `minute`, counting down from 59.
///
/// In the cutoff's own minute the walk stops at the cutoff second.
fn second_steps(minute: u8, cutoff: Option<GameTime>) -> impl Iterator<Item = u8> {
    let floor = match cutoff {
        Some(cutoff) if cutoff.minute() == minute => cutoff.second(),
        _ => 0,
    };
    (floor..=LAST_SECOND).rev().step_by(CLOCK_STEP)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn time(minute: u8, second: u8) -> GameTime {
        GameTime::new(minute, second).unwrap()
    }

    #[test]
    fn full_period_starts_at_twenty_minutes() {
        let ticks = sequence_period(Period::Regulation(1), 20, None).unwrap();
        assert_eq!(
            ticks.first(),
            Some(&ClockState::new(Period::Regulation(1), GameTime::minutes(20)))
        );
        assert_eq!(
            ticks.get(1),
            Some(&ClockState::new(Period::Regulation(1), time(19, 59)))
        );
        // 20 ticks per minute (59, 56, ..., 2) plus the period start.
        assert_eq!(ticks.len(), 1 + 20 * 20);
        assert_eq!(
            ticks.last(),
            Some(&ClockState::new(Period::Regulation(1), time(0, 2)))
        );
    }

    #[test]
    fn ticks_step_by_three_seconds() {
        let ticks = sequence_period(Period::Regulation(2), 20, None).unwrap();
        let seconds: Vec<u8> = ticks.iter().skip(1).take(4).map(ClockState::second).collect();
        assert_eq!(seconds, vec![59, 56, 53, 50]);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let ticks = sequence_period(Period::Regulation(3), 20, None).unwrap();
        for pair in ticks.windows(2) {
            if let [earlier, later] = pair {
                let earlier_key = (earlier.remaining(), earlier.tenth_of_second().unwrap_or(10));
                let later_key = (later.remaining(), later.tenth_of_second().unwrap_or(10));
                assert!(later_key < earlier_key, "{earlier:?} -> {later:?}");
            }
        }
    }

    #[test]
    fn third_period_ends_in_tenths() {
        let ticks = sequence_period(Period::Regulation(3), 20, None).unwrap();
        // 19 whole-second minutes, then 20 seconds of 4 tenths each.
        assert_eq!(ticks.len(), 1 + 19 * 20 + 20 * 4);
        assert!(
            ticks
                .iter()
                .filter(|tick| tick.minute() == 0)
                .all(|tick| tick.tenth_of_second().is_some())
        );
        assert_eq!(
            ticks.last(),
            Some(&ClockState::new(Period::Regulation(3), time(0, 2)).with_tenth(0).unwrap())
        );
        let tenths: Vec<Option<u8>> = ticks
            .iter()
            .rev()
            .take(4)
            .map(ClockState::tenth_of_second)
            .collect();
        assert_eq!(tenths, vec![Some(0), Some(3), Some(6), Some(9)]);
    }

    #[test]
    fn other_periods_have_no_tenths() {
        for period in [Period::Regulation(2), Period::PlayoffOvertime(4), Period::Overtime] {
            let ticks = sequence_period(period, period.length_minutes(), None).unwrap();
            assert!(ticks.iter().all(|tick| tick.tenth_of_second().is_none()));
        }
    }

    #[test]
    fn overtime_is_five_minutes_long() {
        let ticks = sequence_period(Period::Overtime, 5, None).unwrap();
        assert_eq!(ticks.first(), Some(&ClockState::new(Period::Overtime, GameTime::minutes(5))));
        assert_eq!(ticks.len(), 1 + 5 * 20);
    }

    #[test]
    fn cutoff_on_grid_is_last_tick() {
        let ticks = sequence_period(Period::Overtime, 5, Some(time(2, 5))).unwrap();
        assert_eq!(ticks.last(), Some(&ClockState::new(Period::Overtime, time(2, 5))));
    }

    #[test]
    fn cutoff_off_grid_stops_before_it() {
        let ticks = sequence_period(Period::Regulation(3), 20, Some(time(5, 10))).unwrap();
        assert_eq!(
            ticks.last(),
            Some(&ClockState::new(Period::Regulation(3), time(5, 11)))
        );
        assert!(ticks.iter().all(|tick| tick.tenth_of_second().is_none()));
    }

    #[test]
    fn cutoff_in_last_minute_of_regulation_uses_tenths() {
        let ticks = sequence_period(Period::Regulation(3), 20, Some(time(0, 53))).unwrap();
        assert_eq!(ticks.len(), 1 + 19 * 20 + 3 * 4);
        assert_eq!(
            ticks.last(),
            Some(&ClockState::new(Period::Regulation(3), time(0, 53)).with_tenth(0).unwrap())
        );
    }

    #[test]
    fn cutoff_at_period_start_yields_only_start() {
        let ticks = sequence_period(Period::Regulation(2), 20, Some(GameTime::minutes(20))).unwrap();
        assert_eq!(
            ticks,
            vec![ClockState::new(Period::Regulation(2), GameTime::minutes(20))]
        );
    }

    #[test]
    fn playoff_overtime_partial_period() {
        let ticks = sequence_period(Period::PlayoffOvertime(5), 20, Some(time(11, 2))).unwrap();
        assert_eq!(
            ticks.last(),
            Some(&ClockState::new(Period::PlayoffOvertime(5), time(11, 2)))
        );
    }
}
