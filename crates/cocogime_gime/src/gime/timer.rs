//! Programmable 12-bit countdown timer.
//!
//! The reload value lives in $FF94/$FF95. In clock mode ($FF91 bit 5
//! set) the countdown runs off the chip clock and is modelled as an
//! absolute deadline the host polls through `next_timer_deadline`. In
//! border mode it decrements on every rising hsync edge instead.

use super::interrupts::InterruptSource;
use super::registers::{INIT1, TIMER_LSB, TIMER_MSB};
use super::Gime;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum TimerSource {
    /// 3.58 MHz chip clock.
    Clock,
    /// Horizontal border (hsync) pulses.
    HorizontalBorder,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct TimerState {
    /// Remaining count. Zero means stopped.
    pub(super) value: u16,
    /// Clock tick at which the clock-mode countdown expires.
    pub(super) deadline: Option<u64>,
}

impl Gime {
    pub(super) fn timer_source(&self) -> TimerSource {
        if self.registers[INIT1] & 0x20 != 0 {
            TimerSource::Clock
        } else {
            TimerSource::HorizontalBorder
        }
    }

    /// Reload the countdown from $FF94/$FF95 and rearm the deadline.
    pub(super) fn reset_timer(&mut self) {
        let mut value =
            (u16::from(self.registers[TIMER_MSB] & 0x0F) << 8) | u16::from(self.registers[TIMER_LSB]);
        if value > 0 {
            value += self.config.revision.timer_adjust();
        }
        self.timer.value = value;

        self.timer.deadline = if self.timer_source() == TimerSource::Clock && value > 0 {
            Some(self.clock + u64::from(value))
        } else {
            None
        };
        log::debug!(
            "GIME timer reload {value} ({:?}), deadline {:?}",
            self.timer_source(),
            self.timer.deadline
        );
    }

    fn timer_elapsed(&mut self) {
        self.reset_timer();
        self.is_blinking = !self.is_blinking;
        self.pulse_interrupt(InterruptSource::TMR);
    }

    /// Tick at which the clock-mode timer next expires, if armed.
    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.timer.deadline
    }

    /// Advance the chip clock by `ticks`, firing every timer expiry
    /// reached on the way. Each expiry rearms relative to its own tick.
    pub fn advance_clock(&mut self, ticks: u64) {
        let target = self.clock + ticks;
        while let Some(deadline) = self.timer.deadline {
            if deadline > target {
                break;
            }
            self.clock = deadline;
            self.timer_elapsed();
        }
        self.clock = target;
    }

    /// Hsync level change from the raster timing logic.
    pub fn horizontal_sync_changed(&mut self, level: bool) {
        self.set_interrupt_line(InterruptSource::HBORD, level);

        if self.timer_source() == TimerSource::HorizontalBorder && self.timer.value > 0 && level {
            self.timer.value -= 1;
            if self.timer.value == 0 {
                self.timer_elapsed();
            }
        }
    }

    /// The beam entered the bottom border.
    pub fn enter_bottom_border(&mut self) {
        self.pulse_interrupt(InterruptSource::VBORD);
    }
}
