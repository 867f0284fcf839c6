use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("speed {speed} ms is outside ({min}, {max}) ms")]
    SpeedOutOfRange { speed: u64, min: u64, max: u64 },
}

/// Limits and step used for tick interval changes, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBounds {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl SpeedBounds {
    /// Both bounds are exclusive.
    pub fn admits(&self, speed: u64) -> bool {
        self.min < speed && speed < self.max
    }
}

/// Recurring schedule; exists only while playing.
#[derive(Debug)]
struct Timer {
    interval: Duration,
    next_tick: Instant,
}

impl Timer {
    fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }
}

/// Decides when generations are due.
///
/// Nothing runs on its own: the host loop calls [`Playback::poll`] and steps
/// the board whenever it returns `true`. A host that falls behind gets one
/// tick and the schedule restarts from the current instant, so missed ticks
/// are dropped rather than replayed in a burst.
#[derive(Debug)]
pub struct Playback {
    speed: u64,
    bounds: SpeedBounds,
    timer: Option<Timer>,
}

impl Playback {
    pub fn new(speed: u64, bounds: SpeedBounds) -> Self {
        Self {
            speed,
            bounds,
            timer: None,
        }
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn bounds(&self) -> SpeedBounds {
        self.bounds
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    /// Starts the schedule with the first tick one interval after `now`.
    pub fn play_at(&mut self, now: Instant) {
        if self.timer.is_some() {
            return;
        }
        self.timer = Some(Timer::start(self.interval(), now));
        log::debug!("playback started, tick every {} ms", self.speed);
    }

    pub fn pause(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("playback paused");
        }
    }

    /// Returns `true` if a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if now < timer.next_tick {
            return false;
        }
        timer.next_tick += timer.interval;
        if timer.next_tick <= now {
            timer.next_tick = now + timer.interval;
        }
        true
    }

    /// Time left before the next tick, `None` while paused.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer
            .as_ref()
            .map(|timer| timer.next_tick.saturating_duration_since(now))
    }

    /// Changes the tick interval, keeping the running state.
    ///
    /// Values not strictly between the bounds leave everything untouched.
    pub fn set_speed(&mut self, speed: u64) -> Result<(), PlaybackError> {
        self.set_speed_at(speed, Instant::now())
    }

    pub fn set_speed_at(&mut self, speed: u64, now: Instant) -> Result<(), PlaybackError> {
        if !self.bounds.admits(speed) {
            log::debug!("rejected speed {speed} ms");
            return Err(PlaybackError::SpeedOutOfRange {
                speed,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        let was_playing = self.is_playing();
        self.pause();
        self.speed = speed;
        if was_playing {
            self.play_at(now);
        }
        Ok(())
    }

    /// Shortens the interval by one step, never reaching `min`.
    ///
    /// Returns the resulting speed.
    pub fn speed_up(&mut self) -> u64 {
        let target = self
            .speed
            .saturating_sub(self.bounds.step)
            .max(self.bounds.min.saturating_add(1));
        self.adjust(target)
    }

    /// Lengthens the interval by one step, never reaching `max`.
    ///
    /// Returns the resulting speed.
    pub fn slow_down(&mut self) -> u64 {
        let target = self
            .speed
            .saturating_add(self.bounds.step)
            .min(self.bounds.max.saturating_sub(1));
        self.adjust(target)
    }

    fn adjust(&mut self, target: u64) -> u64 {
        if target != self.speed {
            // bounds one apart leave no admissible speed
            if let Err(err) = self.set_speed(target) {
                log::warn!("speed stays at {} ms: {err}", self.speed);
            }
        }
        self.speed
    }
}
