//! Entrance animation driver
//!
//! A chart's reveal is a progress scalar interpolated 0 -> 1 over a
//! configured duration. Geometry consumes the scalar multiplicatively
//! (scaled radius, scaled bar length, scaled dash offset); there is no
//! separate animated code path.
//!
//! The driver is a small state machine: Idle -> Running -> Complete.
//! Disabled animation jumps straight to Complete with progress 1 and no
//! timer. New data arriving mid-animation cancels the running frame loop
//! and restarts from Idle.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen_futures::spawn_local;

/// Frame budget for the reveal loop, milliseconds.
const FRAME_MS: u32 = 16;

// ============================================================================
// TIMELINE (pure interpolation)
// ============================================================================

/// Easing functions applied to the raw time fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Decelerating cubic, the classic entrance curve.
    CubicOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Pure progress interpolation over a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Timeline {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Progress in [0, 1] at `elapsed_ms`: 0 at t=0, 1 at t>=duration,
    /// monotone non-decreasing in between. A non-positive duration is
    /// complete immediately.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.apply(elapsed_ms / self.duration_ms)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Per-item progress under a stagger delay: item `index` starts
/// `index * delay_ms` after the reveal begins.
pub fn staggered_progress(timeline: Timeline, delay_ms: f64, index: usize, elapsed_ms: f64) -> f64 {
    timeline.progress_at(elapsed_ms - delay_ms * index as f64)
}

// ============================================================================
// STATE MACHINE
// ============================================================================

/// Animation lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Cancellation flag shared with a running frame loop. Replacing a driver
/// is the only cancellation a chart ever needs.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Arc<AtomicBool>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// ============================================================================
// SINGLE-PROGRESS DRIVER
// ============================================================================

/// Drives one progress signal for a whole chart (pie, ring, line, radar,
/// gauge). Scoped to one component instance.
#[derive(Clone, Copy)]
pub struct AnimationDriver {
    timeline: Timeline,
    pub progress: RwSignal<f64>,
    pub phase: RwSignal<AnimationPhase>,
    handle: StoredValue<Option<AnimationHandle>>,
}

impl AnimationDriver {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            progress: RwSignal::new(0.0),
            phase: RwSignal::new(AnimationPhase::Idle),
            handle: StoredValue::new(None),
        }
    }

    fn cancel_running(&self) {
        self.handle.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.cancel();
            }
        });
    }

    /// Restart from Idle and run the frame loop to Complete.
    pub fn play(&self) {
        self.cancel_running();
        tracing::debug!("animation restart, duration {}ms", self.timeline.duration_ms);

        self.phase.set(AnimationPhase::Idle);
        self.progress.set(0.0);

        let handle = AnimationHandle::new();
        self.handle.set_value(Some(handle.clone()));

        let timeline = self.timeline;
        let progress = self.progress;
        let phase = self.phase;

        phase.set(AnimationPhase::Running);
        spawn_local(async move {
            let start = js_sys::Date::now();
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                if handle.is_cancelled() {
                    return;
                }
                let elapsed = js_sys::Date::now() - start;
                progress.set(timeline.progress_at(elapsed));
                if timeline.is_complete(elapsed) {
                    phase.set(AnimationPhase::Complete);
                    return;
                }
            }
        });
    }

    /// Jump to Complete with progress 1; no timer elapses.
    pub fn complete_now(&self) {
        self.cancel_running();
        self.progress.set(1.0);
        self.phase.set(AnimationPhase::Complete);
    }

    /// Re-run the reveal whenever `data` changes (or complete immediately
    /// when animation is disabled).
    pub fn restart_on_change<T>(self, data: Signal<T>, animated: bool)
    where
        T: Send + Sync + 'static,
    {
        Effect::new(move |_| {
            data.track();
            if animated {
                self.play();
            } else {
                self.complete_now();
            }
        });
    }
}

// ============================================================================
// PER-ITEM DRIVER
// ============================================================================

/// Independent progress cells keyed by item index (bars, bubbles,
/// contribution cells). Each item owns its own signal; a stagger delay
/// offsets item start times without any shared counter.
#[derive(Clone, Copy)]
pub struct StaggerDriver {
    timeline: Timeline,
    delay_ms: f64,
    cells: StoredValue<Vec<RwSignal<f64>>>,
    pub phase: RwSignal<AnimationPhase>,
    handle: StoredValue<Option<AnimationHandle>>,
}

impl StaggerDriver {
    /// `delay_ms = 0` animates all items in parallel.
    pub fn new(timeline: Timeline, delay_ms: f64) -> Self {
        Self {
            timeline,
            delay_ms,
            cells: StoredValue::new(Vec::new()),
            phase: RwSignal::new(AnimationPhase::Idle),
            handle: StoredValue::new(None),
        }
    }

    fn ensure_cells(&self, count: usize) {
        self.cells.update_value(|cells| {
            while cells.len() < count {
                cells.push(RwSignal::new(0.0));
            }
        });
    }

    fn set_all(&self, count: usize, value: f64) {
        self.ensure_cells(count);
        self.cells.with_value(|cells| {
            for cell in cells.iter().take(count) {
                cell.set(value);
            }
        });
    }

    /// Reactive read of item `index`'s progress. Indices beyond the
    /// animated set read as revealed.
    pub fn progress(&self, index: usize) -> f64 {
        self.cells
            .with_value(|cells| cells.get(index).copied())
            .map(|cell| cell.get())
            .unwrap_or(1.0)
    }

    fn cancel_running(&self) {
        self.handle.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.cancel();
            }
        });
    }

    /// Restart all `count` cells from Idle and run them to Complete.
    pub fn play(&self, count: usize) {
        self.cancel_running();
        self.phase.set(AnimationPhase::Idle);
        self.set_all(count, 0.0);

        let handle = AnimationHandle::new();
        self.handle.set_value(Some(handle.clone()));

        let timeline = self.timeline;
        let delay_ms = self.delay_ms;
        let cells = self.cells;
        let phase = self.phase;
        let total_ms = timeline.duration_ms + delay_ms * count.saturating_sub(1) as f64;

        phase.set(AnimationPhase::Running);
        spawn_local(async move {
            let start = js_sys::Date::now();
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                if handle.is_cancelled() {
                    return;
                }
                let elapsed = js_sys::Date::now() - start;
                cells.with_value(|cells| {
                    for (i, cell) in cells.iter().enumerate().take(count) {
                        cell.set(staggered_progress(timeline, delay_ms, i, elapsed));
                    }
                });
                if elapsed >= total_ms {
                    phase.set(AnimationPhase::Complete);
                    return;
                }
            }
        });
    }

    /// Reveal all `count` cells immediately; no timer elapses.
    pub fn complete_now(&self, count: usize) {
        self.cancel_running();
        self.set_all(count, 1.0);
        self.phase.set(AnimationPhase::Complete);
    }

    /// Re-run the staggered reveal whenever `data` changes.
    pub fn restart_on_change<T>(self, data: Signal<Vec<T>>, animated: bool)
    where
        T: Send + Sync + 'static,
    {
        Effect::new(move |_| {
            let count = data.with(|d| d.len());
            if animated {
                self.play(count);
            } else {
                self.complete_now(count);
            }
        });
    }

    /// Like `restart_on_change`, but for a fixed cell count independent of
    /// the data length (grids index cells by position, not by data item).
    pub fn restart_on_change_counted<T>(self, data: Signal<T>, animated: bool, count: usize)
    where
        T: Send + Sync + 'static,
    {
        Effect::new(move |_| {
            data.track();
            if animated {
                self.play(count);
            } else {
                self.complete_now(count);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        let timeline = Timeline::new(500.0);
        assert_eq!(timeline.progress_at(0.0), 0.0);
        assert_eq!(timeline.progress_at(500.0), 1.0);
        assert_eq!(timeline.progress_at(900.0), 1.0);
    }

    #[test]
    fn test_progress_monotone() {
        let timeline = Timeline::new(800.0).with_easing(Easing::CubicOut);
        let mut last = -1.0;
        for step in 0..=80 {
            let p = timeline.progress_at(step as f64 * 10.0);
            assert!(p >= last, "progress decreased at step {step}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let timeline = Timeline::new(0.0);
        assert_eq!(timeline.progress_at(0.0), 1.0);
        assert!(timeline.is_complete(0.0));
    }

    #[test]
    fn test_cubic_out_decelerates() {
        let eased = Easing::CubicOut.apply(0.5);
        assert!(eased > 0.5);
        assert_eq!(Easing::CubicOut.apply(0.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(1.0), 1.0);
    }

    #[test]
    fn test_staggered_progress_offsets_start() {
        let timeline = Timeline::new(100.0);
        // Item 2 starts 40ms in; at t=40 it has not moved yet
        assert_eq!(staggered_progress(timeline, 20.0, 2, 40.0), 0.0);
        assert_eq!(staggered_progress(timeline, 20.0, 0, 40.0), 0.4);
        assert_eq!(staggered_progress(timeline, 20.0, 2, 140.0), 1.0);
    }

    #[test]
    fn test_disabled_animation_is_instant() {
        let driver = AnimationDriver::new(Timeline::new(500.0));
        assert_eq!(driver.phase.get_untracked(), AnimationPhase::Idle);
        assert_eq!(driver.progress.get_untracked(), 0.0);

        driver.complete_now();
        assert_eq!(driver.phase.get_untracked(), AnimationPhase::Complete);
        assert_eq!(driver.progress.get_untracked(), 1.0);
    }

    #[test]
    fn test_stagger_driver_instant_reveal() {
        let driver = StaggerDriver::new(Timeline::new(500.0), 10.0);
        driver.complete_now(3);
        assert_eq!(driver.phase.get_untracked(), AnimationPhase::Complete);
        for i in 0..3 {
            assert_eq!(driver.progress(i), 1.0);
        }
        // Indices beyond the animated set read as revealed
        assert_eq!(driver.progress(9), 1.0);
    }

    #[test]
    fn test_handle_cancellation_flag() {
        let handle = AnimationHandle::new();
        assert!(!handle.is_cancelled());
        let shared = handle.clone();
        shared.cancel();
        assert!(handle.is_cancelled());
    }
}
