use std::time::Duration;

use crate::chart::{self, ChartFrame};
use crate::debounce::Debouncer;
use crate::storage::KeyValueStore;
use crate::weights::{self, SampleSeries, WEIGHTS_KEY};

/// Weight entry form plus the cached chart drawn from the stored samples.
pub struct WeightChart {
    pub entry: String,
    pub message: Option<String>,
    pub confirm_clear: bool,
    series: SampleSeries,
    resize: Debouncer,
    surface: Option<egui::Vec2>,
    frame: Option<ChartFrame>,
    needs_render: bool,
    next_store_poll: Duration,
    renders: usize,
}

impl WeightChart {
    pub fn new(resize_quiet: Duration) -> Self {
        Self {
            entry: String::new(),
            message: None,
            confirm_clear: false,
            series: SampleSeries::new(),
            resize: Debouncer::new(resize_quiet),
            surface: None,
            frame: None,
            needs_render: true,
            next_store_poll: Duration::ZERO,
            renders: 0,
        }
    }

    pub fn set_resize_quiet(&mut self, quiet: Duration) {
        self.resize.set_quiet(quiet);
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn frame(&self) -> Option<&ChartFrame> {
        self.frame.as_ref()
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Validates and records the typed weight.
    pub fn submit_entry(&mut self, store: &mut dyn KeyValueStore) {
        let result = weights::parse_weight(&self.entry).and_then(|w| weights::append(store, w));
        match result {
            Ok(series) => {
                self.series = series;
                self.entry.clear();
                self.message = None;
                self.needs_render = true;
            }
            Err(err) => {
                log::debug!("Rejected weight entry {:?}: {err}", self.entry);
                self.message = Some("Enter a weight value".to_owned());
            }
        }
    }

    /// Clears all samples. Only called once the user confirmed.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) {
        weights::clear(store);
        self.confirm_clear = false;
        self.needs_render = true;
    }

    /// Tracks the surface size; a change starts or extends the resize delay.
    pub fn set_surface(&mut self, size: egui::Vec2, now: Duration) {
        match self.surface {
            None => self.needs_render = true,
            Some(previous) if previous != size => self.resize.trigger(now),
            Some(_) => {}
        }
        self.surface = Some(size);
    }

    /// Schedules a redraw when another window changed the stored samples.
    pub fn poll_store(&mut self, store: &mut dyn KeyValueStore, now: Duration, interval: Duration) {
        if now < self.next_store_poll {
            return;
        }
        self.next_store_poll = now + interval;
        if store.changed_externally(WEIGHTS_KEY) {
            log::info!("Weight log changed in another window");
            self.needs_render = true;
        }
    }

    /// Re-renders when something triggered it, returning the current frame.
    pub fn refresh(
        &mut self,
        store: &dyn KeyValueStore,
        now: Duration,
        pixel_density: f32,
    ) -> Option<&ChartFrame> {
        let resized = self.resize.poll(now);
        if let Some(size) = self.surface {
            if self.needs_render || resized {
                self.series = weights::load(store);
                self.frame = Some(chart::render(&self.series, size.x, size.y, pixel_density));
                self.needs_render = false;
                self.renders += 1;
                log::debug!(
                    "Rendered weight chart: {} samples at {}x{}",
                    self.series.len(),
                    size.x,
                    size.y
                );
            }
        }
        self.frame.as_ref()
    }

    /// When the next frame is needed to finish a pending resize.
    pub fn repaint_after(&self, now: Duration) -> Option<Duration> {
        self.resize.remaining(now)
    }
}
