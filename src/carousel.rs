use crate::controller::{BackgroundController, LayoutMode};
use crate::core::surface::RenderSurface;

/// Minimal slide carousel standing in for the page's slider widget
///
/// Tracks the active index only. Narrow layouts page one slide at a time;
/// wide layouts show two slides per view and page by two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    mode: LayoutMode,
    slide_count: usize,
    active_index: usize,
}

impl Carousel {
    pub fn new(mode: LayoutMode, slide_count: usize, initial_index: usize) -> Self {
        let mut carousel = Self {
            mode,
            slide_count,
            active_index: 0,
        };
        carousel.active_index = initial_index.min(carousel.last_index());
        carousel
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Highest index the active slide can reach (the last full view)
    pub fn last_index(&self) -> usize {
        self.slide_count
            .saturating_sub(self.mode.slides_per_group())
    }

    /// Advance one group; `Some(new index)` only when the slide changed
    pub fn next(&mut self) -> Option<usize> {
        let target = (self.active_index + self.mode.slides_per_group()).min(self.last_index());
        self.slide_to(target)
    }

    /// Go back one group; `Some(new index)` only when the slide changed
    pub fn prev(&mut self) -> Option<usize> {
        let target = self.active_index.saturating_sub(self.mode.slides_per_group());
        self.slide_to(target)
    }

    pub fn slide_to(&mut self, index: usize) -> Option<usize> {
        let index = index.min(self.last_index());
        if index == self.active_index {
            return None;
        }
        self.active_index = index;
        Some(index)
    }
}

/// Glue between the carousel and the background
///
/// Rebuilds the carousel for the viewport's layout on every resize and
/// forwards slide changes to the controller. The render loop picks up the
/// new size on its own next frame.
#[derive(Debug)]
pub struct CarouselBinding {
    carousel: Option<Carousel>,
    slide_count: usize,
    breakpoint: f64,
}

impl CarouselBinding {
    pub fn new(slide_count: usize, breakpoint: f64) -> Self {
        Self {
            carousel: None,
            slide_count,
            breakpoint,
        }
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn mode(&self) -> Option<LayoutMode> {
        self.carousel.as_ref().map(Carousel::mode)
    }

    /// Destroy and rebuild the carousel for a viewport in logical pixels
    ///
    /// The active slide carries over (clamped to the new layout) and is
    /// re-announced so the background stays on the matching panel.
    pub fn on_resize<S: RenderSurface>(
        &mut self,
        width: f64,
        height: f64,
        controller: &mut BackgroundController<S>,
    ) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }

        let mode = LayoutMode::for_viewport(width, height, self.breakpoint);
        let previous = self.carousel.take().map(|c| c.active_index()).unwrap_or(0);
        let carousel = Carousel::new(mode, self.slide_count, previous);
        log::debug!(
            "Carousel rebuilt for {}x{}: {:?}, slide {}",
            width,
            height,
            mode,
            carousel.active_index()
        );

        let index = carousel.active_index();
        self.carousel = Some(carousel);
        controller.show_slide(mode, index);
    }

    pub fn next<S: RenderSurface>(&mut self, controller: &mut BackgroundController<S>) {
        let change = self.carousel.as_mut().and_then(Carousel::next);
        self.on_slide_change(change, controller);
    }

    pub fn prev<S: RenderSurface>(&mut self, controller: &mut BackgroundController<S>) {
        let change = self.carousel.as_mut().and_then(Carousel::prev);
        self.on_slide_change(change, controller);
    }

    fn on_slide_change<S: RenderSurface>(
        &self,
        change: Option<usize>,
        controller: &mut BackgroundController<S>,
    ) {
        if let (Some(index), Some(mode)) = (change, self.mode()) {
            log::debug!("Slide change: {} ({:?})", index, mode);
            controller.show_slide(mode, index);
        }
    }
}
