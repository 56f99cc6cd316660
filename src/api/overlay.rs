use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{
    RectangleAnnotation, RectangleOverlayOptions, RectangleOverlayOptionsUpdate, SeriesApi,
    TimeScaleApi, map_annotations,
};
use crate::render::{BitmapSurface, RectangleHit, RectangleRenderer};

/// Host-owned collaborators handed over on attach.
///
/// The overlay observes these through shared handles; it never owns the host
/// scales. `request_redraw` is fire-and-forget: the host may batch or coalesce
/// and gives no completion signal.
#[derive(Clone)]
pub struct HostContext {
    pub time_scale: Rc<dyn TimeScaleApi>,
    pub series: Rc<dyn SeriesApi>,
    pub request_redraw: Rc<dyn Fn()>,
}

impl HostContext {
    #[must_use]
    pub fn new(
        time_scale: Rc<dyn TimeScaleApi>,
        series: Rc<dyn SeriesApi>,
        request_redraw: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            time_scale,
            series,
            request_redraw,
        }
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext").finish_non_exhaustive()
    }
}

/// Lifecycle controller for a rectangle overlay.
///
/// Holds the annotation list and style options, re-runs coordinate mapping on
/// every render request, and feeds the renderer. Mutations are accepted in
/// both the attached and detached states; detached mutations are buffered and
/// take visual effect on the first attached render pass.
pub struct RectangleOverlay {
    annotations: Vec<RectangleAnnotation>,
    options: RectangleOverlayOptions,
    renderer: RectangleRenderer,
    host: Option<HostContext>,
}

impl Default for RectangleOverlay {
    fn default() -> Self {
        Self::new(RectangleOverlayOptions::default())
    }
}

impl fmt::Debug for RectangleOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RectangleOverlay")
            .field("annotations", &self.annotations.len())
            .field("options", &self.options)
            .field("attached", &self.host.is_some())
            .finish()
    }
}

impl RectangleOverlay {
    #[must_use]
    pub fn new(options: RectangleOverlayOptions) -> Self {
        Self {
            annotations: Vec::new(),
            options,
            renderer: RectangleRenderer::new(),
            host: None,
        }
    }

    /// Stores the host collaborators and prepares renderer data against them.
    pub fn attach(&mut self, host: HostContext) {
        debug!(annotations = self.annotations.len(), "attach rectangle overlay");
        self.host = Some(host);
        self.update_views();
    }

    /// Clears host references and empties the render batch.
    ///
    /// Idempotent and safe to call before any attach; the overlay retains no
    /// handle to a torn-down host afterwards.
    pub fn detach(&mut self) {
        if self.host.is_some() {
            debug!("detach rectangle overlay");
        }
        self.host = None;
        self.update_views();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Replaces the entire annotation list; not a merge.
    pub fn set_rectangles(&mut self, annotations: Vec<RectangleAnnotation>) {
        debug!(count = annotations.len(), "set overlay rectangles");
        self.annotations = annotations;
        self.sync();
    }

    /// Appends one annotation, preserving insertion order for hit-test
    /// tie-breaking.
    pub fn add_rectangle(&mut self, annotation: RectangleAnnotation) {
        trace!(id = %annotation.id, "add overlay rectangle");
        self.annotations.push(annotation);
        self.sync();
    }

    /// Removes every annotation whose id matches; silent no-op when none do.
    pub fn remove_rectangle(&mut self, id: &str) {
        let before = self.annotations.len();
        self.annotations.retain(|annotation| annotation.id != id);
        trace!(id, removed = before - self.annotations.len(), "remove overlay rectangle");
        self.sync();
    }

    /// Applies a partial style update via copy-with-override.
    pub fn update_options(&mut self, update: &RectangleOverlayOptionsUpdate) {
        self.options = self.options.merged(update);
        self.sync();
    }

    #[must_use]
    pub fn options(&self) -> RectangleOverlayOptions {
        self.options
    }

    #[must_use]
    pub fn annotations(&self) -> &[RectangleAnnotation] {
        &self.annotations
    }

    #[must_use]
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Re-runs coordinate mapping over the current list into the renderer.
    ///
    /// Runs fresh on every call; a detached overlay maps to an empty batch.
    pub fn update_views(&mut self) {
        let items = match &self.host {
            Some(host) => map_annotations(
                &self.annotations,
                host.time_scale.as_ref(),
                host.series.as_ref(),
                &self.options,
            ),
            None => Vec::new(),
        };
        self.renderer.set_data(items);
    }

    /// Recomputes coordinates and draws the batch onto `surface`.
    pub fn draw(
        &mut self,
        surface: &mut dyn BitmapSurface,
        is_hovered: bool,
        hit_test_hint: Option<&Value>,
    ) {
        self.update_views();
        self.renderer.draw(surface, is_hovered, hit_test_hint);
    }

    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<RectangleHit<'_>> {
        self.renderer.hit_test(x, y)
    }

    #[must_use]
    pub fn renderer(&self) -> &RectangleRenderer {
        &self.renderer
    }

    fn sync(&mut self) {
        let Some(request_redraw) = self
            .host
            .as_ref()
            .map(|host| Rc::clone(&host.request_redraw))
        else {
            return;
        };
        self.update_views();
        (request_redraw)();
    }
}
