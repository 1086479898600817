#![forbid(unsafe_code)]

//! The rendering surface playback notifies.
//!
//! Renderers receive pure notifications: the step just applied and the
//! sequence as it stands afterwards. They never feed anything back into
//! playback.

use sortviz_core::Step;

/// Notification sink for a visual surface.
pub trait Renderer {
    /// Draw a fresh sequence (after generation or resize).
    fn render_initial(&mut self, values: &[f64]);

    /// Reflect one applied step. `values` already includes its effect.
    fn apply_step(&mut self, step: &Step, values: &[f64]);

    /// Mark the whole sequence as sorted.
    fn mark_finalized(&mut self, values: &[f64]);

    /// Drop any transient highlighting.
    fn clear_highlights(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_initial(&mut self, values: &[f64]) {
        (**self).render_initial(values);
    }

    fn apply_step(&mut self, step: &Step, values: &[f64]) {
        (**self).apply_step(step, values);
    }

    fn mark_finalized(&mut self, values: &[f64]) {
        (**self).mark_finalized(values);
    }

    fn clear_highlights(&mut self) {
        (**self).clear_highlights();
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render_initial(&mut self, values: &[f64]) {
        (**self).render_initial(values);
    }

    fn apply_step(&mut self, step: &Step, values: &[f64]) {
        (**self).apply_step(step, values);
    }

    fn mark_finalized(&mut self, values: &[f64]) {
        (**self).mark_finalized(values);
    }

    fn clear_highlights(&mut self) {
        (**self).clear_highlights();
    }
}

/// One captured notification.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Initial(Vec<f64>),
    Step(Step, Vec<f64>),
    ClearHighlights,
    Finalized(Vec<f64>),
}

/// Renderer that records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Steps received, in order.
    pub fn steps(&self) -> Vec<Step> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Step(step, _) => Some(*step),
                _ => None,
            })
            .collect()
    }

    /// The most recent sequence snapshot seen by this renderer.
    pub fn last_values(&self) -> Option<&[f64]> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Initial(v) | RenderEvent::Step(_, v) | RenderEvent::Finalized(v) => {
                Some(v.as_slice())
            }
            RenderEvent::ClearHighlights => None,
        })
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.events.last(), Some(RenderEvent::Finalized(_)))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render_initial(&mut self, values: &[f64]) {
        self.events.push(RenderEvent::Initial(values.to_vec()));
    }

    fn apply_step(&mut self, step: &Step, values: &[f64]) {
        self.events.push(RenderEvent::Step(*step, values.to_vec()));
    }

    fn mark_finalized(&mut self, values: &[f64]) {
        self.events.push(RenderEvent::Finalized(values.to_vec()));
    }

    fn clear_highlights(&mut self) {
        self.events.push(RenderEvent::ClearHighlights);
    }
}
