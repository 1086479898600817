#![forbid(unsafe_code)]

//! Bar-chart view model.
//!
//! Tracks what a bar visualization shows: one bar per element, scaled to
//! the tallest value, with a transient highlight per bar.
//!
//! # Highlight rules
//!
//! - Every step first clears the previous step's highlights.
//! - `Compare(i, j)` marks both bars [`Highlight::Comparing`].
//! - `Swap(i, j)` marks both bars [`Highlight::Swapping`].
//! - `Set` only changes heights.
//! - Finalization marks every bar [`Highlight::Sorted`].

use sortviz_core::Step;

use crate::renderer::Renderer;

/// Visual state of one bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Comparing,
    Swapping,
    Sorted,
}

impl Highlight {
    /// Fill glyph used by [`BarChart::to_text`].
    pub fn glyph(self) -> char {
        match self {
            Self::None => '█',
            Self::Comparing => '▓',
            Self::Swapping => '▒',
            Self::Sorted => '░',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub value: f64,
    /// Height as a percentage of the tallest bar.
    pub height_pct: f64,
    pub highlight: Highlight,
}

/// One bar per sequence element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChart {
    bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_values(values: &[f64]) -> Self {
        let mut chart = Self {
            bars: values
                .iter()
                .map(|&value| Bar {
                    value,
                    height_pct: 0.0,
                    highlight: Highlight::None,
                })
                .collect(),
        };
        chart.rescale();
        chart
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Indices currently carrying `highlight`.
    pub fn highlighted(&self, highlight: Highlight) -> Vec<usize> {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, b)| b.highlight == highlight)
            .map(|(i, _)| i)
            .collect()
    }

    /// Reflect a step whose effect is already in `values`.
    ///
    /// A chart whose length differs from `values` is rebuilt first.
    pub fn apply_step(&mut self, step: &Step, values: &[f64]) {
        self.resync(values);
        self.clear_highlights();
        match *step {
            Step::Compare(i, j) => {
                self.bars[i].highlight = Highlight::Comparing;
                self.bars[j].highlight = Highlight::Comparing;
            }
            Step::Swap(i, j) => {
                self.bars[i].value = values[i];
                self.bars[j].value = values[j];
                self.bars[i].highlight = Highlight::Swapping;
                self.bars[j].highlight = Highlight::Swapping;
                self.rescale();
            }
            Step::Set { index, .. } => {
                self.bars[index].value = values[index];
                self.rescale();
            }
        }
    }

    fn resync(&mut self, values: &[f64]) {
        if self.bars.len() != values.len() {
            *self = Self::from_values(values);
        }
    }

    pub fn clear_highlights(&mut self) {
        for bar in &mut self.bars {
            bar.highlight = Highlight::None;
        }
    }

    pub fn mark_sorted(&mut self) {
        for bar in &mut self.bars {
            bar.highlight = Highlight::Sorted;
        }
    }

    fn rescale(&mut self) {
        let max = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(f64::NEG_INFINITY, f64::max);
        for bar in &mut self.bars {
            bar.height_pct = if max > 0.0 {
                (bar.value / max * 100.0).max(0.0)
            } else {
                0.0
            };
        }
    }

    /// Column chart, `rows` lines tall, one column per bar.
    ///
    /// Any positive bar occupies at least one row.
    pub fn to_text(&self, rows: usize) -> String {
        let filled: Vec<usize> = self
            .bars
            .iter()
            .map(|b| {
                let cells = (b.height_pct / 100.0 * rows as f64).round() as usize;
                if b.height_pct > 0.0 { cells.clamp(1, rows) } else { 0 }
            })
            .collect();

        let mut out = String::with_capacity((self.bars.len() + 1) * rows);
        for row in (0..rows).rev() {
            for (bar, &height) in self.bars.iter().zip(&filled) {
                out.push(if height > row { bar.highlight.glyph() } else { ' ' });
            }
            if row > 0 {
                out.push('\n');
            }
        }
        out
    }
}

/// Renderer that keeps a [`BarChart`] current.
#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    chart: BarChart,
    frames: u64,
}

impl BarChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    /// Notifications received since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for BarChartRenderer {
    fn render_initial(&mut self, values: &[f64]) {
        self.chart = BarChart::from_values(values);
        self.frames += 1;
    }

    fn apply_step(&mut self, step: &Step, values: &[f64]) {
        self.chart.apply_step(step, values);
        self.frames += 1;
    }

    fn mark_finalized(&mut self, values: &[f64]) {
        self.chart.resync(values);
        self.chart.mark_sorted();
        self.frames += 1;
    }

    fn clear_highlights(&mut self) {
        self.chart.clear_highlights();
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_scale_to_tallest() {
        let chart = BarChart::from_values(&[25.0, 50.0, 100.0]);
        let heights: Vec<f64> = chart.bars().iter().map(|b| b.height_pct).collect();
        assert_eq!(heights, vec![25.0, 50.0, 100.0]);
    }

    #[test]
    fn all_zero_values_have_zero_height() {
        let chart = BarChart::from_values(&[0.0, 0.0]);
        assert!(chart.bars().iter().all(|b| b.height_pct == 0.0));
    }

    #[test]
    fn compare_replaces_previous_highlight() {
        let mut chart = BarChart::from_values(&[1.0, 2.0, 3.0]);
        chart.apply_step(&Step::Compare(0, 1), &[1.0, 2.0, 3.0]);
        assert_eq!(chart.highlighted(Highlight::Comparing), vec![0, 1]);
        chart.apply_step(&Step::Compare(1, 2), &[1.0, 2.0, 3.0]);
        assert_eq!(chart.highlighted(Highlight::Comparing), vec![1, 2]);
    }

    #[test]
    fn swap_moves_values_and_highlights() {
        let mut chart = BarChart::from_values(&[1.0, 2.0]);
        chart.apply_step(&Step::Swap(0, 1), &[2.0, 1.0]);
        assert_eq!(chart.bars()[0].value, 2.0);
        assert_eq!(chart.bars()[0].height_pct, 100.0);
        assert_eq!(chart.highlighted(Highlight::Swapping), vec![0, 1]);
    }

    #[test]
    fn set_rescales_against_new_maximum() {
        let mut chart = BarChart::from_values(&[10.0, 20.0]);
        chart.apply_step(&Step::Set { index: 0, value: 40.0 }, &[40.0, 20.0]);
        assert_eq!(chart.bars()[0].height_pct, 100.0);
        assert_eq!(chart.bars()[1].height_pct, 50.0);
        assert_eq!(chart.highlighted(Highlight::None), vec![0, 1]);
    }

    #[test]
    fn text_chart_draws_columns() {
        let mut chart = BarChart::from_values(&[1.0, 2.0, 4.0]);
        assert_eq!(chart.to_text(4), "  █\n  █\n ██\n███");
        chart.mark_sorted();
        assert_eq!(chart.to_text(2), "  ░\n░░░");
    }

    #[test]
    fn renderer_tracks_chart() {
        let mut renderer = BarChartRenderer::new();
        renderer.render_initial(&[3.0, 1.0]);
        renderer.apply_step(&Step::Swap(0, 1), &[1.0, 3.0]);
        renderer.mark_finalized(&[1.0, 3.0]);
        assert_eq!(renderer.frames(), 3);
        assert_eq!(renderer.chart().highlighted(Highlight::Sorted), vec![0, 1]);
        assert_eq!(renderer.chart().bars()[1].value, 3.0);
    }

    #[test]
    fn stale_chart_rebuilds_from_values() {
        let mut chart = BarChart::from_values(&[5.0]);
        chart.apply_step(&Step::Compare(1, 2), &[1.0, 2.0, 4.0]);
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.bars()[2].height_pct, 100.0);
        assert_eq!(chart.highlighted(Highlight::Comparing), vec![1, 2]);
    }

    #[test]
    fn fresh_renderer_plays_without_initial_frame() {
        use crate::control::Unattended;
        use crate::player::play;
        use sortviz_core::{Algorithm, Ordering, Sequence, generate};
        use web_time::Duration;

        let input = Sequence::new(vec![3.0, 1.0, 2.0]).unwrap();
        let trace = generate(Algorithm::Bubble, &input, Ordering::Ascending);
        let mut live = input.clone();
        let mut renderer = BarChartRenderer::new();

        let report = play(&trace, &mut live, &mut renderer, Duration::ZERO, &Unattended);

        assert!(report.is_completed());
        let values: Vec<f64> = renderer.chart().bars().iter().map(|b| b.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(renderer.chart().highlighted(Highlight::Sorted), vec![0, 1, 2]);
    }

    #[test]
    fn finalize_on_empty_chart_marks_every_value() {
        let mut renderer = BarChartRenderer::new();
        renderer.mark_finalized(&[2.0, 1.0]);
        assert_eq!(renderer.chart().highlighted(Highlight::Sorted), vec![0, 1]);
    }
}
