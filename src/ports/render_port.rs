//! Render target port.

use crate::domain::highlight::HighlightStyle;
use chrono::NaiveDate;

/// Anything that can shade a region of a date x-axis.
///
/// Shading is assumed infallible at this layer.
pub trait RenderTarget {
    fn shade_x_range(&mut self, start: NaiveDate, end: NaiveDate, style: &HighlightStyle);
}
