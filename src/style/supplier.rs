//! Suppliers of "next" style values for auto-populated series attributes.

use crate::color::Rgba;
use crate::style::values::{MarkerShape, Stroke};

/// Hands out the next paint/stroke/shape when a renderer auto-assigns a
/// visually distinct attribute to a new series.
///
/// Each call advances an internal cursor and is therefore non-idempotent;
/// callers must request at most one value per auto-populate fill so that
/// supplier entries are not skipped. A supplier is owned by the plot and
/// shared by every renderer attached to it, so the sequences stay distinct
/// across renderers.
pub trait DrawingSupplier {
    /// Next series paint.
    fn next_paint(&mut self) -> Rgba;
    /// Next series fill paint.
    fn next_fill_paint(&mut self) -> Rgba;
    /// Next series outline paint.
    fn next_outline_paint(&mut self) -> Rgba;
    /// Next series stroke.
    fn next_stroke(&mut self) -> Stroke;
    /// Next series outline stroke.
    fn next_outline_stroke(&mut self) -> Stroke;
    /// Next series marker shape.
    fn next_shape(&mut self) -> MarkerShape;
}

/// Qualitative palette for the default paint sequence.
const PAINT_SEQUENCE: [Rgba; 10] = [
    Rgba::rgb(255, 85, 85),
    Rgba::rgb(85, 85, 255),
    Rgba::rgb(85, 255, 85),
    Rgba::rgb(255, 255, 85),
    Rgba::rgb(255, 85, 255),
    Rgba::rgb(85, 255, 255),
    Rgba::rgb(255, 128, 0),
    Rgba::rgb(128, 0, 255),
    Rgba::rgb(0, 128, 64),
    Rgba::rgb(128, 64, 0),
];

/// Pale variants used for fills.
const FILL_PAINT_SEQUENCE: [Rgba; 4] = [
    Rgba::rgb(255, 200, 200),
    Rgba::rgb(200, 200, 255),
    Rgba::rgb(200, 255, 200),
    Rgba::rgb(255, 255, 200),
];

const OUTLINE_PAINT_SEQUENCE: [Rgba; 2] = [Rgba::BLACK, Rgba::GRAY];

const STROKE_SEQUENCE: [Stroke; 1] = [Stroke::solid(1.0)];

const SHAPE_SEQUENCE: [MarkerShape; 7] = [
    MarkerShape::Square,
    MarkerShape::Circle,
    MarkerShape::TriangleUp,
    MarkerShape::Diamond,
    MarkerShape::TriangleDown,
    MarkerShape::Cross,
    MarkerShape::Plus,
];

/// The stock supplier: fixed sequences cycled independently per attribute
/// kind, wrapping around when exhausted.
#[derive(Debug, Clone, Default)]
pub struct DefaultDrawingSupplier {
    paint_index: usize,
    fill_paint_index: usize,
    outline_paint_index: usize,
    stroke_index: usize,
    outline_stroke_index: usize,
    shape_index: usize,
}

impl DefaultDrawingSupplier {
    /// Create a supplier with every cursor at the start of its sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn cycle<T: Copy>(sequence: &[T], cursor: &mut usize) -> T {
    let value = sequence[*cursor % sequence.len()];
    *cursor += 1;
    value
}

impl DrawingSupplier for DefaultDrawingSupplier {
    fn next_paint(&mut self) -> Rgba {
        cycle(&PAINT_SEQUENCE, &mut self.paint_index)
    }

    fn next_fill_paint(&mut self) -> Rgba {
        cycle(&FILL_PAINT_SEQUENCE, &mut self.fill_paint_index)
    }

    fn next_outline_paint(&mut self) -> Rgba {
        cycle(&OUTLINE_PAINT_SEQUENCE, &mut self.outline_paint_index)
    }

    fn next_stroke(&mut self) -> Stroke {
        cycle(&STROKE_SEQUENCE, &mut self.stroke_index)
    }

    fn next_outline_stroke(&mut self) -> Stroke {
        cycle(&STROKE_SEQUENCE, &mut self.outline_stroke_index)
    }

    fn next_shape(&mut self) -> MarkerShape {
        cycle(&SHAPE_SEQUENCE, &mut self.shape_index)
    }
}
