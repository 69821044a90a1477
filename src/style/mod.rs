//! Per-series style attribute resolution.
//!
//! Chart renderers resolve a paint/stroke/shape/font for every (series, item)
//! they draw. The resolution chain is the same for every attribute kind:
//!
//! 1. an explicit per-series override, stored in an [`AttributeTable`];
//! 2. if absent and the kind auto-populates, the next value from the plot's
//!    shared [`DrawingSupplier`], cached into the table without notifying;
//! 3. otherwise the process-wide default for the kind.
//!
//! [`SeriesRenderer`] aggregates one [`AttributeResolver`] per kind and owns
//! the change-notification plumbing.

pub mod renderer;
pub mod resolver;
pub mod supplier;
pub mod table;
pub mod values;

pub use renderer::SeriesRenderer;
pub use resolver::AttributeResolver;
pub use supplier::{DefaultDrawingSupplier, DrawingSupplier};
pub use table::AttributeTable;
pub use values::{DashPattern, FontSpec, LabelPlacement, MarkerShape, Stroke};
