//! Chart entities for tooltip and hit-test lookups.
//!
//! A draw pass records one entity per interactive chart element (data item,
//! legend item, axis). The interaction layer queries the collection with a
//! logical-space point to answer "what chart element is here".

use crate::geometry::{Point, Rect};

/// An interactive chart element recorded during a draw pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartEntity {
    /// Hot area in logical (pre-panel-scaling) coordinates.
    pub area: Rect,
    /// Tooltip text, if any.
    pub tooltip: Option<String>,
}

impl ChartEntity {
    /// Create a new entity.
    #[must_use]
    pub fn new(area: Rect, tooltip: Option<String>) -> Self {
        Self { area, tooltip }
    }
}

/// The entities recorded during the most recent draw pass.
#[derive(Debug, Clone, Default)]
pub struct EntityCollection {
    entities: Vec<ChartEntity>,
}

impl EntityCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entity.
    pub fn add(&mut self, entity: ChartEntity) {
        self.entities.push(entity);
    }

    /// Number of recorded entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop all recorded entities (start of a new draw pass).
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Find the entity at a logical-space point.
    ///
    /// Entities drawn later sit on top, so the most recently added containing
    /// entity wins.
    #[must_use]
    pub fn entity_at(&self, point: Point) -> Option<&ChartEntity> {
        self.entities.iter().rev().find(|e| e.area.contains(point))
    }
}
