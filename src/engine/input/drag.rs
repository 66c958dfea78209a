//! Spawning boxes by dragging out a rectangle with the pointer.

use crate::environment::{Environment, ObjectId};
use crate::shape::{RenderShape, ShapeStyle};
use log::{debug, warn};
use nalgebra::{Point2, Vector2, center};

#[derive(Debug, Copy, Clone, PartialEq)]
struct Drag {
    anchor: Point2<f32>,
    corner: Point2<f32>,
}

impl Drag {
    fn screen_extent(&self) -> Vector2<f32> {
        (self.corner - self.anchor).abs()
    }
}

/// Tracks one pointer drag at a time and turns it into a dynamic box.
///
/// Drags that stay within `min_extent` pixels on both axes count as
/// accidental clicks and are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSpawner {
    drag: Option<Drag>,
    min_extent: f32,
}

impl Default for DragSpawner {
    fn default() -> Self {
        DragSpawner::new(1.0)
    }
}

impl DragSpawner {
    pub fn new(min_extent: f32) -> Self {
        DragSpawner {
            drag: None,
            min_extent: min_extent.max(0.0),
        }
    }

    pub fn min_extent(&self) -> f32 {
        self.min_extent
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn press(&mut self, p: Point2<f32>) {
        self.drag = Some(Drag {
            anchor: p,
            corner: p,
        });
    }

    pub fn drag_to(&mut self, p: Point2<f32>) {
        if let Some(drag) = &mut self.drag {
            drag.corner = p;
        }
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Ends the drag at `p` and spawns a dynamic box covering the dragged
    /// rectangle.
    pub fn release(&mut self, p: Point2<f32>, environment: &mut Environment) -> Option<ObjectId> {
        let mut drag = self.drag.take()?;
        drag.corner = p;

        let extent = drag.screen_extent();
        if extent.x <= self.min_extent && extent.y <= self.min_extent {
            debug!(
                "Dropped drag of {} x {} pixels, below the {} pixel minimum",
                extent.x, extent.y, self.min_extent
            );
            return None;
        }

        let start = environment.screen_to_world_position(drag.anchor);
        let end = environment.screen_to_world_position(drag.corner);
        let world_center = center(&start, &end);

        // a flat drag still gets a usable box, at least one pixel per axis
        let floor = self.min_extent.max(1.0);
        let screen_extent = extent.map(|e| e.max(floor));
        let world_extent = environment.screen_to_world_size(screen_extent);

        match environment.create_box(
            world_extent.x,
            world_extent.y,
            world_center.x,
            world_center.y,
            true,
        ) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Couldn't spawn dragged box: {e}");
                None
            }
        }
    }

    /// The rectangle currently being dragged, in screen space.
    pub fn preview(&self, style: ShapeStyle) -> Option<RenderShape> {
        let drag = self.drag?;
        let extent = drag.screen_extent();
        if extent.x <= 0.0 && extent.y <= 0.0 {
            return None;
        }

        let mut shape = RenderShape::rectangle(extent.x, extent.y, style);
        shape.set_position(center(&drag.anchor, &drag.corner));
        Some(shape)
    }
}
