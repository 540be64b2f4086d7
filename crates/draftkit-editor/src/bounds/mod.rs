//! Shape bounds queries: control-point lookup, containment and marquee
//! overlap.
//!
//! Every shape kind has a handler implementing [`ShapeBounds`], looked
//! up through a [`BoundsRegistry`] keyed by [`ShapeKind`]. Composite
//! shapes (groups, inserts) recurse through the registry they were
//! called with, so a host that replaces a handler changes the behaviour
//! of nested shapes too.
//!
//! All three queries take the same hit parameters:
//!
//! - `radius`: half-width of the hit target around points and segments,
//!   in document units.
//! - `scale`: the view zoom factor. Shapes flagged
//!   [`ShapeState::SIZE`] keep a constant on-screen hit area, so their
//!   hit geometry is rescaled by `scale`; all other shapes ignore it.

use std::collections::HashMap;

use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, PointShape, ShapeKind};
use draftkit_core::state::ShapeState;

mod arc;
mod cubic;
mod ellipse;
mod group;
mod image;
mod insert;
mod line;
mod path;
mod point;
mod quadratic;
mod rectangle;
mod text;
mod wire;

pub use arc::ArcBounds;
pub use cubic::CubicBezierBounds;
pub use ellipse::EllipseBounds;
pub use group::GroupBounds;
pub use image::ImageBounds;
pub use insert::InsertBounds;
pub use line::LineBounds;
pub use path::PathBounds;
pub use point::PointBounds;
pub use quadratic::QuadraticBezierBounds;
pub use rectangle::RectangleBounds;
pub use text::TextBounds;
pub use wire::WireBounds;

/// Bounds queries for one shape kind.
///
/// Handlers are invoked through [`BoundsRegistry`] dispatch, which
/// guarantees the shape variant matches the handler. Calling a handler
/// directly with the wrong variant is a programming error and panics.
pub trait ShapeBounds: Send + Sync {
    /// Returns the first control point of `shape` whose hit square
    /// contains `target`, or `None` when no point is hit.
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape>;

    /// Tests whether `target` hits the shape's interactive area.
    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> bool;

    /// Tests whether the shape overlaps a marquee rectangle.
    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> bool;
}

/// Dispatch table from shape kind to bounds handler.
///
/// `Default` registers the full built-in set. Hosts may override or
/// extend entries with [`register`](BoundsRegistry::register); querying
/// a kind with no handler is a programming error and panics.
pub struct BoundsRegistry {
    handlers: HashMap<ShapeKind, Box<dyn ShapeBounds>>,
}

impl BoundsRegistry {
    /// A registry with no handlers. Useful for hosts that register a
    /// custom set from scratch.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `kind`, replacing any existing entry.
    pub fn register(&mut self, kind: ShapeKind, handler: Box<dyn ShapeBounds>) {
        self.handlers.insert(kind, handler);
    }

    fn handler(&self, kind: ShapeKind) -> &dyn ShapeBounds {
        match self.handlers.get(&kind) {
            Some(handler) => handler.as_ref(),
            None => panic!("no bounds handler registered for {:?} shapes", kind),
        }
    }

    /// Dispatches [`ShapeBounds::try_get_point`] for `shape`'s kind.
    pub fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
    ) -> Option<&'a PointShape> {
        self.handler(shape.kind())
            .try_get_point(shape, target, radius, scale, self)
    }

    /// Dispatches [`ShapeBounds::contains`] for `shape`'s kind.
    pub fn contains(&self, shape: &BaseShape, target: Point2, radius: f64, scale: f64) -> bool {
        self.handler(shape.kind())
            .contains(shape, target, radius, scale, self)
    }

    /// Dispatches [`ShapeBounds::overlaps`] for `shape`'s kind.
    pub fn overlaps(&self, shape: &BaseShape, rect: Rect2, radius: f64, scale: f64) -> bool {
        self.handler(shape.kind())
            .overlaps(shape, rect, radius, scale, self)
    }
}

impl Default for BoundsRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ShapeKind::Point, Box::new(PointBounds));
        registry.register(ShapeKind::Line, Box::new(LineBounds));
        registry.register(ShapeKind::Rectangle, Box::new(RectangleBounds));
        registry.register(ShapeKind::Ellipse, Box::new(EllipseBounds));
        registry.register(ShapeKind::Arc, Box::new(ArcBounds));
        registry.register(ShapeKind::CubicBezier, Box::new(CubicBezierBounds));
        registry.register(ShapeKind::QuadraticBezier, Box::new(QuadraticBezierBounds));
        registry.register(ShapeKind::Text, Box::new(TextBounds));
        registry.register(ShapeKind::Image, Box::new(ImageBounds));
        registry.register(ShapeKind::Path, Box::new(PathBounds));
        registry.register(ShapeKind::Group, Box::new(GroupBounds));
        registry.register(ShapeKind::Insert, Box::new(InsertBounds));
        registry.register(ShapeKind::Wire, Box::new(WireBounds));
        registry
    }
}

/// The hit square of a control point.
///
/// Half-width is `radius`, or `radius / scale` when the point carries
/// the `SIZE` flag and the view is zoomed, keeping the on-screen target
/// size constant.
pub(crate) fn point_rect(point: &PointShape, radius: f64, scale: f64) -> Rect2 {
    let radius = if point.state.contains(ShapeState::SIZE) && scale != 1.0 {
        radius / scale
    } else {
        radius
    };
    Rect2::square(point.position(), radius)
}

/// Tests `target` against a single control point through the
/// registered `Point` handler, so a host that replaces that handler
/// changes control-point lookup for every shape kind at once.
pub(crate) fn point_hit(
    registry: &BoundsRegistry,
    point: &PointShape,
    target: Point2,
    radius: f64,
    scale: f64,
) -> bool {
    registry.contains(&BaseShape::Point(point.clone()), target, radius, scale)
}

/// First point in `points` hit at `target`, by the `Point` handler's
/// rules.
pub(crate) fn first_point_hit<'a, I>(
    registry: &BoundsRegistry,
    points: I,
    target: Point2,
    radius: f64,
    scale: f64,
) -> Option<&'a PointShape>
where
    I: IntoIterator<Item = &'a PointShape>,
{
    points
        .into_iter()
        .find(|point| point_hit(registry, point, target, radius, scale))
}

/// Segment endpoints as raw coordinates, pre-multiplied by `scale` when
/// the owning shape carries the `SIZE` flag.
pub(crate) fn segment_endpoints(
    start: &PointShape,
    end: &PointShape,
    state: ShapeState,
    scale: f64,
) -> (Point2, Point2) {
    if state.contains(ShapeState::SIZE) && scale != 1.0 {
        (
            Point2::new(start.x * scale, start.y * scale),
            Point2::new(end.x * scale, end.y * scale),
        )
    } else {
        (start.position(), end.position())
    }
}

/// A box shape's hit rectangle, inflated about its center by `scale`
/// under the `SIZE` flag.
pub(crate) fn scaled_box(rect: Rect2, state: ShapeState, scale: f64) -> Rect2 {
    if state.contains(ShapeState::SIZE) && scale != 1.0 {
        rect.inflate(scale)
    } else {
        rect
    }
}
