//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in play-field coordinates (pixels, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Point containment, edges inclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Spatial shape shared by every simulated object: a center point and a
/// bounding box derived from the base size and the current visual scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub center: Vec2,
    base_size: Vec2,
    scale: f32,
    size: Vec2,
}

impl Body {
    pub fn new(center: Vec2, base_size: Vec2) -> Self {
        Self {
            center,
            base_size,
            scale: 1.0,
            size: base_size,
        }
    }

    /// Change the visual scale; the bounding box follows.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.size = self.base_size * scale;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.size)
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.rect().overlaps(&other.rect())
    }

    /// Center-to-point distance.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.center.distance(point)
    }

    /// Whether this body's center lies within `radius` of `point` (boundary included).
    pub fn within_radius(&self, point: Vec2, radius: f32) -> bool {
        self.center.distance_squared(point) <= radius * radius
    }
}

/// Hit points. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`, clamping at zero. Returns the health left.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.current = (self.current - amount.max(0)).max(0);
        self.current
    }

    /// Raise both max and current health.
    pub fn raise_max(&mut self, amount: i32) {
        self.max += amount;
        self.current += amount;
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames actually simulated (paused and finished frames excluded).
    pub tick: u64,
    /// Simulated seconds (paused frames excluded).
    pub elapsed_secs: f64,
    /// Wall-clock seconds handed to `update`, paused frames included.
    pub real_secs: f64,
}

impl SimTime {
    /// Advance by one simulated frame.
    pub fn advance(&mut self, delta: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(delta);
    }
}

/// Counts a timer down by `delta`, stopping at zero.
pub fn count_down(timer: &mut f32, delta: f32) {
    *timer = (*timer - delta).max(0.0);
}
