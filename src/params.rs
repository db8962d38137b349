use std::ops::RangeInclusive;

/// Live-tunable values driving the visualization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Number of polygons in the ring
    pub count: u32,
    /// Total spread of the ring in degrees
    pub angle: f32,
}

/// A single control-panel edit, emitted only when a value actually changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    Count(u32),
    Angle(f32),
}

impl Parameters {
    pub const COUNT_RANGE: RangeInclusive<u32> = 3..=10;
    pub const ANGLE_RANGE: RangeInclusive<f32> = 0.0..=180.0;
    pub const DEFAULT_COUNT: u32 = 6;
    pub const DEFAULT_ANGLE: f32 = 100.0;

    /// Create a parameter set, clamping both values into their ranges
    pub fn new(count: u32, angle: f32) -> Self {
        Self {
            count: Self::clamp_count(count),
            angle: Self::clamp_angle(angle),
        }
    }

    pub fn clamp_count(count: u32) -> u32 {
        count.clamp(*Self::COUNT_RANGE.start(), *Self::COUNT_RANGE.end())
    }

    pub fn clamp_angle(angle: f32) -> f32 {
        if angle.is_nan() {
            return *Self::ANGLE_RANGE.start();
        }
        angle.clamp(*Self::ANGLE_RANGE.start(), *Self::ANGLE_RANGE.end())
    }

    /// Set the count; returns the notification if the value changed
    pub fn set_count(&mut self, count: u32) -> Option<ParameterChange> {
        let count = Self::clamp_count(count);
        if count == self.count {
            return None;
        }
        self.count = count;
        Some(ParameterChange::Count(count))
    }

    /// Set the angle; returns the notification if the value changed
    pub fn set_angle(&mut self, angle: f32) -> Option<ParameterChange> {
        let angle = Self::clamp_angle(angle);
        if angle == self.angle {
            return None;
        }
        self.angle = angle;
        Some(ParameterChange::Angle(angle))
    }

    /// Angular step between neighbouring elements, in degrees
    pub fn step_degrees(&self) -> f32 {
        self.angle / self.count as f32
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            angle: Self::DEFAULT_ANGLE,
        }
    }
}
