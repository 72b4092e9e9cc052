//! Paint styles for filling shapes.
//!
//! This module provides paint types for defining how shapes are rendered.

use crate::types::{Color, Point};

/// A paint style for filling shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
    /// Radial gradient fill.
    RadialGradient(RadialGradient),
}

impl Paint {
    /// Create a solid color paint.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a radial gradient paint.
    #[inline]
    pub fn radial_gradient(center: Point, radius: f32, stops: Vec<GradientStop>) -> Self {
        Self::RadialGradient(RadialGradient {
            center,
            radius,
            stops,
        })
    }

    /// Check if this is a solid color paint.
    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// Get the solid color, if this is a solid paint.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the radial gradient, if this is a radial gradient paint.
    #[inline]
    pub fn as_radial(&self) -> Option<&RadialGradient> {
        match self {
            Self::RadialGradient(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

/// A radial gradient definition.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Center point of the gradient.
    pub center: Point,
    /// Radius of the gradient.
    pub radius: f32,
    /// Color stops.
    pub stops: Vec<GradientStop>,
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0).
    pub offset: f32,
    /// Color at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_paint() {
        let p = Paint::solid(Color::RED);
        assert!(p.is_solid());
        assert_eq!(p.as_solid(), Some(Color::RED));
        assert!(p.as_radial().is_none());
    }

    #[test]
    fn test_radial_gradient_paint() {
        let stops = vec![
            GradientStop::new(0.0, Color::WHITE),
            GradientStop::new(1.0, Color::TRANSPARENT),
        ];
        let p = Paint::radial_gradient(Point::new(10.0, 20.0), 90.0, stops);

        assert!(!p.is_solid());
        let gradient = p.as_radial().unwrap();
        assert_eq!(gradient.center, Point::new(10.0, 20.0));
        assert_eq!(gradient.radius, 90.0);
        assert_eq!(gradient.stops.len(), 2);
    }

    #[test]
    fn test_paint_from_color() {
        let p: Paint = Color::BLUE.into();
        assert_eq!(p.as_solid(), Some(Color::BLUE));
    }
}
