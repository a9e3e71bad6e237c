use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::point::{GridPoint, Point};
use crate::core::data::resolution::Resolution;
use crate::core::data::zoom_increment::ZoomIncrement;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    Region(ComplexRectError),
    ZoomFactor { zoom_factor: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid viewport region: {}", err),
            Self::ZoomFactor { zoom_factor } => {
                write!(f, "zoom factor {} is not a finite positive value", zoom_factor)
            }
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::ZoomFactor { .. } => None,
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

/// The window onto the complex plane plus the cumulative zoom since the
/// initial view.
///
/// All transforms return a new viewport and leave `self` untouched, so a
/// rejected transform never leaves a half-updated view behind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    zoom_factor: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(region: ComplexRect) -> Self {
        Self {
            region,
            zoom_factor: 1.0,
        }
    }

    pub fn from_bounds(x0: f64, x1: f64, y0: f64, y1: f64) -> Result<Self, ViewportError> {
        let region = ComplexRect::new(
            Complex { real: x0, imag: y0 },
            Complex { real: x1, imag: y1 },
        )?;

        Ok(Self::new(region))
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.region.top_left().real
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.region.bottom_right().real
    }

    #[must_use]
    pub fn y0(&self) -> f64 {
        self.region.top_left().imag
    }

    #[must_use]
    pub fn y1(&self) -> f64 {
        self.region.bottom_right().imag
    }

    /// Complex point at the given fraction of the region on each axis.
    #[must_use]
    pub fn point_at(&self, ratio_x: f64, ratio_y: f64) -> Complex {
        Complex {
            real: self.x0() + self.region.width() * ratio_x,
            imag: self.y0() + self.region.height() * ratio_y,
        }
    }

    #[must_use]
    pub fn screen_to_complex(&self, position: Point, screen: Resolution) -> Complex {
        let (ratio_x, ratio_y) = screen.ratio(position);
        self.point_at(ratio_x, ratio_y)
    }

    /// Inverse of [`Viewport::screen_to_complex`].
    #[must_use]
    pub fn complex_to_screen(&self, point: Complex, screen: Resolution) -> Point {
        Point {
            x: (point.real - self.x0()) / self.region.width() * f64::from(screen.width()),
            y: (point.imag - self.y0()) / self.region.height() * f64::from(screen.height()),
        }
    }

    /// Sample point for a grid cell: `x0 + (x1 - x0) * col / cols`.
    #[must_use]
    pub fn grid_to_complex(&self, point: GridPoint, grid: Resolution) -> Complex {
        self.point_at(
            f64::from(point.col) / f64::from(grid.width()),
            f64::from(point.row) / f64::from(grid.height()),
        )
    }

    /// Zooms by one increment, keeping the complex point under `cursor` at
    /// the same screen position.
    pub fn zoom_at(
        &self,
        zoom_in: bool,
        increment: ZoomIncrement,
        cursor: Point,
        screen: Resolution,
    ) -> Result<Self, ViewportError> {
        let scale = if zoom_in {
            increment.get()
        } else {
            1.0 / increment.get()
        };
        let zoom_factor = self.zoom_factor * scale;

        let (ratio_x, ratio_y) = screen.ratio(cursor);
        let dx = ratio_x * self.region.width();
        let dy = ratio_y * self.region.height();
        let anchor = Complex {
            real: self.x0() + dx,
            imag: self.y0() + dy,
        };

        let top_left = Complex {
            real: anchor.real - dx / scale,
            imag: anchor.imag - dy / scale,
        };
        let bottom_right = Complex {
            real: top_left.real + self.region.width() / scale,
            imag: top_left.imag + self.region.height() / scale,
        };

        Self::checked(ComplexRect::new(top_left, bottom_right)?, zoom_factor)
    }

    /// Translates every bound by `delta`. The zoom factor is unchanged.
    pub fn pan_by(&self, delta: Complex) -> Result<Self, ViewportError> {
        let region = ComplexRect::new(
            self.region.top_left() + delta,
            self.region.bottom_right() + delta,
        )?;

        Self::checked(region, self.zoom_factor)
    }

    /// Replaces the region with the rectangle spanned by two corners in any
    /// order. A selection without area is rejected.
    pub fn rectangle_zoom(&self, a: Complex, b: Complex) -> Result<Self, ViewportError> {
        let region = ComplexRect::from_corners(a, b)?;
        let zoom_factor = self.zoom_factor * self.region.width() / region.width();

        Self::checked(region, zoom_factor)
    }

    fn checked(region: ComplexRect, zoom_factor: f64) -> Result<Self, ViewportError> {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(ViewportError::ZoomFactor { zoom_factor });
        }

        Ok(Self {
            region,
            zoom_factor,
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ComplexRect::default())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: [{}, {}], y: [{}, {}]",
            self.x0(),
            self.x1(),
            self.y0(),
            self.y1()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn c(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < EPSILON && (a.imag - b.imag).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn screen() -> Resolution {
        Resolution::new(800, 800).unwrap()
    }

    #[test]
    fn test_complex_to_screen_inverts_screen_to_complex() {
        let viewport = Viewport::from_bounds(-1.5, 0.5, -0.25, 0.75).unwrap();
        let position = Point { x: 120.0, y: 640.0 };

        let back = viewport.complex_to_screen(viewport.screen_to_complex(position, screen()), screen());

        assert!((back.x - position.x).abs() < 1e-6);
        assert!((back.y - position.y).abs() < 1e-6);
    }

    #[test]
    fn test_default_viewport_bounds() {
        let viewport = Viewport::default();

        assert_eq!(
            (viewport.x0(), viewport.x1(), viewport.y0(), viewport.y1()),
            (-2.0, 2.0, -2.0, 2.0)
        );
        assert_eq!(viewport.zoom_factor(), 1.0);
    }

    #[test]
    fn test_grid_to_complex_maps_origin_and_centre() {
        let viewport = Viewport::default();
        let grid = Resolution::new(4, 4).unwrap();

        assert_eq!(
            viewport.grid_to_complex(GridPoint { col: 0, row: 0 }, grid),
            c(-2.0, -2.0)
        );
        assert_eq!(
            viewport.grid_to_complex(GridPoint { col: 2, row: 2 }, grid),
            c(0.0, 0.0)
        );
        assert_eq!(
            viewport.grid_to_complex(GridPoint { col: 3, row: 1 }, grid),
            c(1.0, -1.0)
        );
    }

    #[test]
    fn test_zoom_in_at_centre() {
        let viewport = Viewport::default();
        let increment = ZoomIncrement::new(2.0).unwrap();

        let zoomed = viewport
            .zoom_at(true, increment, screen().centre(), screen())
            .unwrap();

        assert_eq!(
            (zoomed.x0(), zoomed.x1(), zoomed.y0(), zoomed.y1()),
            (-1.0, 1.0, -1.0, 1.0)
        );
        assert_eq!(zoomed.zoom_factor(), 2.0);
    }

    #[test]
    fn test_zoom_out_at_top_left_corner_keeps_corner() {
        let viewport = Viewport::default();
        let increment = ZoomIncrement::new(2.0).unwrap();

        let zoomed = viewport
            .zoom_at(false, increment, Point { x: 0.0, y: 0.0 }, screen())
            .unwrap();

        assert_eq!(
            (zoomed.x0(), zoomed.x1(), zoomed.y0(), zoomed.y1()),
            (-2.0, 6.0, -2.0, 6.0)
        );
        assert_eq!(zoomed.zoom_factor(), 0.5);
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let viewport = Viewport::default();
        let cursor = Point { x: 600.0, y: 200.0 };
        let before = viewport.screen_to_complex(cursor, screen());

        let zoomed = viewport
            .zoom_at(true, ZoomIncrement::default(), cursor, screen())
            .unwrap();

        assert_close(zoomed.screen_to_complex(cursor, screen()), before);
    }

    #[test]
    fn test_pan_translates_bounds_and_keeps_zoom() {
        let viewport = Viewport::from_bounds(-2.0, 2.0, -1.0, 1.0).unwrap();

        let panned = viewport.pan_by(c(0.5, -0.25)).unwrap();

        assert_eq!(
            (panned.x0(), panned.x1(), panned.y0(), panned.y1()),
            (-1.5, 2.5, -1.25, 0.75)
        );
        assert_eq!(panned.zoom_factor(), viewport.zoom_factor());
    }

    #[test]
    fn test_pan_rejects_non_finite_delta() {
        let viewport = Viewport::default();

        assert!(viewport.pan_by(c(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_rectangle_zoom_is_order_independent() {
        let viewport = Viewport::default();

        let forward = viewport.rectangle_zoom(c(-1.0, -0.5), c(0.0, 0.5)).unwrap();
        let backward = viewport.rectangle_zoom(c(0.0, 0.5), c(-1.0, -0.5)).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(
            (forward.x0(), forward.x1(), forward.y0(), forward.y1()),
            (-1.0, 0.0, -0.5, 0.5)
        );
        assert_eq!(forward.zoom_factor(), 4.0);
    }

    #[test]
    fn test_rectangle_zoom_rejects_zero_area() {
        let viewport = Viewport::default();

        let result = viewport.rectangle_zoom(c(0.5, -1.0), c(0.5, 1.0));

        assert!(matches!(
            result,
            Err(ViewportError::Region(ComplexRectError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_collapsed_zoom_is_rejected() {
        let viewport = Viewport::from_bounds(0.0, 1e-300, 0.0, 1e-300).unwrap();
        let increment = ZoomIncrement::new(1e300).unwrap();

        let result = viewport.zoom_at(true, increment, Point { x: 0.0, y: 0.0 }, screen());

        assert!(result.is_err());
    }

    fn viewport_strategy() -> impl Strategy<Value = Viewport> {
        (-2.0f64..2.0, -2.0f64..2.0, -9.0f64..1.0, 0.5f64..2.0).prop_map(
            |(centre_real, centre_imag, width_exponent, aspect)| {
                let half_width = 10f64.powf(width_exponent) / 2.0;
                let half_height = half_width * aspect;
                Viewport::from_bounds(
                    centre_real - half_width,
                    centre_real + half_width,
                    centre_imag - half_height,
                    centre_imag + half_height,
                )
                .unwrap()
            },
        )
    }

    fn within_relative(actual: f64, expected: f64, scale: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(scale)
    }

    proptest! {
        #[test]
        fn zoom_round_trip_restores_any_view(
            viewport in viewport_strategy(),
            x in 0.0f64..800.0,
            y in 0.0f64..800.0,
            increment in 1.01f64..4.0,
        ) {
            let increment = ZoomIncrement::new(increment).unwrap();
            let cursor = Point { x, y };

            let restored = viewport
                .zoom_at(true, increment, cursor, screen())
                .and_then(|v| v.zoom_at(false, increment, cursor, screen()))
                .unwrap();

            let width = viewport.region().width();
            let height = viewport.region().height();
            prop_assert!(within_relative(restored.x0(), viewport.x0(), width));
            prop_assert!(within_relative(restored.x1(), viewport.x1(), width));
            prop_assert!(within_relative(restored.y0(), viewport.y0(), height));
            prop_assert!(within_relative(restored.y1(), viewport.y1(), height));
            prop_assert!(within_relative(restored.zoom_factor(), viewport.zoom_factor(), 0.0));
        }

        #[test]
        fn zoom_in_then_out_restores_bounds(
            x in 0.0f64..800.0,
            y in 0.0f64..800.0,
            increment in 1.01f64..4.0,
        ) {
            let viewport = Viewport::default();
            let increment = ZoomIncrement::new(increment).unwrap();
            let cursor = Point { x, y };

            let restored = viewport
                .zoom_at(true, increment, cursor, screen())
                .and_then(|v| v.zoom_at(false, increment, cursor, screen()))
                .unwrap();

            prop_assert!((restored.x0() - viewport.x0()).abs() < EPSILON);
            prop_assert!((restored.x1() - viewport.x1()).abs() < EPSILON);
            prop_assert!((restored.y0() - viewport.y0()).abs() < EPSILON);
            prop_assert!((restored.y1() - viewport.y1()).abs() < EPSILON);
            prop_assert!((restored.zoom_factor() - 1.0).abs() < EPSILON);
        }

        #[test]
        fn zoom_preserves_anchor(
            x in 0.0f64..800.0,
            y in 0.0f64..800.0,
            zoom_in in any::<bool>(),
        ) {
            let viewport = Viewport::from_bounds(-1.5, 0.5, -1.0, 1.0).unwrap();
            let cursor = Point { x, y };
            let before = viewport.screen_to_complex(cursor, screen());

            let after = viewport
                .zoom_at(zoom_in, ZoomIncrement::default(), cursor, screen())
                .unwrap()
                .screen_to_complex(cursor, screen());

            prop_assert!((after.real - before.real).abs() < EPSILON);
            prop_assert!((after.imag - before.imag).abs() < EPSILON);
        }
    }
}
