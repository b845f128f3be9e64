// MIT/Apache2 License

use super::{ArcData, PathSegment};
use crate::geometry::{rotate_point_absolute_angle, vector, Matrix2d, Point, Vector};
use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt,
    iter::FusedIterator,
    ops::Range,
};
use tinyvec::ArrayVec;

/// The largest angle, in radians, a single cubic bezier is allowed to approximate.
pub const MAX_ARC_SWEEP: f64 = FRAC_PI_2;

const FULL_TURN: f64 = 2.0 * PI;

/// Convert a circular arc into the path segments that approximate it.
///
/// The returned iterator yields, in order:
///
/// * a `ChangeOrigin` and a `ChangeMatrix` segment echoing `origin` and `matrix`,
/// * a `MoveTo` to the start of the arc if there is no `current` point, or a `LineTo` to the start of the arc
///   if `current` is somewhere else,
/// * one `CurveTo` per sub-sweep of at most [`MAX_ARC_SWEEP`] radians.
///
/// Every point is in the same, untransformed space as `arc`. Arcs with a zero radius or a zero sweep produce no
/// curves, only the connection to their start point.
#[inline]
pub fn arc_as_beziers(
    arc: &ArcData,
    negative: bool,
    current: Option<Point>,
    origin: Point,
    matrix: &Matrix2d,
) -> ArcBeziers {
    let ArcData {
        center,
        radius,
        angle1,
        angle2,
    } = *arc;
    let sweep = normalized_sweep(angle1, angle2, negative);

    let mut prelude: ArrayVec<[PathSegment; 4]> = ArrayVec::new();
    prelude.push(PathSegment::ChangeOrigin(origin));
    prelude.push(PathSegment::ChangeMatrix(*matrix));

    let start = rotate_point_absolute_angle(center, radius, angle1);
    match current {
        None => prelude.push(PathSegment::MoveTo(start)),
        Some(current) if !same_point(current, start) => prelude.push(PathSegment::LineTo(start)),
        Some(_) => {}
    }

    let count = if radius == 0.0 || sweep == 0.0 || !sweep.is_finite() {
        0
    } else {
        ((sweep.abs() / MAX_ARC_SWEEP).ceil() as usize).max(1)
    };
    let step = if count == 0 { 0.0 } else { sweep / count as f64 };

    ArcBeziers {
        prelude,
        emitted: 0,
        center,
        radius,
        start_angle: angle1,
        end_angle: angle1 + sweep,
        step,
        tangent_scale: (4.0 / 3.0) * (step / 4.0).tan(),
        curves: 0..count,
    }
}

/// The signed sweep from `angle1` to `angle2`, after moving `angle2` by whole turns so that it lies in the
/// direction of travel. Sweeps of more than one turn are reduced to at most a single full turn plus the
/// remainder, since retracing the circle draws nothing new.
#[inline]
fn normalized_sweep(angle1: f64, angle2: f64, negative: bool) -> f64 {
    let sweep = angle2 - angle1;
    let sweep = if sweep.abs() > FULL_TURN {
        sweep % FULL_TURN + FULL_TURN.copysign(sweep)
    } else {
        sweep
    };

    if negative {
        if sweep > 0.0 {
            let sweep = sweep - FULL_TURN * (sweep / FULL_TURN).ceil();
            sweep.min(0.0)
        } else {
            sweep
        }
    } else if sweep < 0.0 {
        let sweep = sweep + FULL_TURN * (-sweep / FULL_TURN).ceil();
        sweep.max(0.0)
    } else {
        sweep
    }
}

#[inline]
fn same_point(a: Point, b: Point) -> bool {
    approx::ulps_eq!(a.x, b.x) && approx::ulps_eq!(a.y, b.y)
}

/// Iterator over the segments approximating an arc. Created by [`arc_as_beziers`].
#[derive(Clone)]
pub struct ArcBeziers {
    prelude: ArrayVec<[PathSegment; 4]>,
    // how much of the prelude has been yielded
    emitted: usize,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    step: f64,
    tangent_scale: f64,
    curves: Range<usize>,
}

impl ArcBeziers {
    #[inline]
    fn point_at(&self, angle: f64) -> Point {
        rotate_point_absolute_angle(self.center, self.radius, angle)
    }

    /// Derivative of `point_at`, scaled by the radius.
    #[inline]
    fn tangent_at(&self, angle: f64) -> Vector {
        let (sin, cos) = angle.sin_cos();
        vector(-sin, cos) * self.radius
    }

    #[inline]
    fn curve(&self, i: usize) -> PathSegment {
        let a = self.start_angle + self.step * i as f64;
        let b = if i + 1 == self.curves.end {
            self.end_angle
        } else {
            self.start_angle + self.step * (i + 1) as f64
        };

        PathSegment::CurveTo {
            control1: self.point_at(a) + self.tangent_at(a) * self.tangent_scale,
            control2: self.point_at(b) - self.tangent_at(b) * self.tangent_scale,
            end: self.point_at(b),
        }
    }
}

impl Iterator for ArcBeziers {
    type Item = PathSegment;

    #[inline]
    fn next(&mut self) -> Option<PathSegment> {
        if let Some(seg) = self.prelude.get(self.emitted) {
            self.emitted += 1;
            return Some(*seg);
        }

        let i = self.curves.next()?;
        Some(self.curve(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.prelude.len() - self.emitted + self.curves.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for ArcBeziers {}
impl FusedIterator for ArcBeziers {}

impl fmt::Debug for ArcBeziers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcBeziers")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .field("remaining", &self.size_hint().0)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;
    use approx::assert_abs_diff_eq;
    use lyon_geom::CubicBezierSegment;

    fn arc(radius: f64, angle1: f64, angle2: f64) -> ArcData {
        ArcData {
            center: point(0.0, 0.0),
            radius,
            angle1,
            angle2,
        }
    }

    fn curves(segments: &[PathSegment]) -> Vec<(Point, Point, Point)> {
        segments
            .iter()
            .filter_map(|seg| match *seg {
                PathSegment::CurveTo {
                    control1,
                    control2,
                    end,
                } => Some((control1, control2, end)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn full_circle_stays_on_the_circle() {
        let r = 50.0;
        let segments: Vec<_> =
            arc_as_beziers(&arc(r, 0.0, 2.0 * PI), false, None, point(0.0, 0.0), &Matrix2d::identity())
                .collect();

        assert_eq!(segments[2], PathSegment::MoveTo(point(r, 0.0)));
        let curves = curves(&segments);
        assert_eq!(curves.len(), 4);

        let mut from = point(r, 0.0);
        for &(ctrl1, ctrl2, to) in &curves {
            let bezier = CubicBezierSegment {
                from,
                ctrl1,
                ctrl2,
                to,
            };
            for &t in &[0.0, 0.25, 0.5, 0.75, 1.0] {
                let p = bezier.sample(t);
                assert_abs_diff_eq!(p.to_vector().length(), r, epsilon = 1e-3 * r);
            }
            from = to;
        }

        // closed loop
        assert_abs_diff_eq!(from.x, r, epsilon = 1e-9);
        assert_abs_diff_eq!(from.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn echoes_origin_and_matrix_first() {
        let m = Matrix2d::scale(2.0, 3.0);
        let mut iter = arc_as_beziers(&arc(1.0, 0.0, 1.0), false, None, point(4.0, 5.0), &m);
        assert_eq!(iter.next(), Some(PathSegment::ChangeOrigin(point(4.0, 5.0))));
        assert_eq!(iter.next(), Some(PathSegment::ChangeMatrix(m)));
    }

    #[test]
    fn bridges_from_current_point() {
        let data = arc(1.0, 0.0, FRAC_PI_2);
        let m = Matrix2d::identity();
        let o = point(0.0, 0.0);

        let elsewhere: Vec<_> = arc_as_beziers(&data, false, Some(point(-3.0, 0.0)), o, &m).collect();
        assert_eq!(elsewhere[2], PathSegment::LineTo(point(1.0, 0.0)));

        let at_start: Vec<_> = arc_as_beziers(&data, false, Some(point(1.0, 0.0)), o, &m).collect();
        assert_eq!(at_start.len(), 3);
        assert!(matches!(at_start[2], PathSegment::CurveTo { .. }));
    }

    #[test]
    fn positive_arc_wraps_end_angle_forward() {
        // 0 -> -pi/2 increasing is three quarters of a turn
        let segments: Vec<_> = arc_as_beziers(
            &arc(1.0, 0.0, -FRAC_PI_2),
            false,
            None,
            point(0.0, 0.0),
            &Matrix2d::identity(),
        )
        .collect();
        let curves = curves(&segments);
        assert_eq!(curves.len(), 3);

        // first quarter goes through +y, matching the engine's native arc
        assert_abs_diff_eq!(curves[0].2.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curves[0].2.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_arc_sweeps_backwards() {
        let segments: Vec<_> = arc_as_beziers(
            &arc(1.0, 0.0, FRAC_PI_2),
            true,
            None,
            point(0.0, 0.0),
            &Matrix2d::identity(),
        )
        .collect();
        let curves = curves(&segments);
        assert_eq!(curves.len(), 3);
        assert_abs_diff_eq!(curves[0].2.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curves[0].2.y, -1.0, epsilon = 1e-12);

        let last = curves[2].2;
        assert_abs_diff_eq!(last.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(last.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_arcs_only_move() {
        let m = Matrix2d::identity();
        let o = point(0.0, 0.0);

        let zero_radius: Vec<_> = arc_as_beziers(&arc(0.0, 0.0, PI), false, None, o, &m).collect();
        assert_eq!(zero_radius.len(), 3);
        assert_eq!(zero_radius[2], PathSegment::MoveTo(point(0.0, 0.0)));

        let zero_sweep: Vec<_> =
            arc_as_beziers(&arc(2.0, 1.0, 1.0), false, Some(point(9.0, 9.0)), o, &m).collect();
        assert_eq!(zero_sweep.len(), 3);
        assert!(matches!(zero_sweep[2], PathSegment::LineTo(_)));
    }

    #[test]
    fn huge_sweeps_are_reduced_to_one_turn() {
        let iter = arc_as_beziers(
            &arc(1.0, 0.0, 1e12),
            false,
            Some(point(1.0, 0.0)),
            point(0.0, 0.0),
            &Matrix2d::identity(),
        );
        // one full turn plus at most one more
        assert!(iter.len() <= 2 + 8);

        let segments: Vec<_> = iter.collect();
        let end = curves(&segments).last().unwrap().2;
        let expected = rotate_point_absolute_angle(point(0.0, 0.0), 1.0, 1e12);
        assert_abs_diff_eq!(end.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(end.y, expected.y, epsilon = 1e-3);

        let backwards = arc_as_beziers(
            &arc(1.0, 0.0, -1e9),
            true,
            Some(point(1.0, 0.0)),
            point(0.0, 0.0),
            &Matrix2d::identity(),
        );
        assert!(backwards.len() <= 2 + 8);
    }

    #[test]
    fn non_finite_angles_produce_no_curves() {
        let iter = arc_as_beziers(
            &arc(1.0, 0.0, f64::INFINITY),
            false,
            None,
            point(0.0, 0.0),
            &Matrix2d::identity(),
        );
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.count(), 3);
    }

    #[test]
    fn small_sweeps_use_one_curve() {
        let iter = arc_as_beziers(
            &arc(1.0, 0.0, 0.1),
            false,
            Some(point(1.0, 0.0)),
            point(0.0, 0.0),
            &Matrix2d::identity(),
        );
        assert_eq!(iter.len(), 3);
    }
}
