// MIT/Apache2 License

use lyon_geom::{LineSegment, Point};
use lyon_path::{iterator::PathIterator, PathEvent};

/// Flatten a path into line segments. Sub-paths that were left open are closed as well if `close_open` is set,
/// which is how filling treats them.
#[inline]
pub(crate) fn path_to_lines<I: IntoIterator<Item = PathEvent>>(
    iter: I,
    tolerance: f32,
    close_open: bool,
) -> impl Iterator<Item = LineSegment<f32>> {
    iter.into_iter()
        .flattened(tolerance)
        .filter_map(move |event| match event {
            PathEvent::Line { from, to } => Some(LineSegment { from, to }),
            PathEvent::End { last, first, close } if close || close_open => Some(LineSegment {
                from: last,
                to: first,
            }),
            _ => None,
        })
}

/// Every point a flattened path passes through.
#[inline]
pub(crate) fn path_to_points<I: IntoIterator<Item = PathEvent>>(
    iter: I,
    tolerance: f32,
) -> impl Iterator<Item = Point<f32>> {
    iter.into_iter()
        .flattened(tolerance)
        .filter_map(|event| match event {
            PathEvent::Begin { at } => Some(at),
            PathEvent::Line { to, .. } => Some(to),
            _ => None,
        })
}

/// The winding number of `lines` around `(x, y)`.
#[inline]
pub(crate) fn winding_number<I: IntoIterator<Item = LineSegment<f32>>>(lines: I, x: f64, y: f64) -> i32 {
    lines.into_iter().fold(0, |winding, line| {
        let (ax, ay) = (f64::from(line.from.x), f64::from(line.from.y));
        let (bx, by) = (f64::from(line.to.x), f64::from(line.to.y));
        let side = (bx - ax) * (y - ay) - (x - ax) * (by - ay);

        if ay <= y {
            if by > y && side > 0.0 {
                return winding + 1;
            }
        } else if by <= y && side < 0.0 {
            return winding - 1;
        }

        winding
    })
}

/// The distance between `(x, y)` and the closest point on `line`.
#[inline]
pub(crate) fn distance_to_line(line: &LineSegment<f32>, x: f64, y: f64) -> f64 {
    let (ax, ay) = (f64::from(line.from.x), f64::from(line.from.y));
    let (dx, dy) = (f64::from(line.to.x) - ax, f64::from(line.to.y) - ay);
    let len2 = dx * dx + dy * dy;

    let t = if len2 == 0.0 {
        0.0
    } else {
        (((x - ax) * dx + (y - ay) * dy) / len2).max(0.0).min(1.0)
    };

    let (cx, cy) = (ax + dx * t, ay + dy * t);
    ((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lyon_path::{builder::PathBuilder, path::Builder};

    fn triangle(close: bool) -> lyon_path::Path {
        let mut builder = Builder::new();
        builder.begin(lyon_geom::point(0.0, 0.0));
        builder.line_to(lyon_geom::point(10.0, 0.0));
        builder.line_to(lyon_geom::point(0.0, 10.0));
        builder.end(close);
        builder.build()
    }

    #[test]
    fn open_paths_close_only_when_asked() {
        assert_eq!(path_to_lines(triangle(false).iter(), 0.1, false).count(), 2);
        assert_eq!(path_to_lines(triangle(false).iter(), 0.1, true).count(), 3);
        assert_eq!(path_to_lines(triangle(true).iter(), 0.1, false).count(), 3);
    }

    #[test]
    fn winding_inside_and_out() {
        let path = triangle(true);
        assert_ne!(winding_number(path_to_lines(path.iter(), 0.1, true), 2.0, 2.0), 0);
        assert_eq!(winding_number(path_to_lines(path.iter(), 0.1, true), 9.0, 9.0), 0);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let line = LineSegment {
            from: lyon_geom::point(0.0, 0.0),
            to: lyon_geom::point(10.0, 0.0),
        };
        assert_abs_diff_eq!(distance_to_line(&line, 5.0, 3.0), 3.0);
        assert_abs_diff_eq!(distance_to_line(&line, 13.0, 4.0), 5.0);
    }
}
