use crate::geometry::{Degrees, Region, TOLERANCE, polar};
use kurbo::{Arc, BezPath, Cap, Join, Point, Shape, Stroke, StrokeOpts, Vec2};

/// One angular sector of the pad.
///
/// Angles follow the clockwise-negative convention: `end_angle` sits below
/// `start_angle` and the arc runs from start to end with decreasing angle, which
/// is counter-clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start_angle: Degrees,
    pub end_angle: Degrees,
    pub padding: Degrees,
    pub outer_radius: f64,
    pub stroke_width: f64,
}

/// Paths of a wedge for one center.
#[derive(Debug, Clone, Default)]
pub struct WedgeRegions {
    /// Pie slice used while dragging the knob.
    pub drag: Region,
    /// The visible arc closed by its chord.
    pub arc: Region,
    /// The arc stroked with `stroke_width`.
    pub outline: Region,
}

impl WedgeRegions {
    /// A tap counts only on the ring itself, not anywhere inside the slice.
    pub fn touch_contains(&self, point: Point) -> bool {
        self.arc.contains(point) || self.outline.contains(point)
    }

    pub fn drag_contains(&self, point: Point) -> bool {
        self.drag.contains(point)
    }
}

impl Wedge {
    /// Builds `count` wedges around the circle, each one starting `padding`
    /// after the previous one ended.
    pub fn chain(
        count: usize,
        padding: Degrees,
        start_offset: Degrees,
        outer_radius: f64,
        stroke_width: f64,
    ) -> Vec<Self> {
        let step = Degrees::new(360.0 / count as f64);

        (0..count)
            .scan(start_offset, |prev_end, _| {
                let start = *prev_end + padding;
                let end = start + step - padding;
                *prev_end = end;
                Some(Self {
                    start_angle: -start,
                    end_angle: -end,
                    padding,
                    outer_radius,
                    stroke_width,
                })
            })
            .collect()
    }

    /// Angular width of the visible arc.
    pub fn sweep(&self) -> Degrees {
        self.end_angle - self.start_angle
    }

    fn arc(&self, center: Point, from: Degrees, to: Degrees) -> Arc {
        Arc {
            center,
            radii: Vec2::new(self.outer_radius, self.outer_radius),
            start_angle: from.to_radians(),
            sweep_angle: (to - from).to_radians(),
            x_rotation: 0.0,
        }
    }

    /// Slice from `start + padding` to `end - padding` at the outer radius,
    /// closed through the center.
    pub fn hit_region(&self, center: Point) -> Region {
        let mut path = self
            .arc(
                center,
                self.start_angle + self.padding,
                self.end_angle - self.padding,
            )
            .to_path(TOLERANCE);
        path.line_to(center);
        path.close_path();
        Region::new(path)
    }

    fn arc_path(&self, center: Point) -> BezPath {
        self.arc(center, self.start_angle, self.end_angle)
            .to_path(TOLERANCE)
    }

    /// The ring segment as drawn: the open arc stroked with butt caps.
    pub fn stroke_outline(&self, center: Point) -> Region {
        let style = Stroke::new(self.stroke_width)
            .with_caps(Cap::Butt)
            .with_join(Join::Round);
        Region::new(kurbo::stroke(
            self.arc_path(center),
            &style,
            &StrokeOpts::default(),
            TOLERANCE,
        ))
    }

    pub fn regions(&self, center: Point) -> WedgeRegions {
        let mut arc = self.arc_path(center);
        arc.close_path();

        WedgeRegions {
            drag: self.hit_region(center),
            arc: Region::new(arc),
            outline: self.stroke_outline(center),
        }
    }

    /// Whether `angle` falls in the unpadded span `(start + padding, end]`
    /// walking clockwise-negative. Adjacent wedges of one chain never share an
    /// angle.
    pub fn covers_angle(&self, angle: Degrees) -> bool {
        let from = self.start_angle + self.padding;
        let width = *(from - self.end_angle);
        let offset = *(from - angle).normalized();
        width >= 360.0 || offset < width
    }

    /// Where a direction glyph sits on the arc, and the angle to rotate it by.
    pub fn icon_anchor(&self, center: Point) -> (Point, Degrees) {
        let mid = Degrees::new(*(self.start_angle + self.end_angle + self.padding) / 2.0);
        (polar(center, self.outer_radius, mid), mid)
    }
}
