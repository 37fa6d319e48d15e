use crate::gui::theme::ThemeColors;
use cairo::{Context, LineCap};
use dpad::{Degrees, Direction, DirectionalPad, Point, Wedge};
use palette::Srgba;
use std::f64::consts::PI;

pub const GLYPH_LENGTH: f64 = 25.0;
pub const GLYPH_WIDTH: f64 = 15.0;

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct WedgeRenderer<'a> {
    wedge: &'a Wedge,
    center: Point,
    selected: bool,
}

impl<'a> WedgeRenderer<'a> {
    fn new(wedge: &'a Wedge, center: Point, selected: bool) -> Self {
        Self {
            wedge,
            center,
            selected,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (ring, glyph) = colors.wedge_colors(self.selected);
        self.draw_ring(cr, ring)?;
        self.draw_glyph(cr, glyph)
    }

    fn draw_ring(&self, cr: &Context, color: Srgba<f64>) -> Result<(), cairo::Error> {
        set_source(cr, color);
        cr.set_line_width(self.wedge.stroke_width);
        cr.set_line_cap(LineCap::Butt);
        cr.new_path();
        cr.arc_negative(
            self.center.x,
            self.center.y,
            self.wedge.outer_radius,
            self.wedge.start_angle.to_radians(),
            self.wedge.end_angle.to_radians(),
        );
        cr.stroke()
    }

    /// An arrowhead on the ring, pointing away from the center.
    fn draw_glyph(&self, cr: &Context, color: Srgba<f64>) -> Result<(), cairo::Error> {
        let (anchor, angle): (Point, Degrees) = self.wedge.icon_anchor(self.center);

        cr.save()?;
        cr.translate(anchor.x, anchor.y);
        cr.rotate(angle.to_radians());
        set_source(cr, color);
        cr.new_path();
        cr.move_to(GLYPH_WIDTH / 2.0, 0.0);
        cr.line_to(-GLYPH_WIDTH / 2.0, -GLYPH_LENGTH / 2.0);
        cr.line_to(-GLYPH_WIDTH / 2.0, GLYPH_LENGTH / 2.0);
        cr.close_path();
        cr.fill()?;
        cr.restore()
    }
}

pub fn draw(cr: &Context, pad: &DirectionalPad, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.background);
    cr.paint()?;

    let state = pad.state();
    for (i, wedge) in pad.wedges().iter().enumerate() {
        let selected = state.active_direction == Direction::Wedge(i);
        WedgeRenderer::new(wedge, state.center, selected).draw(cr, colors)?;
    }

    draw_knob(cr, pad, colors)
}

fn draw_knob(cr: &Context, pad: &DirectionalPad, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let state = pad.state();
    set_source(cr, colors.knob_color(state.drag_in_progress()));
    cr.new_path();
    cr.arc(
        state.knob_position.x,
        state.knob_position.y,
        state.knob_radius,
        0.0,
        2.0 * PI,
    );
    cr.fill()
}
