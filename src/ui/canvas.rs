use web_sys::CanvasRenderingContext2d;

use crate::figure::{CANVAS_HEIGHT, CANVAS_WIDTH, Stroke, Surface};

const INK: &str = "#fff";

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self) {
        self.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
        self.set_stroke_style_str(INK);
        self.set_line_width(2.0);
    }

    fn stroke(&mut self, stroke: &Stroke) {
        self.begin_path();
        match *stroke {
            Stroke::Line { from, to } => {
                self.move_to(from.0, from.1);
                self.line_to(to.0, to.1);
            }
            Stroke::Circle { center, radius } => {
                self.arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU)
                    .ok();
            }
        }
        CanvasRenderingContext2d::stroke(self);
    }
}
