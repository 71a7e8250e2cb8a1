//! Gallows figure geometry and progressive drawing.
//!
//! Everything here is a pure function of the number of wrong guesses. Drawing
//! goes through the [`Surface`] seam so the same code paints the browser canvas
//! and the recording surface used by tests.

/// A single pen stroke in canvas pixel coordinates (200 x 250 canvas).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Line { from: (f64, f64), to: (f64, f64) },
    Circle { center: (f64, f64), radius: f64 },
}

pub const CANVAS_WIDTH: u32 = 200;
pub const CANVAS_HEIGHT: u32 = 250;

const fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Stroke {
    Stroke::Line {
        from: (x1, y1),
        to: (x2, y2),
    }
}

/// Backdrop drawn at every round start: base, pole, beam, rope.
pub const GALLOWS: [Stroke; 4] = [
    line(10.0, 240.0, 190.0, 240.0),
    line(50.0, 240.0, 50.0, 20.0),
    line(50.0, 20.0, 150.0, 20.0),
    line(150.0, 20.0, 150.0, 50.0),
];

/// Body parts in the order wrong guesses reveal them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

pub const SEGMENT_COUNT: usize = Segment::ALL.len();

impl Segment {
    pub const ALL: [Segment; 6] = [
        Segment::Head,
        Segment::Torso,
        Segment::LeftArm,
        Segment::RightArm,
        Segment::LeftLeg,
        Segment::RightLeg,
    ];

    pub fn stroke(self) -> Stroke {
        match self {
            Segment::Head => Stroke::Circle {
                center: (150.0, 70.0),
                radius: 20.0,
            },
            Segment::Torso => line(150.0, 90.0, 150.0, 150.0),
            Segment::LeftArm => line(150.0, 100.0, 120.0, 130.0),
            Segment::RightArm => line(150.0, 100.0, 180.0, 130.0),
            Segment::LeftLeg => line(150.0, 150.0, 120.0, 190.0),
            Segment::RightLeg => line(150.0, 150.0, 180.0, 190.0),
        }
    }
}

/// Segment revealed by the `n`th wrong guess (1-based). Zero wrong guesses
/// reveal nothing.
pub fn segment_for_guess(n: usize) -> Option<Segment> {
    n.checked_sub(1).and_then(|idx| Segment::ALL.get(idx).copied())
}

/// Segments present after `wrong_count` wrong guesses.
pub fn visible_segments(wrong_count: usize) -> &'static [Segment] {
    &Segment::ALL[..wrong_count.min(SEGMENT_COUNT)]
}

/// Anything the figure can be drawn onto.
pub trait Surface {
    fn clear(&mut self);
    fn stroke(&mut self, stroke: &Stroke);
}

/// Full redraw: backdrop plus segments `1..=wrong_count`.
pub fn render_figure<S: Surface + ?Sized>(surface: &mut S, wrong_count: usize) {
    surface.clear();
    for stroke in &GALLOWS {
        surface.stroke(stroke);
    }
    for segment in visible_segments(wrong_count) {
        surface.stroke(&segment.stroke());
    }
}

/// Incremental draw: adds only the segment for the latest wrong guess and
/// leaves what is already on the surface alone.
pub fn draw_newest<S: Surface + ?Sized>(surface: &mut S, wrong_count: usize) {
    if let Some(segment) = segment_for_guess(wrong_count) {
        surface.stroke(&segment.stroke());
    }
}
