// Scroll-linked motion. Pages declare bindings; `/static/motion.js` reads the
// `data-motion` attribute and applies the interpolated values while scrolling, using
// the same formulas as `interpolate`, `scroll_progress` and `exit_progress` below.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionProperty {
    Opacity,
    /// Vertical offset in pixels.
    TranslateY,
    Scale,
}

impl MotionProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionProperty::Opacity => "opacity",
            MotionProperty::TranslateY => "y",
            MotionProperty::Scale => "scale",
        }
    }
}

impl fmt::Display for MotionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linear map of `progress` from `input` onto `output`, clamped to the output range.
/// A degenerate input range yields `output[0]`.
pub fn interpolate(progress: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [in0, in1] = input;
    let [out0, out1] = output;

    let span = in1 - in0;
    if span == 0.0 || !span.is_finite() {
        return out0;
    }

    let t = (progress - in0) / span;
    if t.is_nan() {
        return out0;
    }

    out0 + t.clamp(0.0, 1.0) * (out1 - out0)
}

/// 0 when the element's top edge enters at the bottom of the viewport, 1 once its bottom
/// edge has left through the top. `element_top` is relative to the viewport top.
pub fn scroll_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + element_height.max(0.0);
    if travel <= 0.0 {
        return 0.0;
    }

    let progress = (viewport_height - element_top) / travel;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// 0 while the element's top edge is at or below the viewport top, 1 once its bottom
/// edge has scrolled past it. Used for elements that start the page in view.
pub fn exit_progress(element_top: f64, element_height: f64) -> f64 {
    if element_height <= 0.0 || element_height.is_nan() {
        return if element_top < 0.0 { 1.0 } else { 0.0 };
    }

    let progress = -element_top / element_height;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Which stretch of scrolling drives a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollRange {
    /// From entering at the bottom to leaving at the top, see `scroll_progress`.
    #[default]
    Through,
    /// From resting at the top to scrolled away, see `exit_progress`.
    Exit,
}

impl ScrollRange {
    pub fn progress(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        match self {
            ScrollRange::Through => scroll_progress(element_top, element_height, viewport_height),
            ScrollRange::Exit => exit_progress(element_top, element_height),
        }
    }

    /// Progress at which the element has finished its entrance.
    fn settled_progress(&self) -> f64 {
        match self {
            ScrollRange::Through => 1.0,
            ScrollRange::Exit => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBinding {
    pub property: MotionProperty,
    pub input: [f64; 2],
    pub output: [f64; 2],
    pub range: ScrollRange,
}

impl ScrollBinding {
    pub const fn new(property: MotionProperty, input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            property,
            input,
            output,
            range: ScrollRange::Through,
        }
    }

    pub const fn over(self, range: ScrollRange) -> Self {
        Self {
            property: self.property,
            input: self.input,
            output: self.output,
            range,
        }
    }

    /// Hero fade: fully visible at rest, gone once half of it has scrolled away.
    pub const fn fade_out() -> Self {
        Self::new(MotionProperty::Opacity, [0.0, 0.5], [1.0, 0.0]).over(ScrollRange::Exit)
    }

    pub const fn fade_in() -> Self {
        Self::new(MotionProperty::Opacity, [0.0, 0.3], [0.0, 1.0])
    }

    pub const fn rise(distance: f64) -> Self {
        Self::new(MotionProperty::TranslateY, [0.0, 1.0], [distance, 0.0])
    }

    /// Hero zoom-out as it scrolls away.
    pub const fn shrink(to: f64) -> Self {
        Self::new(MotionProperty::Scale, [0.0, 1.0], [1.0, to]).over(ScrollRange::Exit)
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        interpolate(progress, self.input, self.output)
    }

    pub fn settled_value(&self) -> f64 {
        self.value_at(self.range.settled_progress())
    }

    fn encode(&self) -> String {
        let encoded = format!(
            "{}:{},{}:{},{}",
            self.property, self.input[0], self.input[1], self.output[0], self.output[1]
        );

        match self.range {
            ScrollRange::Through => encoded,
            ScrollRange::Exit => format!("{encoded}:exit"),
        }
    }
}

/// Value for the `data-motion` attribute, e.g. `opacity:0,0.5:1,0:exit;y:0,1:40,0`.
/// The range suffix is omitted for `Through`.
pub fn motion_attr(bindings: &[ScrollBinding]) -> String {
    bindings
        .iter()
        .map(ScrollBinding::encode)
        .collect::<Vec<_>>()
        .join(";")
}

/// Inline CSS for the settled state, so pages read correctly before the script runs
/// or without it. The script overwrites these on its first frame.
pub fn motion_style(bindings: &[ScrollBinding]) -> String {
    let mut opacity = None;
    let mut translate_y = 0.0;
    let mut scale = 1.0;
    let mut transformed = false;

    for binding in bindings {
        let value = binding.settled_value();
        match binding.property {
            MotionProperty::Opacity => opacity = Some(value),
            MotionProperty::TranslateY => {
                translate_y = value;
                transformed = true;
            }
            MotionProperty::Scale => {
                scale = value;
                transformed = true;
            }
        }
    }

    let mut declarations = Vec::new();
    if let Some(opacity) = opacity {
        declarations.push(format!("opacity:{opacity}"));
    }
    if transformed {
        declarations.push(format!("transform:translateY({translate_y}px) scale({scale})"));
    }
    declarations.join(";")
}
