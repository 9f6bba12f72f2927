#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Axis aligned rectangle in window pixels, origin at the top-left corner.
///
/// Sizes are signed so that geometry larger than the viewport can still be
/// expressed after clamping (see [`Rect::clamp_to`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn at_origin(size: Size) -> Self {
        Self::new(0, 0, size.w, size.h)
    }

    #[inline(always)]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline(always)]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Pulls the rectangle back inside `bounds`, one axis at a time.
    ///
    /// The right (bottom) edge is checked first and the left (top) edge only
    /// when the first check did not fire, so a rectangle wider than the
    /// bounds ends up at `bounds.w - w`, which is negative.
    pub fn clamp_to(&mut self, bounds: Size) {
        if self.right() > bounds.w {
            self.x = bounds.w - self.w;
        } else if self.x < 0 {
            self.x = 0;
        }
        if self.bottom() > bounds.h {
            self.y = bounds.h - self.h;
        } else if self.y < 0 {
            self.y = 0;
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self::rgba((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xff)
    }
}
