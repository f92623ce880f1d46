// Axis-aligned bounding boxes shared by the ball and the paddles

/// Axis-aligned box, origin top-left, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_center(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            x: center_x - width / 2.0,
            y: center_y - height / 2.0,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Keep the box between `0` and `height` vertically
    pub fn clamp_vertical(&mut self, height: f32) {
        if self.top() < 0.0 {
            self.set_top(0.0);
        }
        if self.bottom() > height {
            self.set_bottom(height);
        }
    }

    /// Overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything the match can draw and collide: it has a bounding box
pub trait Body {
    fn rect(&self) -> Rect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(100.0, 50.0, 10.0, 30.0);
        assert_eq!(r.left(), 95.0);
        assert_eq!(r.right(), 105.0);
        assert_eq!(r.top(), 35.0);
        assert_eq!(r.bottom(), 65.0);
        assert_eq!(r.center_x(), 100.0);
        assert_eq!(r.center_y(), 50.0);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::from_center(10.0, 10.0, 10.0, 10.0);
        let b = Rect::from_center(14.0, 12.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::from_center(10.0, 10.0, 10.0, 10.0);
        let b = Rect::from_center(20.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_clamp_vertical() {
        let mut r = Rect::from_center(0.0, -3.0, 10.0, 30.0);
        r.clamp_vertical(480.0);
        assert_eq!(r.top(), 0.0);

        let mut r = Rect::from_center(0.0, 479.0, 10.0, 30.0);
        r.clamp_vertical(480.0);
        assert_eq!(r.bottom(), 480.0);
    }
}
