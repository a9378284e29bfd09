use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (x grows right, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
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

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test. Rectangles that merely share an edge do not
    /// overlap, so a body resting exactly on a platform top is not "inside" it.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Copy of this rectangle translated by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Finite coordinates and strictly positive extent.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_screen_space() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), (25.0, 40.0));
    }

    #[test]
    fn overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let floor = Rect::new(0.0, 780.0, 1200.0, 20.0);
        let body = Rect::new(50.0, 748.0, 32.0, 32.0);
        assert!(
            !body.overlaps(&floor),
            "A body resting on the floor top must not count as overlapping"
        );
        assert!(
            body.offset(0.0, 1.0).overlaps(&floor),
            "Probing one unit down should touch the floor"
        );
    }

    #[test]
    fn contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn degenerate_rects_are_rejected() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 10.0, -1.0).is_well_formed());
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_well_formed());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..200.0, 1.0f32..200.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(a in rect(), b in rect()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn rect_overlaps_itself(a in rect()) {
                prop_assert!(a.overlaps(&a));
            }
        }
    }
}
