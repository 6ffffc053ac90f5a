use crate::vector::Vector2;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Sub};

#[repr(C)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Copy> Copy for Rect<T> {}
impl<T: Clone> Clone for Rect<T> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
        }
    }
}
impl<T: Debug> Debug for Rect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "Rect {{ x: {:?}, y: {:?}, width: {:?}, height: {:?} }}",
            self.x, self.y, self.width, self.height
        )
    }
}
impl<T: PartialEq> PartialEq for Rect<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }
}
impl<T: Eq> Eq for Rect<T> {}

impl<T: Default> Default for Rect<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
            width: T::default(),
            height: T::default(),
        }
    }
}

pub type Rectf = Rect<f32>;
pub type Recti = Rect<i32>;
pub type Rectu = Rect<u32>;

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Rect<T> {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T> Rect<T>
where
    T: Sub<Output = T> + PartialOrd + Copy,
{
    pub fn from_topleft_size(topleft: Vector2<T>, size: Vector2<T>) -> Rect<T> {
        Rect {
            x: topleft.x,
            y: topleft.y,
            width: size.x,
            height: size.y,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vector2<T> {
        Vector2::new(self.width, self.height)
    }
}

impl<T> Rect<T>
where
    T: Add<Output = T> + Copy,
{
    #[inline]
    pub fn pos_min(&self) -> Vector2<T> {
        v2!(self.x, self.y)
    }

    #[inline]
    pub fn pos_max(&self) -> Vector2<T> {
        v2!(self.x + self.width, self.y + self.height)
    }
}

impl From<Rect<i32>> for Rect<f32> {
    fn from(r: Rect<i32>) -> Self {
        Rect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

impl From<Rect<u32>> for Rect<i32> {
    fn from(r: Rect<u32>) -> Self {
        Rect::new(r.x as i32, r.y as i32, r.width as i32, r.height as i32)
    }
}

impl<T> Add<Vector2<T>> for Rect<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, offset: Vector2<T>) -> Self::Output {
        Rect::new(
            self.x + offset.x,
            self.y + offset.y,
            self.width,
            self.height,
        )
    }
}

fn min<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

fn max<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

/// Tests both axis projections with half-open interval semantics, so
/// rectangles that merely touch along an edge do not overlap, and
/// zero-width or zero-height rectangles never overlap anything.
pub fn rects_overlap<T>(a: &Rect<T>, b: &Rect<T>) -> bool
where
    T: PartialOrd + Add<Output = T> + Copy,
{
    // The shared span on each axis must be non-empty; this also keeps
    // degenerate rectangles from overlapping anything.
    max(a.x, b.x) < min(a.x + a.width, b.x + b.width)
        && max(a.y, b.y) < min(a.y + a.height, b.y + b.height)
}

// Translated from SFML/Graphics/Rect.inl
pub fn rects_intersection<T>(a: &Rect<T>, b: &Rect<T>) -> Option<Rect<T>>
where
    T: PartialOrd + Add<Output = T> + Sub<Output = T> + Copy,
{
    // Rectangles with negative dimensions are allowed, so we must handle them correctly

    // Compute the min and max of the first rectangle on both axes
    let r1_minx = min(a.x, a.x + a.width);
    let r1_maxx = max(a.x, a.x + a.width);
    let r1_miny = min(a.y, a.y + a.height);
    let r1_maxy = max(a.y, a.y + a.height);

    // Compute the min and max of the second rectangle on both axes
    let r2_minx = min(b.x, b.x + b.width);
    let r2_maxx = max(b.x, b.x + b.width);
    let r2_miny = min(b.y, b.y + b.height);
    let r2_maxy = max(b.y, b.y + b.height);

    // Compute the intersection boundaries
    let ileft = max(r1_minx, r2_minx);
    let itop = max(r1_miny, r2_miny);
    let iright = min(r1_maxx, r2_maxx);
    let ibot = min(r1_maxy, r2_maxy);

    // If the intersection is valid (positive non zero area), then there is an intersection
    if (ileft < iright) && (itop < ibot) {
        Some(Rect::new(ileft, itop, iright - ileft, ibot - itop))
    } else {
        None
    }
}

impl<T> Rect<T>
where
    T: Add<Output = T> + Copy,
{
    pub fn contains<V>(&self, pos: V) -> bool
    where
        T: PartialOrd,
        V: Into<Vector2<T>>,
    {
        let pos: Vector2<T> = pos.into();
        pos.x >= self.x
            && pos.x <= self.x + self.width
            && pos.y >= self.y
            && pos.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains() {
        let rect = Rect::new(-2, -4, 10, 20);
        assert!(rect.contains(v2!(-1, -4)));
        assert!(rect.contains(v2!(0, 0)));
        assert!(rect.contains(v2!(8, 16)));
        assert!(!rect.contains(v2!(8, 17)));
        assert!(!rect.contains(v2!(-4, -5)));
    }

    #[test]
    fn rect_add_vec() {
        let rect = Rect::new(1, 2, 3, 4);
        assert_eq!(rect + v2!(2, 3), Rect::new(3, 5, 3, 4));
        assert_eq!(rect + v2!(0, 0), rect);
    }

    #[test]
    fn rect_intersect() {
        let a = Rect::new(3, 4, 10, 20);
        let b = Rect::new(4, 1, 300, 5);
        let inter = rects_intersection(&a, &b);
        assert_eq!(inter, Some(Rect::new(4, 4, 9, 2)));

        let c = Rect::new(-30, -40, 8, 19);
        assert_eq!(rects_intersection(&a, &c), None);
    }

    #[test]
    fn rect_overlap() {
        let a = Rect::new(0, 0, 16, 16);
        assert!(rects_overlap(&a, &Rect::new(15, 0, 16, 16)));
        assert!(rects_overlap(&a, &Rect::new(-15, -15, 16, 16)));
        assert!(rects_overlap(&a, &a));
    }

    #[test]
    fn rect_overlap_touching_edges() {
        // touching along an edge or corner is not an overlap
        let a = Rect::new(0, 0, 16, 16);
        assert!(!rects_overlap(&a, &Rect::new(16, 0, 16, 16)));
        assert!(!rects_overlap(&a, &Rect::new(0, 16, 16, 16)));
        assert!(!rects_overlap(&a, &Rect::new(16, 16, 16, 16)));
        assert!(!rects_overlap(&a, &Rect::new(-16, 0, 16, 16)));
    }

    #[test]
    fn rect_overlap_degenerate() {
        let a = Rect::new(0, 0, 16, 16);
        assert!(!rects_overlap(&a, &Rect::new(4, 4, 0, 8)));
        assert!(!rects_overlap(&a, &Rect::new(4, 4, 8, 0)));
        assert!(!rects_overlap(&Rect::new(4, 4, 0, 0), &a));
    }
}
