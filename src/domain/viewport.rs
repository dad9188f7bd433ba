/// Drawing-surface bounds and the spawn center derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as f32;
        let height = height as f32;
        Self {
            width,
            height,
            center_x: 0.5 * width,
            center_y: 0.5 * height,
        }
    }

    /// Not laid out yet; frames are skipped until this turns false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Inclusive `[0, W] x [0, H]`.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_follows_size() {
        let v = Viewport::new(640, 480);
        assert_eq!((v.center_x, v.center_y), (320.0, 240.0));
    }

    #[test]
    fn edges_are_inside() {
        let v = Viewport::new(10, 20);
        assert!(v.contains(0.0, 0.0));
        assert!(v.contains(10.0, 20.0));
        assert!(!v.contains(10.01, 5.0));
        assert!(!v.contains(5.0, -0.01));
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(Viewport::new(0, 100).is_empty());
        assert!(Viewport::new(100, 0).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }
}
