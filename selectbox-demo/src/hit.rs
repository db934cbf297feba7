#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

/// Element regions drawn this frame. Later regions sit on top.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(String, Rect)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.regions.push((id.into(), rect));
    }

    /// Find the top-most element at the given coordinates.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<String> {
        self.regions
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_top_wins() {
        let mut map = HitMap::new();
        map.insert("container", Rect::new(0, 0, 40, 1));
        map.insert("clear", Rect::new(36, 0, 1, 1));

        assert_eq!(map.hit_test(36, 0), Some("clear".to_string()));
        assert_eq!(map.hit_test(5, 0), Some("container".to_string()));
        assert_eq!(map.hit_test(5, 1), None);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(2, 3, 4, 1);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 3));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 4));
    }
}
