use serde::{Deserialize, Serialize};

/// Rectangle in the platform's global coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert window-relative coordinates to screen-absolute coordinates
    pub fn to_screen(&self, rel_x: i32, rel_y: i32) -> (f64, f64) {
        ((self.x + rel_x) as f64, (self.y + rel_y) as f64)
    }

    /// Whether a window-relative point falls inside these bounds
    pub fn contains_relative(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

/// Snapshot description of one on-screen window.
///
/// Records are immutable once constructed; a directory snapshot does not
/// track windows that close after enumeration, so operations on a stale
/// identifier must fail gracefully downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRecord {
    id: u32,
    title: String,
    owner: String,
    bounds: Bounds,
    on_screen: bool,
}

impl WindowRecord {
    pub fn new(id: u32, title: String, owner: String, bounds: Bounds, on_screen: bool) -> Self {
        Self {
            id,
            title,
            owner,
            bounds,
            on_screen,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn on_screen(&self) -> bool {
        self.on_screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_record_getters() {
        let record = WindowRecord::new(
            123,
            "Test Title".to_string(),
            "TestApp".to_string(),
            Bounds::new(100, 200, 800, 600),
            true,
        );

        assert_eq!(record.id(), 123);
        assert_eq!(record.title(), "Test Title");
        assert_eq!(record.owner(), "TestApp");
        assert_eq!(record.bounds().x(), 100);
        assert_eq!(record.bounds().y(), 200);
        assert_eq!(record.bounds().width(), 800);
        assert_eq!(record.bounds().height(), 600);
        assert!(record.on_screen());
    }

    #[test]
    fn test_to_screen() {
        let bounds = Bounds::new(100, 200, 800, 600);
        let (sx, sy) = bounds.to_screen(50, 30);
        assert!((sx - 150.0).abs() < f64::EPSILON);
        assert!((sy - 230.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_screen_origin() {
        let bounds = Bounds::new(0, 0, 800, 600);
        let (sx, sy) = bounds.to_screen(0, 0);
        assert!((sx - 0.0).abs() < f64::EPSILON);
        assert!((sy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_relative_valid() {
        let bounds = Bounds::new(0, 0, 800, 600);
        assert!(bounds.contains_relative(0, 0));
        assert!(bounds.contains_relative(799, 599));
        assert!(bounds.contains_relative(400, 300));
    }

    #[test]
    fn test_contains_relative_out_of_bounds() {
        let bounds = Bounds::new(0, 0, 800, 600);
        assert!(!bounds.contains_relative(800, 0));
        assert!(!bounds.contains_relative(0, 600));
        assert!(!bounds.contains_relative(999, 999));
    }

    #[test]
    fn test_contains_relative_negative() {
        let bounds = Bounds::new(0, 0, 800, 600);
        assert!(!bounds.contains_relative(-1, 0));
        assert!(!bounds.contains_relative(0, -1));
    }

    #[test]
    fn test_window_record_serialization() {
        let record = WindowRecord::new(
            7,
            "Downloads".to_string(),
            "Finder".to_string(),
            Bounds::new(10, 20, 640, 480),
            true,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"title\":\"Downloads\""));
        assert!(json.contains("\"owner\":\"Finder\""));
    }
}
