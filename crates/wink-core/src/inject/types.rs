use std::time::Duration;

/// Delay after a foreground activation request before injecting events.
///
/// The window server gives no signal when a foreground switch completes;
/// this wait is best effort, not a delivery guarantee.
pub const ACTIVATION_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Delay between the positioning move and the button-down event
pub const PRE_CLICK_MOVE_DELAY: Duration = Duration::from_millis(50);

/// Delay between mouse down and mouse up events
pub const MOUSE_EVENT_DELAY: Duration = Duration::from_millis(10);

/// Kind of synthetic pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
}

/// One synthetic pointer event at a screen-absolute position.
///
/// `click_count` above 1 on a down/up pair tells the receiving application
/// to coalesce the pair into a multi-click gesture instead of treating the
/// events as independent clicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    kind: PointerEventKind,
    x: f64,
    y: f64,
    click_count: i64,
}

impl PointerEvent {
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            x,
            y,
            click_count: 0,
        }
    }

    pub fn down(x: f64, y: f64, click_count: i64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            x,
            y,
            click_count,
        }
    }

    pub fn up(x: f64, y: f64, click_count: i64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            x,
            y,
            click_count,
        }
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn click_count(&self) -> i64 {
        self.click_count
    }
}

/// Request to click at a screen position, targeted at one process
#[derive(Debug, Clone)]
pub struct ClickRequest {
    pid: u32,
    x: f64,
    y: f64,
    double_click: bool,
}

impl ClickRequest {
    pub fn new(pid: u32, x: f64, y: f64) -> Self {
        Self {
            pid,
            x,
            y,
            double_click: false,
        }
    }

    pub fn with_double_click(mut self) -> Self {
        self.double_click = true;
        self
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn double_click(&self) -> bool {
        self.double_click
    }

    /// Click count carried by the down/up pair
    pub fn click_count(&self) -> i64 {
        if self.double_click { 2 } else { 1 }
    }
}
