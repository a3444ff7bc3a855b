// Pure geometry - no framework imports.
// The container anchors its child list to all four of its edges; the list
// maps long-press touch points back to row indices. Both are plain
// arithmetic over the rects below.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size { width, height },
        }
    }

    pub fn zero() -> Self {
        Rect::default()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };
}

/// Anchor a child region to all four edges of `parent`, inset as given.
/// Degenerate insets clamp to an empty rect rather than inverting it.
pub fn anchored(parent: Rect, insets: EdgeInsets) -> Rect {
    let width = (parent.size.width - insets.leading - insets.trailing).max(0.0);
    let height = (parent.size.height - insets.top - insets.bottom).max(0.0);
    Rect {
        origin: Point::new(parent.origin.x + insets.leading, parent.origin.y + insets.top),
        size: Size { width, height },
    }
}

/// Map a point in list coordinates to the row under it. Rows are uniform
/// height and the single section draws no header, so content starts at the
/// top of the list bounds minus the scroll offset. Returns `None` for
/// points outside the bounds or past the last row.
pub fn row_index_at(
    point: Point,
    bounds: Rect,
    scroll_offset: f32,
    row_height: f32,
    row_count: usize,
) -> Option<usize> {
    if row_height <= 0.0 || !bounds.contains(point) {
        return None;
    }
    let y = point.y - bounds.origin.y + scroll_offset;
    if y < 0.0 {
        return None;
    }
    let index = (y / row_height) as usize;
    if index < row_count {
        Some(index)
    } else {
        None
    }
}
