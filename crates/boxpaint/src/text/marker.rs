use crate::coords::{Rect, Vec2};
use crate::scene::Recorder;

use super::input::{SymbolMarker, SymbolMarkerKind, WritingMode};

/// Direction a disclosure triangle points to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PhysicalDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PhysicalDirection {
    /// Open triangles point to the block end, closed ones to the inline end.
    pub fn for_disclosure(open: bool, mode: WritingMode, rtl: bool) -> Self {
        match (open, mode) {
            (true, WritingMode::HorizontalTb) => PhysicalDirection::Down,
            (true, WritingMode::VerticalRl) => PhysicalDirection::Left,
            (true, WritingMode::VerticalLr) => PhysicalDirection::Right,
            (false, m) if m.is_horizontal() => {
                if rtl { PhysicalDirection::Left } else { PhysicalDirection::Right }
            }
            (false, _) => {
                if rtl { PhysicalDirection::Up } else { PhysicalDirection::Down }
            }
        }
    }
}

/// Triangle vertices for a disclosure marker inside `rect`.
pub fn disclosure_points(direction: PhysicalDirection, rect: Rect) -> Vec<Vec2> {
    let unit: [(f32, f32); 3] = match direction {
        PhysicalDirection::Left => [(1.0, 0.0), (0.14, 0.5), (1.0, 1.0)],
        PhysicalDirection::Right => [(0.0, 0.0), (0.86, 0.5), (0.0, 1.0)],
        PhysicalDirection::Up => [(0.0, 0.93), (0.5, 0.07), (1.0, 0.93)],
        PhysicalDirection::Down => [(0.0, 0.07), (0.5, 0.93), (1.0, 0.07)],
    };
    unit.iter().map(|&(u, v)| rect.map_unit(u, v)).collect()
}

/// Emits the single operation drawing `marker`.
pub(crate) fn paint_symbol_marker(marker: &SymbolMarker, mode: WritingMode, stroke_width: f32, rec: &mut Recorder) {
    log::trace!("marker {:?}", marker.kind);
    match marker.kind {
        SymbolMarkerKind::Disc => rec.fill_ellipse(marker.rect, marker.color),
        SymbolMarkerKind::Circle => rec.stroke_ellipse(marker.rect, marker.color, stroke_width),
        SymbolMarkerKind::Square => rec.fill_rect(marker.rect, marker.color),
        SymbolMarkerKind::DisclosureOpen | SymbolMarkerKind::DisclosureClosed => {
            let open = marker.kind == SymbolMarkerKind::DisclosureOpen;
            let direction = PhysicalDirection::for_disclosure(open, mode, marker.rtl);
            rec.fill_path(disclosure_points(direction, marker.rect), marker.color);
        }
    }
}
