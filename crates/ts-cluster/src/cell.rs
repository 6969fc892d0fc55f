//! Grid cell key.

use ts_core::GeoPoint;

/// Identifies one grid cell: integer floor of lat/lon divided by the cell
/// edge length.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellKey {
    pub x: i32,
    pub y: i32,
}

impl CellKey {
    /// The cell containing `pos` for a given cell edge length in degrees.
    ///
    /// Uses a true floor (not truncation) so coordinates just below zero
    /// land in cell −1, not cell 0.
    #[inline]
    pub fn of(pos: GeoPoint, grid_size_deg: f32) -> CellKey {
        CellKey {
            x: (pos.lat / grid_size_deg).floor() as i32,
            y: (pos.lon / grid_size_deg).floor() as i32,
        }
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
