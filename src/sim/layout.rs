//! Static playfield geometry
//!
//! Four lanes split the playfield into equal quarters. Each lane owns one
//! directional input, one marker and one center x-coordinate. The layout never
//! changes during a session.

use std::fmt;

use glam::Vec2;

use crate::consts::*;

/// One of the four lanes, numbered 1-4 from left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Lane 1, matched by the left input
    Left,
    /// Lane 2, matched by the down input
    Down,
    /// Lane 3, matched by the up input
    Up,
    /// Lane 4, matched by the right input
    Right,
}

impl Lane {
    /// All lanes in left-to-right order
    pub const ALL: [Lane; 4] = [Lane::Left, Lane::Down, Lane::Up, Lane::Right];

    /// 1-based lane number
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based index into per-lane arrays
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Down => 1,
            Lane::Up => 2,
            Lane::Right => 3,
        }
    }
}

impl TryFrom<u8> for Lane {
    type Error = InvalidLane;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1..=4 => Ok(Self::ALL[usize::from(number - 1)]),
            _ => Err(InvalidLane(number)),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lane::Left => "left",
            Lane::Down => "down",
            Lane::Up => "up",
            Lane::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// A lane number outside 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLane(pub u8);

impl fmt::Display for InvalidLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane {} is outside 1..=4", self.0)
    }
}

impl std::error::Error for InvalidLane {}

/// Static target shape a falling arrow must line up with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Marker {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }
}

/// Lane positions, dividers, markers and the scoring band
#[derive(Debug, Clone, PartialEq)]
pub struct LaneLayout {
    pub width: f32,
    pub height: f32,
    /// Lane center x-coordinates, indexed by `Lane::index`
    pub centers: [f32; 4],
    /// Divider x-coordinates between lanes 1|2, 2|3 and 3|4
    pub dividers: [f32; 3],
    /// One marker per lane, indexed by `Lane::index`
    pub markers: [Marker; 4],
    /// Arrows whose top edge is below this line are eligible for scoring
    pub band_top: f32,
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl LaneLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let centers = [1.0, 3.0, 5.0, 7.0].map(|eighths| width * eighths / 8.0);
        let dividers = [width / 4.0, width / 2.0, width * 3.0 / 4.0];
        let marker_y = height / 6.0;
        let markers = centers.map(|x| Marker {
            pos: Vec2::new(x, marker_y),
            size: Vec2::new(MARKER_WIDTH, MARKER_HEIGHT),
        });

        Self {
            width,
            height,
            centers,
            dividers,
            markers,
            band_top: height / 3.0,
        }
    }

    /// Center x of a lane
    #[inline]
    pub fn center_x(&self, lane: Lane) -> f32 {
        self.centers[lane.index()]
    }

    #[inline]
    pub fn marker(&self, lane: Lane) -> &Marker {
        &self.markers[lane.index()]
    }

    /// Spawn point for a new arrow: lane center at the playfield top
    pub fn spawn_point(&self, lane: Lane) -> Vec2 {
        Vec2::new(self.center_x(lane), self.height)
    }

    /// Lane whose horizontal band contains `x`
    pub fn lane_at(&self, x: f32) -> Lane {
        let [left, center, right] = self.dividers;
        if x < left {
            Lane::Left
        } else if x < center {
            Lane::Down
        } else if x < right {
            Lane::Up
        } else {
            Lane::Right
        }
    }

    /// Divider that flashes when `lane` scores (outer lanes use their
    /// neighbouring divider, the two middle lanes share the center one)
    pub fn divider_for(&self, lane: Lane) -> usize {
        match lane {
            Lane::Left => 0,
            Lane::Down | Lane::Up => 1,
            Lane::Right => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_numbers_round_trip() {
        for lane in Lane::ALL {
            assert_eq!(Lane::try_from(lane.number()), Ok(lane));
            assert_eq!(Lane::ALL[lane.index()], lane);
        }
    }

    #[test]
    fn test_invalid_lane_numbers() {
        assert_eq!(Lane::try_from(0), Err(InvalidLane(0)));
        assert_eq!(Lane::try_from(5), Err(InvalidLane(5)));
        assert_eq!(
            InvalidLane(9).to_string(),
            "lane 9 is outside 1..=4"
        );
    }

    #[test]
    fn test_default_layout_geometry() {
        let layout = LaneLayout::default();
        assert_eq!(layout.centers, [100.0, 300.0, 500.0, 700.0]);
        assert_eq!(layout.dividers, [200.0, 400.0, 600.0]);
        assert_eq!(layout.band_top, 200.0);

        let marker = layout.marker(Lane::Up);
        assert_eq!(marker.pos, Vec2::new(500.0, 100.0));
        assert!((marker.top() - 115.625).abs() < 1e-4);
        assert!((marker.bottom() - 84.375).abs() < 1e-4);
    }

    #[test]
    fn test_lane_at_uses_divider_bands() {
        let layout = LaneLayout::default();
        assert_eq!(layout.lane_at(115.0), Lane::Left);
        assert_eq!(layout.lane_at(315.0), Lane::Down);
        assert_eq!(layout.lane_at(515.0), Lane::Up);
        assert_eq!(layout.lane_at(715.0), Lane::Right);
        // Arrow right edges never sit exactly on a divider, but the boundary
        // belongs to the lane on its right
        assert_eq!(layout.lane_at(400.0), Lane::Up);
    }

    #[test]
    fn test_spawn_point_is_top_of_lane() {
        let layout = LaneLayout::default();
        assert_eq!(layout.spawn_point(Lane::Right), Vec2::new(700.0, 600.0));
    }
}
