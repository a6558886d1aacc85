//! Hit-window evaluation
//!
//! A press in a lane matches the first unscored arrow that sits in that lane's
//! horizontal band, has dropped into the scoring band, and overlaps the lane's
//! marker within `HIT_TOLERANCE` on either side.

use super::layout::{Lane, LaneLayout, Marker};
use super::state::Arrow;
use crate::consts::HIT_TOLERANCE;

/// True if the arrow lines up with the marker closely enough to count
#[inline]
pub fn in_hit_window(arrow: &Arrow, marker: &Marker) -> bool {
    arrow.top() < marker.top() + HIT_TOLERANCE && arrow.bottom() > marker.bottom() - HIT_TOLERANCE
}

/// True if a press in `lane` may consider this arrow at all
pub fn is_candidate(arrow: &Arrow, layout: &LaneLayout, lane: Lane) -> bool {
    !arrow.is_scored() && layout.lane_at(arrow.right()) == lane && arrow.top() < layout.band_top
}

/// Find the arrow a press in `lane` would match, in registry order
pub fn find_match(arrows: &[Arrow], layout: &LaneLayout, lane: Lane) -> Option<usize> {
    let marker = layout.marker(lane);
    arrows
        .iter()
        .position(|arrow| is_candidate(arrow, layout, lane) && in_hit_window(arrow, marker))
}

/// Evaluate a press in `lane`: marks the first matching arrow scored and
/// returns its id. Points are awarded when the arrow is swept from the
/// registry, so a match here can never be counted twice.
pub fn evaluate_press(arrows: &mut [Arrow], layout: &LaneLayout, lane: Lane) -> Option<u32> {
    let index = find_match(arrows, layout, lane)?;
    let arrow = &mut arrows[index];
    arrow.mark_scored().then_some(arrow.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARROW_HEIGHT, ARROW_WIDTH};
    use glam::Vec2;

    fn arrow_at(id: u32, lane: Lane, y: f32) -> Arrow {
        let layout = LaneLayout::default();
        Arrow::new(
            id,
            lane,
            Vec2::new(layout.center_x(lane), y),
            Vec2::new(ARROW_WIDTH, ARROW_HEIGHT),
        )
    }

    #[test]
    fn test_hit_window_edges() {
        let layout = LaneLayout::default();
        let marker = layout.marker(Lane::Left);
        // Marker spans 84.375..115.625, so centers strictly inside
        // 76.875..123.125 match
        assert!(in_hit_window(&arrow_at(1, Lane::Left, 100.0), marker));
        assert!(in_hit_window(&arrow_at(1, Lane::Left, 123.0), marker));
        assert!(!in_hit_window(&arrow_at(1, Lane::Left, 123.125), marker));
        assert!(in_hit_window(&arrow_at(1, Lane::Left, 77.0), marker));
        assert!(!in_hit_window(&arrow_at(1, Lane::Left, 76.875), marker));
    }

    #[test]
    fn test_press_marks_arrow_in_window() {
        let layout = LaneLayout::default();
        let mut arrows = vec![arrow_at(1, Lane::Down, 100.0)];
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Down), Some(1));
        assert!(arrows[0].is_scored());
    }

    #[test]
    fn test_scored_arrow_is_not_matched_again() {
        let layout = LaneLayout::default();
        let mut arrows = vec![arrow_at(1, Lane::Down, 100.0)];
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Down), Some(1));
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Down), None);
    }

    #[test]
    fn test_wrong_lane_press_ignored() {
        let layout = LaneLayout::default();
        let mut arrows = vec![arrow_at(1, Lane::Up, 100.0)];
        for lane in [Lane::Left, Lane::Down, Lane::Right] {
            assert_eq!(evaluate_press(&mut arrows, &layout, lane), None);
        }
        assert!(!arrows[0].is_scored());
    }

    #[test]
    fn test_arrow_above_window_not_matched() {
        let layout = LaneLayout::default();
        let mut arrows = vec![arrow_at(1, Lane::Right, 400.0), arrow_at(2, Lane::Right, 150.0)];
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Right), None);
        assert!(arrows.iter().all(|a| !a.is_scored()));
    }

    #[test]
    fn test_first_in_registry_order_wins() {
        let layout = LaneLayout::default();
        let mut arrows = vec![
            arrow_at(7, Lane::Left, 110.0),
            arrow_at(3, Lane::Left, 90.0),
        ];
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Left), Some(7));
        assert!(!arrows[1].is_scored());
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Left), Some(3));
    }

    #[test]
    fn test_empty_lane_press_changes_nothing() {
        let layout = LaneLayout::default();
        let mut arrows: Vec<Arrow> = Vec::new();
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Up), None);
        assert!(arrows.is_empty());
    }

    #[test]
    fn test_lane_membership_is_spatial() {
        let layout = LaneLayout::default();
        // Tagged as lane 1 but drawn in lane 2's band
        let mut arrows = vec![Arrow::new(
            1,
            Lane::Left,
            Vec2::new(layout.center_x(Lane::Down), 100.0),
            Vec2::new(ARROW_WIDTH, ARROW_HEIGHT),
        )];
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Left), None);
        assert_eq!(evaluate_press(&mut arrows, &layout, Lane::Down), Some(1));
    }
}
