use std::f64::consts::PI;

/// Orbital radius of the action buttons around the touch origin.
pub const MENU_RADIUS: f64 = 80.0;
/// Angular width of the button arc.
pub const ARC_SPAN: f64 = 110.0 * PI / 180.0;
/// Visual radius of one action button.
pub const BUTTON_RADIUS: f64 = 24.0;
/// Catch zone around a button center, slightly generous but below the
/// spacing the fixed radius/arc constants guarantee.
pub const HIT_RADIUS: f64 = BUTTON_RADIUS * 1.1;
/// Upper bound on catalog size the arc is laid out for.
pub const MAX_ACTIONS: usize = 4;

const HEADING_LEFT: f64 = -45.0 * PI / 180.0;
const HEADING_RIGHT: f64 = -135.0 * PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// On-screen rectangle of a pressed card, snapshotted once at arm time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which half of the screen the touch origin falls in.  The arc flips
/// so buttons always fan away from the nearest edge and above the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenHalf {
    Left,
    Right,
}

impl ScreenHalf {
    pub fn of(origin: Point, screen_width: f64) -> Self {
        if origin.x < screen_width / 2.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Center heading of the arc: upper-right for a left-half origin,
    /// upper-left for a right-half one (screen y grows downward).
    pub fn heading(&self) -> f64 {
        match self {
            Self::Left => HEADING_LEFT,
            Self::Right => HEADING_RIGHT,
        }
    }
}

/// Centers of `count` buttons, evenly spaced over [`ARC_SPAN`] at
/// [`MENU_RADIUS`] from `origin`, in catalog order from one arc end to
/// the other.  A single button sits on the heading itself; a zero
/// count yields an empty layout rather than dividing by zero.
///
/// Pure in `(origin, screen_width, count)` so the paint and hit-test
/// call sites can never disagree.
pub fn button_positions(origin: Point, screen_width: f64, count: usize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let heading = ScreenHalf::of(origin, screen_width).heading();
    if count == 1 {
        return vec![point_on_ring(origin, heading)];
    }
    let start = heading - ARC_SPAN / 2.0;
    let step = ARC_SPAN / (count - 1) as f64;
    (0..count)
        .map(|i| point_on_ring(origin, start + step * i as f64))
        .collect()
}

/// Index of the button under `finger`, if any: nearest center within
/// [`HIT_RADIUS`], first catalog index on an exact tie.
pub fn hit_test(finger: Point, origin: Point, screen_width: f64, count: usize) -> Option<usize> {
    button_positions(origin, screen_width, count)
        .into_iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(finger)))
        .filter(|(_, d)| *d < HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

fn point_on_ring(origin: Point, angle: f64) -> Point {
    Point::new(
        origin.x + MENU_RADIUS * angle.cos(),
        origin.y + MENU_RADIUS * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: f64 = 400.0;

    fn angle_of(origin: Point, p: Point) -> f64 {
        (p.y - origin.y).atan2(p.x - origin.x)
    }

    #[test]
    fn left_origin_fans_upper_right() {
        // Scenario A: origin on the left half, three buttons centered
        // on -45 degrees.
        let origin = Point::new(50.0, 300.0);
        let positions = button_positions(origin, SCREEN, 3);
        assert_eq!(positions.len(), 3);

        let expected = [-100.0_f64, -45.0, 10.0];
        for (p, deg) in positions.iter().zip(expected) {
            assert!((angle_of(origin, *p) - deg.to_radians()).abs() < 1e-9);
            assert!((p.distance(origin) - MENU_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn right_origin_fans_upper_left() {
        // Scenario B: same screen, origin on the right half, arc
        // centered on -135 degrees.
        let origin = Point::new(350.0, 300.0);
        let positions = button_positions(origin, SCREEN, 3);

        let expected = [-190.0_f64, -135.0, -80.0];
        for (p, deg) in positions.iter().zip(expected) {
            let diff = (angle_of(origin, *p) - deg.to_radians()).rem_euclid(2.0 * PI);
            assert!(diff < 1e-9 || (2.0 * PI - diff) < 1e-9);
        }
        // The middle button sits up-left of the finger.
        assert!(positions[1].x < origin.x && positions[1].y < origin.y);
    }

    #[test]
    fn single_button_sits_on_heading() {
        let origin = Point::new(50.0, 300.0);
        let positions = button_positions(origin, SCREEN, 1);
        assert_eq!(positions.len(), 1);
        let deg = angle_of(origin, positions[0]).to_degrees();
        assert!((deg + 45.0).abs() < 1e-9);
    }

    #[test]
    fn zero_count_yields_empty_layout() {
        let origin = Point::new(50.0, 300.0);
        assert!(button_positions(origin, SCREEN, 0).is_empty());
        assert_eq!(hit_test(origin, origin, SCREEN, 0), None);
    }

    #[test]
    fn buttons_never_overlap() {
        for count in 1..=MAX_ACTIONS {
            for origin in [Point::new(10.0, 500.0), Point::new(390.0, 40.0)] {
                let positions = button_positions(origin, SCREEN, count);
                for i in 0..positions.len() {
                    for j in (i + 1)..positions.len() {
                        assert!(
                            positions[i].distance(positions[j]) >= 2.0 * BUTTON_RADIUS,
                            "buttons {i} and {j} overlap at count {count}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn hit_test_inverts_layout_at_centers() {
        for count in 1..=MAX_ACTIONS {
            let origin = Point::new(320.0, 420.0);
            for (i, p) in button_positions(origin, SCREEN, count).iter().enumerate() {
                assert_eq!(hit_test(*p, origin, SCREEN, count), Some(i));
            }
        }
    }

    #[test]
    fn finger_at_origin_hits_nothing() {
        let origin = Point::new(200.0, 300.0);
        assert_eq!(hit_test(origin, origin, SCREEN, 3), None);
    }

    #[test]
    fn miss_just_outside_catch_zone() {
        let origin = Point::new(50.0, 300.0);
        let positions = button_positions(origin, SCREEN, 3);
        // Just past the catch zone of the first button, still far from
        // its neighbors given the fixed spacing.
        let away = Point::new(positions[0].x + HIT_RADIUS + 0.1, positions[0].y);
        assert_eq!(hit_test(away, origin, SCREEN, 3), None);
    }
}
