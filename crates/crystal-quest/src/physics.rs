//! Kinematic bodies and axis-separated platform collision.
//!
//! Bodies move one axis at a time: integrate X, resolve against every
//! platform, then integrate Y and resolve again. Platforms are resolved in
//! authored order with no spatial sorting, so overlapping platform geometry
//! is order-dependent (the last platform touched wins). Levels must not
//! author overlapping platforms.

use serde::{Deserialize, Serialize};

use crystal_quest_core::geometry::Rect;

/// Static level geometry. Immutable for the lifetime of a level.
pub type Platform = Rect;

/// Outcome of a vertical collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalContact {
    /// Hit a platform top while falling.
    pub landed: bool,
    /// Hit a platform underside while rising.
    pub hit_ceiling: bool,
}

/// Axis-aligned box with velocity, shared by the player and grounded enemies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl KinematicBody {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vel_x: 0.0,
            vel_y: 0.0,
        }
    }

    /// Bounding box built from the current position. Never cached.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.vel_y += gravity * dt;
    }

    /// Integrate X and push out of any platform hit.
    pub fn move_horizontal(&mut self, dt: f32, platforms: &[Platform]) {
        self.x += self.vel_x * dt;
        resolve_horizontal(self, platforms);
    }

    /// Integrate Y and snap against any platform hit.
    pub fn move_vertical(&mut self, dt: f32, platforms: &[Platform]) -> VerticalContact {
        self.y += self.vel_y * dt;
        resolve_vertical(self, platforms)
    }

    /// Whether the box shifted `probe` units down touches any platform.
    pub fn probe_ground(&self, platforms: &[Platform], probe: f32) -> bool {
        let feet = self.rect().offset(0.0, probe);
        platforms.iter().any(|p| feet.overlaps(p))
    }

    pub fn stop(&mut self) {
        self.vel_x = 0.0;
        self.vel_y = 0.0;
    }
}

/// Push the body out of platforms along X based on its direction of travel.
pub fn resolve_horizontal(body: &mut KinematicBody, platforms: &[Platform]) {
    for platform in platforms {
        // Rebuilt per platform: an earlier push changes what overlaps next.
        if !body.rect().overlaps(platform) {
            continue;
        }
        if body.vel_x > 0.0 {
            body.x = platform.left() - body.width;
        } else if body.vel_x < 0.0 {
            body.x = platform.right();
        }
        body.vel_x = 0.0;
    }
}

/// Snap the body onto a platform top when falling, or under it when rising.
pub fn resolve_vertical(body: &mut KinematicBody, platforms: &[Platform]) -> VerticalContact {
    let mut contact = VerticalContact::default();
    for platform in platforms {
        if !body.rect().overlaps(platform) {
            continue;
        }
        if body.vel_y > 0.0 {
            body.y = platform.top() - body.height;
            body.vel_y = 0.0;
            contact.landed = true;
        } else if body.vel_y < 0.0 {
            body.y = platform.bottom();
            body.vel_y = 0.0;
            contact.hit_ceiling = true;
        }
    }
    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn floor() -> Platform {
        Rect::new(0.0, 780.0, 1200.0, 20.0)
    }

    #[test]
    fn gravity_accumulates_downward() {
        let mut body = KinematicBody::new(0.0, 0.0, 10.0, 10.0);
        body.apply_gravity(1500.0, DT);
        assert!((body.vel_y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn falling_body_snaps_to_platform_top() {
        let mut body = KinematicBody::new(50.0, 740.0, 32.0, 32.0);
        body.vel_y = 900.0;
        let contact = body.move_vertical(DT, &[floor()]);
        assert!(contact.landed);
        assert_eq!(body.y, 780.0 - 32.0);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn rising_body_stops_under_ceiling() {
        let ceiling = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut body = KinematicBody::new(10.0, 125.0, 32.0, 32.0);
        body.vel_y = -600.0;
        let contact = body.move_vertical(DT, &[ceiling]);
        assert!(contact.hit_ceiling);
        assert!(!contact.landed);
        assert_eq!(body.y, 120.0);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn moving_right_into_wall_stops_at_left_edge() {
        let wall = Rect::new(100.0, 0.0, 20.0, 200.0);
        let mut body = KinematicBody::new(65.0, 50.0, 32.0, 32.0);
        body.vel_x = 300.0;
        body.move_horizontal(DT, &[wall]);
        assert_eq!(body.x, 100.0 - 32.0);
        assert_eq!(body.vel_x, 0.0);
    }

    #[test]
    fn moving_left_into_wall_stops_at_right_edge() {
        let wall = Rect::new(100.0, 0.0, 20.0, 200.0);
        let mut body = KinematicBody::new(122.0, 50.0, 32.0, 32.0);
        body.vel_x = -300.0;
        body.move_horizontal(DT, &[wall]);
        assert_eq!(body.x, 120.0);
        assert_eq!(body.vel_x, 0.0);
    }

    #[test]
    fn resting_body_does_not_collide_horizontally_with_floor() {
        let mut body = KinematicBody::new(50.0, 748.0, 32.0, 32.0);
        body.vel_x = 300.0;
        body.move_horizontal(DT, &[floor()]);
        assert_eq!(body.vel_x, 300.0, "Edge contact with the floor is not a wall hit");
        assert!((body.x - 55.0).abs() < 1e-4);
    }

    #[test]
    fn ground_probe_sees_platform_one_unit_down() {
        let body = KinematicBody::new(50.0, 748.0, 32.0, 32.0);
        assert!(body.probe_ground(&[floor()], 1.0));
        let airborne = KinematicBody::new(50.0, 700.0, 32.0, 32.0);
        assert!(!airborne.probe_ground(&[floor()], 1.0));
    }

    #[test]
    fn overlapping_platforms_resolve_in_authored_order() {
        // Two overlapping slabs. The outcome depends on which one is listed first.
        let upper = Rect::new(0.0, 500.0, 100.0, 40.0);
        let lower = Rect::new(0.0, 520.0, 100.0, 40.0);

        let mut a = KinematicBody::new(10.0, 490.0, 20.0, 20.0);
        a.vel_y = 900.0;
        a.move_vertical(DT, &[upper, lower]);
        assert_eq!(a.y, 480.0, "Upper listed first: body rests on the upper slab");

        let mut b = KinematicBody::new(10.0, 490.0, 20.0, 20.0);
        b.vel_y = 900.0;
        b.move_vertical(DT, &[lower, upper]);
        assert_eq!(
            b.y, 500.0,
            "Lower listed first: snapped onto lower, then left embedded in upper"
        );
        assert_eq!(b.vel_y, 0.0);
    }

    #[test]
    fn zero_velocity_overlap_leaves_position() {
        let mut body = KinematicBody::new(10.0, 775.0, 32.0, 32.0);
        let contact = resolve_vertical(&mut body, &[floor()]);
        assert_eq!(contact, VerticalContact::default());
        assert_eq!(body.y, 775.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn landing_snaps_regardless_of_overshoot(
                start_gap in 0.5f32..40.0,
                speed in 30.0f32..2400.0,
            ) {
                // Body starts above the floor and overshoots into it this frame.
                let height = 32.0;
                let start_y = 780.0 - height - start_gap;
                let mut body = KinematicBody::new(50.0, start_y, 32.0, height);
                body.vel_y = speed;
                let travel = speed * DT;
                let contact = body.move_vertical(DT, &[floor()]);
                if travel > start_gap + 0.01 {
                    prop_assert!(contact.landed);
                    prop_assert_eq!(body.y, 780.0 - height);
                    prop_assert_eq!(body.vel_y, 0.0);
                } else if travel < start_gap - 0.01 {
                    prop_assert!(!contact.landed);
                }
            }
        }
    }
}
