//! Core broad-phase and resolution math
//!
//! Pure functions with no knowledge of the ECS: box overlap, minimum
//! translation and the per-pair decision of how an overlap is answered.
//! The ECS wrapper that walks registered entities every tick lives in
//! `ecs/systems/collision_system.rs`.

use crate::ecs::components::CollisionDescriptor;
use crate::foundation::math::Vec2;
use crate::physics::collision::Aabb;
use crate::physics::collision_groups::CollisionGroups;

/// Test two boxes for strict overlap
///
/// Boxes that only share an edge or a corner do not intersect.
pub fn is_intersecting(a: &Aabb, b: &Aabb) -> bool {
    a.max.x > b.min.x && a.min.x < b.max.x && a.max.y > b.min.y && a.min.y < b.max.y
}

/// Minimum single-axis displacement that moves `a` out of `b`
///
/// Per axis the smaller of the two candidate gaps is kept, then the axis
/// with the larger magnitude is zeroed, so the push never goes diagonal.
/// On an X/Y tie the push goes along Y. Non-overlapping boxes log a warning
/// and yield the zero vector.
pub fn minimum_translation(a: &Aabb, b: &Aabb) -> Vec2 {
    let left = b.min.x - a.max.x;
    let right = b.max.x - a.min.x;
    let top = b.min.y - a.max.y;
    let bottom = b.max.y - a.min.y;

    if left > 0.0 || right < 0.0 || top > 0.0 || bottom < 0.0 {
        log::warn!(
            "minimum_translation called on separated boxes {:?} and {:?}",
            a,
            b
        );
        return Vec2::zeros();
    }

    let mut mtd = Vec2::new(
        if left.abs() < right.abs() { left } else { right },
        if top.abs() < bottom.abs() { top } else { bottom },
    );

    if mtd.x.abs() < mtd.y.abs() {
        mtd.y = 0.0;
    } else {
        mtd.x = 0.0;
    }
    mtd
}

/// Physical answer to an overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Report only, nobody moves
    None,
    /// The initiator moves by the full vector, the other entity stays
    Push(Vec2),
    /// The initiator moves by half the vector, the other by minus half
    Split(Vec2),
}

/// Outcome of testing one ordered pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairOutcome {
    /// Groups matched by `initiator.active & other.passive`
    pub matched: CollisionGroups,
    /// Physical response to apply
    pub response: Response,
}

/// Decide how the initiator answers an overlap with another entity
///
/// `initiator_box` and `other_box` are the margin-expanded broad-phase
/// boxes. Returns `None` when the groups do not match or the boxes do not
/// strictly overlap.
pub fn resolve_pair(
    initiator: &CollisionDescriptor,
    initiator_box: &Aabb,
    other: &CollisionDescriptor,
    other_box: &Aabb,
    solids: CollisionGroups,
) -> Option<PairOutcome> {
    let matched = CollisionGroups::matched(initiator.active, other.passive);
    if matched.is_empty() || !is_intersecting(initiator_box, other_box) {
        return None;
    }

    let response = if matched.intersects(solids) {
        let mtd = minimum_translation(initiator_box, other_box);
        let mutual = CollisionGroups::matched(other.active, initiator.passive);
        if mutual.intersects(solids) {
            Response::Split(mtd)
        } else {
            Response::Push(mtd)
        }
    } else {
        Response::None
    };

    Some(PairOutcome { matched, response })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Aabb {
        Aabb::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    #[test]
    fn test_shared_edge_is_not_intersecting() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(10.0, 0.0, 20.0, 10.0);
        assert!(!is_intersecting(&a, &b));
        assert!(!is_intersecting(&b, &a));

        let corner = aabb(10.0, 10.0, 20.0, 20.0);
        assert!(!is_intersecting(&a, &corner));
    }

    #[test]
    fn test_overlap_and_containment_intersect() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(is_intersecting(&a, &aabb(9.0, 9.0, 20.0, 20.0)));
        assert!(is_intersecting(&a, &aabb(2.0, 2.0, 3.0, 3.0)));
    }

    #[test]
    fn test_minimum_translation_picks_shallow_axis() {
        // A overlaps B by 2 on X and 8 on Y: push A left by 2
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(8.0, 2.0, 18.0, 12.0);
        assert_eq!(minimum_translation(&a, &b), Vec2::new(-2.0, 0.0));

        // Mirror: A sits below B and overlaps by 3 on Y
        let a = aabb(0.0, 7.0, 10.0, 17.0);
        let b = aabb(1.0, 0.0, 11.0, 10.0);
        assert_eq!(minimum_translation(&a, &b), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_minimum_translation_on_identical_boxes() {
        let a = aabb(0.0, 0.0, 10.0, 4.0);
        // Ties per axis keep the positive gap, the shallower Y axis wins
        assert_eq!(minimum_translation(&a, &a), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_minimum_translation_of_separated_boxes_is_zero() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(30.0, 30.0, 40.0, 40.0);
        assert_eq!(minimum_translation(&a, &b), Vec2::zeros());
    }

    #[test]
    fn test_resolve_pair_responses() {
        let solids = CollisionGroups::GROUP_0;
        let a_box = aabb(0.0, 0.0, 10.0, 10.0);
        let b_box = aabb(8.0, 0.0, 18.0, 10.0);

        let mover = CollisionDescriptor::new(CollisionGroups::GROUP_0, CollisionGroups::GROUP_0);
        let wall = CollisionDescriptor::new(CollisionGroups::empty(), CollisionGroups::GROUP_0);
        let trigger = CollisionDescriptor::new(CollisionGroups::empty(), CollisionGroups::GROUP_1);
        let scanner = CollisionDescriptor::new(CollisionGroups::GROUP_1, CollisionGroups::empty());

        let push = resolve_pair(&mover, &a_box, &wall, &b_box, solids).unwrap();
        assert_eq!(push.response, Response::Push(Vec2::new(-2.0, 0.0)));

        let split = resolve_pair(&mover, &a_box, &mover, &b_box, solids).unwrap();
        assert_eq!(split.response, Response::Split(Vec2::new(-2.0, 0.0)));

        let report = resolve_pair(&scanner, &a_box, &trigger, &b_box, solids).unwrap();
        assert_eq!(report.matched, CollisionGroups::GROUP_1);
        assert_eq!(report.response, Response::None);

        assert!(resolve_pair(&mover, &a_box, &trigger, &b_box, solids).is_none());
        assert!(resolve_pair(&mover, &a_box, &wall, &aabb(50.0, 0.0, 60.0, 10.0), solids).is_none());
    }
}
