//! Integration tests for level loading: JSON parsing, rectangle extraction,
//! physics world construction, and the debug outline pass.

use bevy_ecs::prelude::*;
use glam::Vec2;

use tilebody::components::boxcollider::BoxCollider;
use tilebody::components::collisionmasks::CollisionMasks;
use tilebody::components::mapposition::MapPosition;
use tilebody::contacts::ContactMode;
use tilebody::game::{attach_entity_body, build_schedule, load_level};
use tilebody::physics::BodyKind;
use tilebody::rects::SolidRect;
use tilebody::resources::camera::Camera;
use tilebody::resources::collisionmap::{CollisionMap, LevelData};
use tilebody::resources::debugmode::DebugMode;
use tilebody::resources::physicsworld::{CollisionRects, PhysicsWorldRes};
use tilebody::systems::debugdraw::DebugOutlines;

const LEVEL_JSON: &str = r#"{
    "layer": [
        {
            "name": "background",
            "data": [[7, 7, 7, 7], [7, 7, 7, 7], [7, 7, 7, 7]],
            "width": 4, "height": 3, "tilesize": 8
        },
        {
            "name": "collision",
            "data": [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 1]],
            "width": 4, "height": 3, "tilesize": 8
        }
    ]
}"#;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load(json: &str, scale: f32) -> World {
    init_logs();
    let mut world = World::new();
    let level = LevelData::from_json(json).unwrap();
    load_level(&mut world, &level, ContactMode::Immediate, scale);
    world
}

#[test]
fn load_level_extracts_rects_and_builds_bodies() {
    let world = load(LEVEL_JSON, 0.1);

    let rects = &world.resource::<CollisionRects>().0;
    assert_eq!(
        rects.as_slice(),
        &[
            SolidRect {
                x: 0,
                y: 0,
                width: 2,
                height: 2
            },
            SolidRect {
                x: 3,
                y: 2,
                width: 1,
                height: 1
            },
        ]
    );

    let physics = &world.resource::<PhysicsWorldRes>().0;
    assert_eq!(physics.body_count(), 2);
    assert!(physics.iter().all(|(_, b)| b.kind == BodyKind::Static));
    let (_, first) = physics.iter().next().unwrap();
    // 2x2 tiles of 8px, centered at (8, 8) pixels, scaled into physics units.
    assert_eq!(first.position, Vec2::new(0.8, 0.8));
    assert_eq!(first.half_extents, Vec2::new(0.8, 0.8));
}

#[test]
fn load_level_installs_queryable_collision_map() {
    let world = load(LEVEL_JSON, 1.0);
    let map = world.resource::<CollisionMap>();
    assert_eq!(map.get_tile(Vec2::new(4.0, 4.0)), Some(1));
    assert_eq!(map.get_tile(Vec2::new(20.0, 4.0)), Some(0));
    assert_eq!(map.get_tile(Vec2::new(28.0, 20.0)), Some(1));
    assert_eq!(map.get_tile(Vec2::new(-1.0, 4.0)), None);
}

#[test]
fn level_without_collision_layer_leaves_physics_unset() {
    let json = r#"{ "layer": [
        { "name": "background", "data": [[7]], "width": 1, "height": 1, "tilesize": 8 }
    ] }"#;
    let mut world = load(json, 1.0);

    assert!(world.get_resource::<PhysicsWorldRes>().is_none());
    assert!(world.get_resource::<CollisionMap>().is_none());
    assert!(world.get_resource::<CollisionRects>().is_none());

    // The frame schedule tolerates the degraded state.
    let mut schedule = build_schedule();
    schedule.run(&mut world);
}

#[test]
fn reloading_drops_previous_level_physics() {
    let mut world = load(LEVEL_JSON, 1.0);
    assert!(world.get_resource::<PhysicsWorldRes>().is_some());

    let bare = LevelData { layers: Vec::new() };
    load_level(&mut world, &bare, ContactMode::Immediate, 1.0);
    assert!(world.get_resource::<PhysicsWorldRes>().is_none());
    assert!(world.get_resource::<CollisionMap>().is_none());
    assert!(world.get_resource::<CollisionRects>().is_none());
}

#[test]
fn attach_entity_body_centers_on_the_box() {
    let mut world = load(LEVEL_JSON, 0.1);
    let entity = world.spawn_empty().id();
    let position = MapPosition::new(10.0, 20.0);
    let collider = BoxCollider::new(4.0, 6.0);

    let body_ref = attach_entity_body(
        &mut world.resource_mut::<PhysicsWorldRes>().0,
        entity,
        CollisionMasks::new(1, 2),
        &position,
        &collider,
    );

    let physics = &world.resource::<PhysicsWorldRes>().0;
    let body = physics.body(body_ref.0);
    assert_eq!(body.kind, BodyKind::Dynamic);
    assert_eq!(body.entity, Some(entity));
    assert_eq!(body.position, Vec2::new(1.2, 2.3));
    assert_eq!(body.half_extents, Vec2::new(0.2, 0.3));
    assert_eq!(body.masks, CollisionMasks::new(1, 2));
}

// ==================== DEBUG OUTLINE TESTS ====================

#[test]
fn debug_mode_builds_outlines_offset_by_camera() {
    let mut world = load(LEVEL_JSON, 1.0);
    world.insert_resource(DebugMode {});
    world.insert_resource(Camera {
        scroll: Vec2::new(3.0, 1.0),
    });

    let mut schedule = build_schedule();
    schedule.run(&mut world);

    let outlines = &world.resource::<DebugOutlines>().0;
    assert_eq!(outlines.len(), 2);
    assert_eq!(outlines[0].pos, Vec2::new(-3.0, -1.0));
    assert_eq!(outlines[0].size, Vec2::new(16.0, 16.0));
    assert_eq!(outlines[1].pos, Vec2::new(21.0, 15.0));
    assert_eq!(outlines[1].size, Vec2::new(8.0, 8.0));
}

#[test]
fn outlines_clear_when_debug_mode_is_removed() {
    let mut world = load(LEVEL_JSON, 1.0);
    world.insert_resource(DebugMode {});

    let mut schedule = build_schedule();
    schedule.run(&mut world);
    assert_eq!(world.resource::<DebugOutlines>().0.len(), 2);

    world.remove_resource::<DebugMode>();
    schedule.run(&mut world);
    assert!(world.resource::<DebugOutlines>().0.is_empty());
}
