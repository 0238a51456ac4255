use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::configuration::config::DynamicsConfig;
use crate::simulation::integrator::spring_verlet_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Logical canvas size (pixels); simulation state lives in canvas
/// coordinates with the origin at the top-left and +y pointing down
const CANVAS_WIDTH: f32 = 400.0;
const CANVAS_HEIGHT: f32 = 400.0;

/// Radius of the dot marking the spring anchor
const ANCHOR_RADIUS: f32 = 3.0;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer, dt = {} s, dynamics = {:?}",
        scenario.parameters.dt, scenario.engine.dynamics
    );

    // FixedUpdate fires once per dt of simulated time, which is the
    // fixed-period driver contract the integrator expects
    let dt = scenario.parameters.dt;

    App::new()
        .insert_resource(scenario)
        .insert_resource(Time::<Fixed>::from_seconds(dt))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, draw_system)
        .run();
}

/// Map a point from canvas coordinates (origin top-left, +y down) to Bevy
/// world coordinates (origin centered, +y up)
fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new(
        p.x as f32 - 0.5 * CANVAS_WIDTH,
        0.5 * CANVAS_HEIGHT - p.y as f32,
    )
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // The anchor never moves, so a plain mesh dot is enough; the body and
    // spring line are redrawn from simulation state every frame instead
    let anchor = to_screen(scenario.system.anchor);
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(ANCHOR_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::srgb(0.8, 0.8, 0.8))),
        transform: Transform::from_xyz(anchor.x, anchor.y, 0.0),
        ..Default::default()
    });
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        loads,
        engine,
    } = &mut *scenario;

    let mode: DynamicsConfig = engine.dynamics;

    // Match signature: (system, loads, parameters, mode)
    spring_verlet_step(system, loads, parameters, mode);
}

/// Read-only render pass: the rectangle outline is drawn edge by edge from
/// the four corners, plus the spring line from the anchor to the top-left
/// corner (the spring's attachment point)
fn draw_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let body = &scenario.system.body;

    let tl = to_screen(body.top_left);
    let tr = to_screen(body.top_right);
    let br = to_screen(body.bottom_right);
    let bl = to_screen(body.bottom_left);

    gizmos.line_2d(tl, tr, Color::WHITE);
    gizmos.line_2d(tr, br, Color::WHITE);
    gizmos.line_2d(br, bl, Color::WHITE);
    gizmos.line_2d(bl, tl, Color::WHITE);

    gizmos.line_2d(
        to_screen(scenario.system.anchor),
        tl,
        Color::srgb(0.8, 0.8, 0.8),
    );
}
