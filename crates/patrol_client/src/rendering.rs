use bevy::prelude::*;
use patrol_simulation::{draw_patrol_route, log_info, PatrolDebugDraw, PatrolRoute, Waypoint};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PatrolGizmosEnabled>()
            .add_systems(Update, (
                spawn_visuals_for_new_patrollers,
                toggle_patrol_gizmos,
                draw_patrol_gizmos.run_if(|enabled: Res<PatrolGizmosEnabled>| enabled.0),
            ).chain());
    }
}

/// Marker: patrol entity needs visual representation (capsule mesh)
#[derive(Component)]
pub struct NeedsVisual;

/// Debug layer toggle (F3), по умолчанию включен
#[derive(Resource)]
pub struct PatrolGizmosEnabled(pub bool);

impl Default for PatrolGizmosEnabled {
    fn default() -> Self {
        Self(true)
    }
}

/// PatrolDebugDraw поверх Bevy Gizmos: waypoints зелёные, маршрут синий
struct GizmoDraw<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
}

impl PatrolDebugDraw for GizmoDraw<'_, '_, '_> {
    fn waypoint(&mut self, position: Vec3, radius: f32) {
        self.gizmos.sphere(
            bevy::math::Isometry3d::from_translation(position),
            radius,
            Color::srgb(0.1, 0.9, 0.1),
        );
    }

    fn route_segment(&mut self, from: Vec3, to: Vec3) {
        self.gizmos.line(from, to, Color::srgb(0.1, 0.3, 0.9));
    }
}

/// Рисуем все маршруты (despawned waypoint → None, пропускается)
fn draw_patrol_gizmos(
    mut gizmos: Gizmos,
    routes: Query<&PatrolRoute>,
    waypoints: Query<&Transform, With<Waypoint>>,
) {
    let mut draw = GizmoDraw { gizmos: &mut gizmos };

    for route in routes.iter() {
        let positions: Vec<Option<Vec3>> = route
            .waypoints
            .iter()
            .map(|waypoint| waypoints.get(*waypoint).ok().map(|t| t.translation))
            .collect();

        draw_patrol_route(&positions, &mut draw);
    }
}

fn toggle_patrol_gizmos(
    keys: Res<ButtonInput<KeyCode>>,
    mut enabled: ResMut<PatrolGizmosEnabled>,
) {
    if keys.just_pressed(KeyCode::F3) {
        enabled.0 = !enabled.0;

        let status = if enabled.0 { "shown" } else { "hidden" };
        log_info(&format!("🐛 Patrol gizmos {} (F3)", status));
    }
}

/// Spawn visual child (capsule) для новых патрульных
///
/// Child наследует Transform патрульного через hierarchy, sync не нужен.
fn spawn_visuals_for_new_patrollers(
    mut commands: Commands,
    query: Query<Entity, With<NeedsVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in query.iter() {
        let body = commands.spawn((
            Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.6, 0.2),
                ..default()
            })),
            Transform::default(),
        )).id();

        // Нос: показывает forward (-Z), видно как NPC поворачивает к waypoint'у
        let nose = commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(0.15, 0.15, 0.4))),
            MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.2))),
            Transform::from_xyz(0.0, 0.4, -0.45),
        )).id();

        commands.entity(entity)
            .remove::<NeedsVisual>()
            .add_children(&[body, nose]);
    }
}
