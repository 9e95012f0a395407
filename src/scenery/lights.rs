use bevy::prelude::*;

pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });

    // Key light, angled so the landmark side of the globe reads clearly.
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(12.0, 18.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Cool fill from behind, so the dark limb never goes fully black.
    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            color: Color::srgb(0.7, 0.75, 1.0),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-16.0, -6.0, -12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm accent near the camera's home framing.
    commands.spawn((
        PointLight {
            intensity: 600_000.0,
            range: 60.0,
            color: Color::srgb(1.0, 0.93, 0.85),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 4.0, 10.0),
    ));
}
