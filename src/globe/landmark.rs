use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::prelude::*;

use super::coords;
use crate::asset_loader::SceneAssets;
use crate::traits::TransformExt;
use crate::ui::OpenSection;

/// Radius of the globe surface that landmarks sit on.
pub const GLOBE_RADIUS: f32 = 2.2;

/// Accent color shared by rings, the typed name, and hover glow.
pub const ACCENT: Color = Color::srgb(0.494, 0.545, 0.961);

const RING_BASE_EMISSIVE: LinearRgba = LinearRgba::new(0.494, 0.545, 0.961, 1.0);
const HOVER_EMISSIVE_BOOST: f32 = 2.4;

/// Content section a landmark (or nav entry) opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Section {
    About,
    Experience,
    Projects,
    Hobbies,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::About, Self::Experience, Self::Projects, Self::Hobbies];

    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Hobbies => "Hobbies",
        }
    }
}

/// Torus decoration under a landmark.
pub struct RingStyle {
    pub radius:             f32,
    pub tube_radius:        f32,
    pub y_offset:           f32,
    pub emissive_intensity: f32,
    pub opacity:            f32,
    pub roughness:          f32,
    pub metalness:          f32,
}

/// Static landmark configuration. Defined once at startup, never created or
/// destroyed at runtime; world position and orientation are derived from
/// lat/lon via [`coords`] at spawn.
pub struct LandmarkSpec {
    pub lat:                f32,
    pub lon:                f32,
    pub section:            Section,
    pub scale:              f32,
    pub height_offset:      f32,
    /// Euler XYZ override; `None` means stand upright on the surface.
    pub custom_orientation: Option<[f32; 3]>,
    pub ring:               RingStyle,
    /// Spotlight prop carries its own point light.
    pub lit:                bool,
    /// Whether the nav fly-to may target this landmark. Hobby props open
    /// their section on click but are never flown to.
    pub nav_target:         bool,
}

const fn ring(radius: f32, tube_radius: f32, y_offset: f32, emissive_intensity: f32) -> RingStyle {
    RingStyle {
        radius,
        tube_radius,
        y_offset,
        emissive_intensity,
        opacity: 0.82,
        roughness: 0.35,
        metalness: 0.45,
    }
}

/// The landmark table. About/Experience/Projects each have a dedicated
/// model; the remaining props are hobby mementos that all open the Hobbies
/// section when clicked, while the Hobbies nav entry itself has no landmark
/// to fly to.
pub const LANDMARKS: &[LandmarkSpec] = &[
    LandmarkSpec {
        lat: 137.7128,
        lon: -103.0060,
        section: Section::About,
        scale: 0.8,
        height_offset: -0.067,
        custom_orientation: Some([-0.65, 4.0, -0.06]),
        ring: ring(0.7, 0.08, -0.2, 0.6),
        lit: false,
        nav_target: true,
    },
    LandmarkSpec {
        lat: 40.5074,
        lon: -10.1278,
        section: Section::Experience,
        scale: 0.15,
        height_offset: -0.1,
        custom_orientation: Some([1.0, -0.7, 1.0]),
        ring: ring(0.55, 0.06, -0.15, 0.8),
        lit: false,
        nav_target: true,
    },
    LandmarkSpec {
        lat: 52.7749,
        lon: -105.4194,
        section: Section::Projects,
        scale: 0.3,
        height_offset: -0.1,
        custom_orientation: Some([0.6, 0.0, -0.12]),
        ring: ring(0.8, 0.12, -0.25, 1.0),
        lit: false,
        nav_target: true,
    },
    LandmarkSpec {
        lat: 85.8182,
        lon: 130.2275,
        section: Section::Hobbies,
        scale: 0.45,
        height_offset: -0.2,
        custom_orientation: Some([-0.3, 0.0, 0.0]),
        ring: ring(0.3, 0.07, -0.1, 0.5),
        lit: false,
        nav_target: false,
    },
    LandmarkSpec {
        lat: -32.6762,
        lon: -145.6503,
        section: Section::Hobbies,
        scale: 1.0,
        height_offset: 0.35,
        custom_orientation: Some([-0.8, 0.0, 0.9]),
        ring: ring(0.75, 0.1, -0.22, 0.7),
        lit: false,
        nav_target: false,
    },
    LandmarkSpec {
        lat: 5.8688,
        lon: -105.2093,
        section: Section::Hobbies,
        scale: 0.025,
        height_offset: 0.0,
        custom_orientation: Some([1.3, 0.0, -0.3]),
        ring: ring(0.45, 0.05, -0.12, 0.9),
        lit: false,
        nav_target: false,
    },
    LandmarkSpec {
        lat: 15.7488,
        lon: -48.9857,
        section: Section::Hobbies,
        scale: 0.035,
        height_offset: 0.0,
        custom_orientation: Some([0.7, 0.5, 0.7]),
        ring: ring(0.5, 0.08, -0.4, 0.4),
        lit: false,
        nav_target: false,
    },
    LandmarkSpec {
        lat: -20.7558,
        lon: 55.6173,
        section: Section::Hobbies,
        scale: 0.7,
        height_offset: 0.2,
        custom_orientation: Some([-1.5, -0.5, 0.7]),
        ring: ring(0.85, 0.11, -0.18, 0.6),
        lit: false,
        nav_target: false,
    },
    LandmarkSpec {
        lat: -10.8566,
        lon: -25.3522,
        section: Section::Hobbies,
        scale: 0.2,
        height_offset: 0.4,
        custom_orientation: Some([1.3, 0.6, 0.6]),
        ring: ring(0.6, 0.09, -0.16, 1.1),
        lit: true,
        nav_target: false,
    },
];

/// Index into [`LANDMARKS`] for the model handle each entry uses.
fn model_handle(assets: &SceneAssets, index: usize) -> Handle<Scene> {
    match index {
        0 => assets.house.clone(),
        1 => assets.briefcase.clone(),
        2 => assets.laptop.clone(),
        3 => assets.skis.clone(),
        4 => assets.camera_prop.clone(),
        5 => assets.controller.clone(),
        6 => assets.skyscraper.clone(),
        7 => assets.headphones.clone(),
        _ => assets.spotlight.clone(),
    }
}

#[derive(Component)]
pub struct Landmark {
    pub section: Section,
}

/// Marks a landmark the nav fly-to may target. Hobby props carry a
/// [`Landmark`] but not this, so the Hobbies nav entry has nothing to fly
/// to and opens its modal directly.
#[derive(Component)]
pub struct NavTarget;

/// Hover flag. The render side restyles the ring from this instead of
/// cloning the model subtree for a highlight copy.
#[derive(Component, Default)]
pub struct Highlighted(pub bool);

#[derive(Component)]
pub(crate) struct LandmarkRing {
    material: Handle<StandardMaterial>,
    base_emissive_intensity: f32,
}

/// World position of the section's fly-to target, if it has one. Sections
/// with no [`NavTarget`] landmark yield `None` and the camera fly-to falls
/// back to opening the modal directly.
pub fn landmark_position(
    section: Section,
    landmarks: &Query<(&Landmark, &Transform), With<NavTarget>>,
) -> Option<Vec3> {
    landmarks
        .iter()
        .find(|(landmark, _)| landmark.section == section)
        .map(|(_, transform)| transform.translation)
}

pub fn spawn_landmarks(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (index, spec) in LANDMARKS.iter().enumerate() {
        let position =
            coords::position_on_sphere(spec.lat, spec.lon, GLOBE_RADIUS, spec.height_offset);
        let euler = spec
            .custom_orientation
            .map_or_else(|| coords::surface_orientation(spec.lat, spec.lon), Vec3::from_array);
        let rotation = Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);

        let ring_material = materials.add(StandardMaterial {
            base_color: ACCENT.with_alpha(spec.ring.opacity),
            emissive: RING_BASE_EMISSIVE * spec.ring.emissive_intensity,
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: spec.ring.roughness,
            metallic: spec.ring.metalness,
            ..default()
        });
        let ring_mesh = meshes.add(Torus::new(
            spec.ring.radius - spec.ring.tube_radius,
            spec.ring.radius + spec.ring.tube_radius,
        ));

        let root = commands
            .spawn((
                Landmark {
                    section: spec.section,
                },
                Highlighted(false),
                LandmarkRing {
                    material: ring_material.clone(),
                    base_emissive_intensity: spec.ring.emissive_intensity,
                },
                Transform::from_trs(position, rotation, Vec3::ONE),
                Visibility::default(),
            ))
            .id();

        let model = commands
            .spawn((
                SceneRoot(model_handle(&assets, index)),
                Transform::from_scale(Vec3::splat(spec.scale)),
            ))
            .id();

        let ring = commands
            .spawn((
                Mesh3d(ring_mesh),
                MeshMaterial3d(ring_material),
                Transform::from_translation(Vec3::new(0.0, spec.ring.y_offset, 0.0)),
            ))
            .id();

        commands.entity(root).add_children(&[model, ring]);

        if spec.nav_target {
            commands.entity(root).insert(NavTarget);
        }

        if spec.lit {
            let light = commands
                .spawn((
                    PointLight {
                        color: Color::srgb(1.0, 0.878, 0.4),
                        intensity: 40_000.0,
                        range: 3.5,
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.5, 0.0),
                ))
                .id();
            commands.entity(root).add_children(&[light]);
        }

        let section = spec.section;
        commands
            .entity(root)
            .observe(move |_: On<Pointer<Over>>, mut flags: Query<&mut Highlighted>| {
                if let Ok(mut flag) = flags.get_mut(root) {
                    flag.0 = true;
                }
            })
            .observe(move |_: On<Pointer<Out>>, mut flags: Query<&mut Highlighted>| {
                if let Ok(mut flag) = flags.get_mut(root) {
                    flag.0 = false;
                }
            })
            .observe(
                move |_: On<Pointer<Click>>, mut open: MessageWriter<OpenSection>| {
                    open.write(OpenSection(section));
                },
            );
    }
}

/// Applies the hover flag: brightens the ring's emissive while highlighted,
/// restores the base intensity after.
pub fn restyle_highlighted_rings(
    landmarks: Query<(&Highlighted, &LandmarkRing), Changed<Highlighted>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (highlighted, ring) in &landmarks {
        let Some(material) = materials.get_mut(&ring.material) else {
            continue;
        };
        let intensity = if highlighted.0 {
            ring.base_emissive_intensity * HOVER_EMISSIVE_BOOST
        } else {
            ring.base_emissive_intensity
        };
        material.emissive = RING_BASE_EMISSIVE * intensity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_world_distance_matches_radius_plus_offset() {
        for spec in LANDMARKS {
            let p = coords::position_on_sphere(spec.lat, spec.lon, GLOBE_RADIUS, spec.height_offset);
            let expected = GLOBE_RADIUS + spec.height_offset;
            assert!(
                (p.length() - expected).abs() < 1e-4,
                "landmark for {:?}: |p| = {}, expected {expected}",
                spec.section,
                p.length()
            );
        }
    }

    fn spawn_table(world: &mut World) {
        for spec in LANDMARKS {
            let position =
                coords::position_on_sphere(spec.lat, spec.lon, GLOBE_RADIUS, spec.height_offset);
            let mut entity = world.spawn((
                Landmark {
                    section: spec.section,
                },
                Transform::from_translation(position),
            ));
            if spec.nav_target {
                entity.insert(NavTarget);
            }
        }
    }

    #[test]
    fn nav_lookup_finds_primary_sections_but_not_hobbies() {
        use bevy::ecs::system::SystemState;

        let mut world = World::new();
        spawn_table(&mut world);

        let mut state: SystemState<Query<(&Landmark, &Transform), With<NavTarget>>> =
            SystemState::new(&mut world);
        let landmarks = state.get(&world);

        for section in [Section::About, Section::Experience, Section::Projects] {
            let position = landmark_position(section, &landmarks);
            assert!(position.is_some(), "{section:?} has no fly-to target");
        }
        // Hobby props exist in the world but none is a nav target, so the
        // fly-to falls back to opening the modal directly.
        assert_eq!(landmark_position(Section::Hobbies, &landmarks), None);
    }

    #[test]
    fn hobby_props_are_never_nav_targets() {
        for spec in LANDMARKS {
            assert_eq!(
                spec.nav_target,
                spec.section != Section::Hobbies,
                "{:?} at ({}, {})",
                spec.section,
                spec.lat,
                spec.lon
            );
        }
    }

    #[test]
    fn primary_sections_each_have_one_landmark() {
        for section in [Section::About, Section::Experience, Section::Projects] {
            let count = LANDMARKS.iter().filter(|l| l.section == section).count();
            assert_eq!(count, 1, "{section:?}");
        }
    }
}
