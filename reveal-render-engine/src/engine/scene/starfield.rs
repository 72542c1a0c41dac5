use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::starfield::{DEFAULT_STAR_BLUR, DEFAULT_STAR_SIZE, DEFAULT_STAR_SPREAD, STAR_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::render_settings::{
    DEFAULT_STAR_COLOUR_PRIMARY, DEFAULT_STAR_COLOUR_SECONDARY,
};
use crate::engine::mesh::star_mesh::{create_star_mesh, write_star_positions, write_star_sizes};
use crate::engine::shaders::{StarFieldMaterial, StarFieldUniform};
use crate::engine::systems::viewport::PixelRatio;

/// Random source for star placement. Tests seed it for repeatable fields.
#[derive(Resource)]
pub struct StarRng(pub StdRng);

impl Default for StarRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Host copy of the star attributes.
#[derive(Resource, Debug, Clone)]
pub struct StarField {
    positions: Vec<[f32; 3]>,
    sizes: Vec<f32>,
    spread: f32,
    size_scale: f32,
    positions_dirty: bool,
    sizes_dirty: bool,
}

impl StarField {
    pub fn generate(count: usize, spread: f32, size_scale: f32, rng: &mut impl Rng) -> Self {
        let positions = (0..count).map(|_| random_position(spread, rng)).collect();
        let sizes = (0..count).map(|_| rng.r#gen::<f32>() * size_scale).collect();

        Self {
            positions,
            sizes,
            spread,
            size_scale,
            positions_dirty: false,
            sizes_dirty: false,
        }
    }

    pub fn with_defaults(rng: &mut impl Rng) -> Self {
        Self::generate(STAR_COUNT, DEFAULT_STAR_SPREAD, DEFAULT_STAR_SIZE, rng)
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn size_scale(&self) -> f32 {
        self.size_scale
    }

    /// Re-scatter every star across a new cube. Sizes are untouched.
    pub fn set_spread(&mut self, spread: f32, rng: &mut impl Rng) {
        self.spread = spread;
        for position in &mut self.positions {
            *position = random_position(spread, rng);
        }
        self.positions_dirty = true;
    }

    /// Re-roll every star size. Positions are untouched.
    pub fn set_size_scale(&mut self, size_scale: f32, rng: &mut impl Rng) {
        self.size_scale = size_scale;
        for size in &mut self.sizes {
            *size = rng.r#gen::<f32>() * size_scale;
        }
        self.sizes_dirty = true;
    }

    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::take(&mut self.positions_dirty)
    }

    pub fn take_sizes_dirty(&mut self) -> bool {
        std::mem::take(&mut self.sizes_dirty)
    }
}

fn random_position(spread: f32, rng: &mut impl Rng) -> [f32; 3] {
    [
        (rng.r#gen::<f32>() - 0.5) * spread,
        (rng.r#gen::<f32>() - 0.5) * spread,
        (rng.r#gen::<f32>() - 0.5) * spread,
    ]
}

/// Star colours and blur from the parameter panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct StarFieldSettings {
    pub colour_primary: Color,
    pub colour_secondary: Color,
    pub blur_strength: f32,
}

impl Default for StarFieldSettings {
    fn default() -> Self {
        Self {
            colour_primary: DEFAULT_STAR_COLOUR_PRIMARY,
            colour_secondary: DEFAULT_STAR_COLOUR_SECONDARY,
            blur_strength: DEFAULT_STAR_BLUR,
        }
    }
}

impl StarFieldSettings {
    pub fn uniforms(&self, pixel_ratio: f32) -> StarFieldUniform {
        StarFieldUniform {
            colour_primary: self.colour_primary.into(),
            colour_secondary: self.colour_secondary.into(),
            blur_strength: self.blur_strength,
            pixel_ratio,
            ..default()
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct StarFieldHandles {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StarFieldMaterial>,
}

pub fn spawn_star_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StarFieldMaterial>>,
    field: Res<StarField>,
    settings: Res<StarFieldSettings>,
    pixel_ratio: Res<PixelRatio>,
) {
    let mesh = meshes.add(create_star_mesh(field.positions(), field.sizes()));
    let material = materials.add(StarFieldMaterial {
        uniforms: settings.uniforms(pixel_ratio.0),
    });

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material.clone()),
        Transform::default(),
        Visibility::Visible,
        // Quads are expanded in the vertex stage, outside the mesh bounds.
        NoFrustumCulling,
    ));
    commands.insert_resource(StarFieldHandles { mesh, material });

    info!(
        "Star field spawned: {} stars across {:.1} units",
        field.positions().len(),
        field.spread()
    );
}

/// Write regenerated star attributes into the existing mesh buffers.
pub fn upload_star_field(
    mut field: ResMut<StarField>,
    handles: Option<Res<StarFieldHandles>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(handles) = handles else {
        return;
    };
    if !field.positions_dirty && !field.sizes_dirty {
        return;
    }
    let Some(mesh) = meshes.get_mut(&handles.mesh) else {
        return;
    };

    if field.take_positions_dirty() {
        write_star_positions(mesh, field.positions());
    }
    if field.take_sizes_dirty() {
        write_star_sizes(mesh, field.sizes());
    }
}

pub fn apply_star_appearance(
    settings: Res<StarFieldSettings>,
    pixel_ratio: Res<PixelRatio>,
    handles: Option<Res<StarFieldHandles>>,
    mut materials: ResMut<Assets<StarFieldMaterial>>,
) {
    let Some(handles) = handles else {
        return;
    };
    if !settings.is_changed() && !pixel_ratio.is_changed() && !handles.is_added() {
        return;
    }

    if let Some(material) = materials.get_mut(&handles.material) {
        material.uniforms = settings.uniforms(pixel_ratio.0);
    }
}

#[cfg(test)]
mod tests {
    use bevy::render::mesh::VertexAttributeValues;

    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn stars_fill_the_spread_cube() {
        let field = StarField::with_defaults(&mut seeded(7));

        assert_eq!(field.positions().len(), STAR_COUNT);
        assert_eq!(field.sizes().len(), STAR_COUNT);
        let half = DEFAULT_STAR_SPREAD * 0.5;
        assert!(field.positions().iter().flatten().all(|c| c.abs() <= half));
        assert!(field.sizes().iter().all(|s| (0.0..DEFAULT_STAR_SIZE).contains(s)));
    }

    #[test]
    fn same_seed_same_field() {
        let a = StarField::generate(64, 10.0, 1.0, &mut seeded(3));
        let b = StarField::generate(64, 10.0, 1.0, &mut seeded(3));

        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.sizes(), b.sizes());
    }

    #[test]
    fn spread_change_only_touches_positions() {
        let mut rng = seeded(11);
        let mut field = StarField::generate(100, 20.0, 0.5, &mut rng);
        let sizes = field.sizes().to_vec();
        let positions = field.positions().to_vec();

        field.set_spread(50.0, &mut rng);

        assert_eq!(field.sizes(), sizes.as_slice());
        assert_ne!(field.positions(), positions.as_slice());
        assert_eq!(field.positions().len(), 100);
        assert!(field.positions().iter().flatten().all(|c| c.abs() <= 25.0));
        assert!(field.take_positions_dirty());
        assert!(!field.take_positions_dirty());
        assert!(!field.take_sizes_dirty());
    }

    #[test]
    fn size_change_only_touches_sizes() {
        let mut rng = seeded(5);
        let mut field = StarField::generate(100, 20.0, 0.1, &mut rng);
        let positions = field.positions().to_vec();

        field.set_size_scale(5.0, &mut rng);

        assert_eq!(field.positions(), positions.as_slice());
        assert!(field.sizes().iter().all(|s| (0.0..5.0).contains(s)));
        assert!(field.take_sizes_dirty());
        assert!(!field.take_positions_dirty());
    }

    #[test]
    fn dirty_stars_are_written_in_place() {
        let mut rng = seeded(1);
        let field = StarField::generate(4, 20.0, 0.1, &mut rng);

        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StarFieldMaterial>>()
            .init_resource::<StarFieldSettings>()
            .init_resource::<PixelRatio>()
            .insert_resource(field)
            .add_systems(Startup, spawn_star_field)
            .add_systems(Update, upload_star_field);
        app.update();

        app.world_mut()
            .resource_mut::<StarField>()
            .set_spread(40.0, &mut rng);
        app.update();

        let expected = app.world().resource::<StarField>().positions()[2];
        let handle = app.world().resource::<StarFieldHandles>().mesh.clone();
        let meshes = app.world().resource::<Assets<Mesh>>();
        let mesh = meshes.get(&handle).unwrap();
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        assert_eq!(positions.len(), 24);
        assert_eq!(positions[12], expected);
    }
}
