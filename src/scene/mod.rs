pub mod animation;
pub mod camera;
pub mod geometry;
pub mod graph;
pub mod light;
pub mod palette;

pub use animation::{AnimationKind, Animator};
pub use camera::{OrbitController, PerspectiveCamera};
pub use geometry::{GeometryKind, MeshData};
pub use graph::{MeshNode, Scene};
pub use light::{AmbientLight, DirectionalLight, ShadowSettings};
pub use palette::{Material, MaterialPalette};
