pub mod camera;
pub mod cli;
pub mod color;
pub mod control_panel;
pub mod frame;
pub mod geometry;
pub mod lights;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod visualization;

pub use params::{ParameterChange, Parameters};
pub use scene::{MeshElement, MeshKey, MeshResources, Scene};
pub use visualization::Visualization;
