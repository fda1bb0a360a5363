pub mod camera;
pub mod geometry;
pub mod math;
pub mod renderer;
pub mod shading;
pub mod svm;
