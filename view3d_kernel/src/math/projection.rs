/// Clip-space conventions for view and projection matrices.
///
/// Different backends disagree on two things: which way the camera looks
/// in view space and where the depth range lands after projection. Both
/// are fixed per backend, so they travel together in `ProjectionConfig`.

/// Coordinate system handedness of view space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handedness {
    /// Camera looks down -Z (OpenGL, Vulkan conventions)
    #[default]
    Right,
    /// Camera looks down +Z (Direct3D convention)
    Left,
}

/// Depth range of normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthRange {
    /// z in [0, 1] (Vulkan, Direct3D, Metal)
    #[default]
    ZeroToOne,
    /// z in [-1, 1] (OpenGL)
    NegativeOneToOne,
}

/// Handedness and depth range used to build projection matrices and
/// extract frustum planes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProjectionConfig {
    pub handedness: Handedness,
    pub depth_range: DepthRange,
}

impl ProjectionConfig {
    pub const fn new(handedness: Handedness, depth_range: DepthRange) -> Self {
        Self { handedness, depth_range }
    }

    /// Right-handed, depth 0..1
    pub const fn vulkan() -> Self {
        Self::new(Handedness::Right, DepthRange::ZeroToOne)
    }

    /// Right-handed, depth -1..1
    pub const fn opengl() -> Self {
        Self::new(Handedness::Right, DepthRange::NegativeOneToOne)
    }

    /// Left-handed, depth 0..1
    pub const fn direct3d() -> Self {
        Self::new(Handedness::Left, DepthRange::ZeroToOne)
    }
}
