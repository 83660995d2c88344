/*!
# View3D Kernel

Geometric math kernel for configuring and introspecting a 3D rendering
engine from a host application.

All values are immutable `f64` types backed by `glam`. Operations return
new values and report failures through [`view3d::Error`].

## Architecture

- **math**: angles, vectors, points, matrices (column-major), quaternions
- **bounds**: axis-aligned bounding boxes (reorder policy, total merge)
- **camera**: viewport, camera (view/projection matrices), frustum culling
- **upload**: `f32` staging payloads and buffer size estimates
- **version**: graphics API version and GLSL target
- **log**: pluggable logger behind the process-wide `Kernel`
*/

// Internal modules
mod error;
mod kernel;
pub mod log;
pub mod math;
pub mod bounds;
pub mod camera;
pub mod upload;
pub mod version;

// Main view3d namespace module
pub mod view3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Process-wide logging configuration
    pub use crate::kernel::{Kernel, DEFAULT_MIN_SEVERITY};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    pub use crate::bounds::{AxisAlignedBoundingBox, AABB};
    pub use crate::camera::{Camera, Frustum, FrustumTest, Viewport};
    pub use crate::upload::{estimate_size_bytes, ElementType, GpuData, UploadPayload};
    pub use crate::version::Version;
}

// Re-export math library at crate root
pub use glam;
