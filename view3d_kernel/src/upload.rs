/// Upload staging: kernel values flattened for buffer descriptors.
///
/// Kernel math is `f64`; GPU buffers take `f32`. `GpuData` narrows a value
/// into a flat `f32` run (matrices column by column, quaternions as
/// x, y, z, w), and `UploadPayload` collects a slice of values into one
/// contiguous payload whose bytes can be handed to a buffer as-is.
///
/// Size estimates follow `component_count × element_size × count`.

use crate::kernel_trace;
use crate::math::{
    Matrix2, Matrix3, Matrix4, Point2, Point3, Quaternion, Vector2, Vector3, Vector4,
};

// ===== ELEMENT TYPE =====

/// Scalar type of one component in a GPU buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8,
    U16,
    U32,
    /// Half float
    F16,
    F32,
    F64,
}

impl ElementType {
    /// Size in bytes of one component
    pub fn size_bytes(&self) -> u64 {
        match self {
            ElementType::U8  => 1,
            ElementType::U16 => 2,
            ElementType::U32 => 4,
            ElementType::F16 => 2,
            ElementType::F32 => 4,
            ElementType::F64 => 8,
        }
    }
}

/// Bytes needed for `count` elements of `component_count` components each.
/// Saturates at `u64::MAX` instead of wrapping.
pub fn estimate_size_bytes(component_count: u64, element: ElementType, count: u64) -> u64 {
    component_count
        .saturating_mul(element.size_bytes())
        .saturating_mul(count)
}

// ===== GPU DATA =====

/// A kernel value that can be written into an `f32` GPU payload
pub trait GpuData {
    /// Number of `f32` values written per item
    const COMPONENTS: usize;

    /// Append exactly `COMPONENTS` values to `out`
    fn write_f32(&self, out: &mut Vec<f32>);
}

macro_rules! impl_gpu_data {
    ($name:ident, $components:expr, $flatten:ident) => {
        impl GpuData for $name {
            const COMPONENTS: usize = $components;

            fn write_f32(&self, out: &mut Vec<f32>) {
                out.extend(self.$flatten().iter().map(|v| *v as f32));
            }
        }
    };
}

impl_gpu_data!(Vector2, 2, to_array);
impl_gpu_data!(Vector3, 3, to_array);
impl_gpu_data!(Vector4, 4, to_array);
impl_gpu_data!(Point2, 2, to_array);
impl_gpu_data!(Point3, 3, to_array);
impl_gpu_data!(Quaternion, 4, to_array);
impl_gpu_data!(Matrix2, 4, to_cols_array);
impl_gpu_data!(Matrix3, 9, to_cols_array);
impl_gpu_data!(Matrix4, 16, to_cols_array);

// ===== UPLOAD PAYLOAD =====

/// Contiguous `f32` payload staged for a buffer upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPayload {
    values: Vec<f32>,
    component_count: usize,
    count: usize,
}

impl UploadPayload {
    /// Flatten `items` in order
    pub fn from_items<T: GpuData>(items: &[T]) -> Self {
        let mut values = Vec::with_capacity(T::COMPONENTS * items.len());
        for item in items {
            item.write_f32(&mut values);
        }

        let payload = Self {
            values,
            component_count: T::COMPONENTS,
            count: items.len(),
        };
        kernel_trace!(
            "view3d::UploadPayload",
            "staged {} items x {} components ({} bytes)",
            payload.count, payload.component_count, payload.size_bytes()
        );
        payload
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Raw bytes in native endianness, ready for a buffer write
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    /// Components per item
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Always `ElementType::F32`
    pub fn element_type(&self) -> ElementType {
        ElementType::F32
    }

    pub fn size_bytes(&self) -> u64 {
        estimate_size_bytes(self.component_count as u64, self.element_type(), self.count as u64)
    }
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
