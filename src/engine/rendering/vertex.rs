use crate::shape::Color;
use nalgebra::{Point2, Vector2, Vector4};
use static_assertions::const_assert_eq;
use wgpu::{BufferAddress, VertexAttribute, VertexFormat};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex2D {
    pub position: Vector2<f32>,
    pub color: Vector4<f32>,
}

impl Vertex2D {
    pub fn new(position: Point2<f32>, color: Color) -> Self {
        Vertex2D {
            position: position.coords,
            color: Vector4::from(color.to_f32_array()),
        }
    }

    pub const fn continuous_descriptor<'a>() -> wgpu::VertexBufferLayout<'a> {
        use crate::utils::sizes::*;

        const LAYOUT: wgpu::VertexBufferLayout = wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex2D>() as BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    format: VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                VertexAttribute {
                    format: VertexFormat::Float32x4,
                    offset: VEC2_SIZE as BufferAddress,
                    shader_location: 1,
                },
            ],
        };

        const_assert_eq!(size_of::<Vertex2D>(), vertex_layout_size(&LAYOUT));
        const_assert_eq!(VEC2_SIZE + VEC4_SIZE, WGPU_VEC2_SIZE + WGPU_VEC4_SIZE);

        LAYOUT
    }
}
