/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Per-panel uniform buffer data for GPU
///
/// Layout matches `PanelUniforms` in `panel.wgsl` (32 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelUniform {
    pub resolution: [f32; 2],
    pub offset_x: f32,
    pub hue_rotation: f32, // Degrees
    pub progress: f32,
    pub slide_index: u32,
    pub _pad: [f32; 2],
}

/// Panel quad vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Quad of `width` x `height` centered on the origin in the z = 0 plane
pub fn panel_quad(width: f32, height: f32) -> ([Vertex; 4], [u16; 6]) {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let vertices = [
        Vertex { position: [-hw, -hh, 0.0], uv: [0.0, 1.0] },
        Vertex { position: [hw, -hh, 0.0], uv: [1.0, 1.0] },
        Vertex { position: [hw, hh, 0.0], uv: [1.0, 0.0] },
        Vertex { position: [-hw, hh, 0.0], uv: [0.0, 0.0] },
    ];
    (vertices, [0, 1, 2, 0, 2, 3])
}
