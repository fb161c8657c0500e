/// Uniform block for `holo.wgsl`. Two `vec2<f32>` fields, 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HoloUniforms {
    pub tilt: [f32; 2],
    pub resolution: [f32; 2],
}

impl HoloUniforms {
    pub fn new(tilt: [f32; 2], width: u32, height: u32) -> Self {
        Self {
            tilt: [tilt[0].clamp(0.0, 1.0), tilt[1].clamp(0.0, 1.0)],
            resolution: [width.max(1) as f32, height.max(1) as f32],
        }
    }
}
