use crate::core::HoloUniforms;
use crate::render::RenderError;

pub(crate) struct HoloResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

/// Compile `holo.wgsl` and collect the compiler log if it fails.
async fn compile_shader(device: &wgpu::Device) -> Result<wgpu::ShaderModule, RenderError> {
    let label = "holo_shader";
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(crate::core::HOLO_WGSL.into()),
    });
    let scope_error = device.pop_error_scope().await;

    let info = shader.get_compilation_info().await;
    let mut log: Vec<String> = info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
        .map(|m| match &m.location {
            Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, m.message),
            None => m.message.clone(),
        })
        .collect();
    if let Some(e) = scope_error {
        log.push(e.to_string());
    }
    if log.is_empty() {
        Ok(shader)
    } else {
        Err(RenderError::ShaderCompile {
            label,
            log: log.join("\n"),
        })
    }
}

pub(crate) async fn create_holo_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> Result<HoloResources, RenderError> {
    let shader = compile_shader(device).await?;
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("holo_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("holo_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("holo_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_holo"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    if let Some(e) = device.pop_error_scope().await {
        return Err(RenderError::PipelineLink {
            label: "holo_pipeline",
            log: e.to_string(),
        });
    }

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("holo_uniforms"),
        size: std::mem::size_of::<HoloUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("holo_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    Ok(HoloResources {
        pipeline,
        uniform_buffer,
        bind_group,
    })
}
