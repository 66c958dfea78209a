//! GPU side of the sandbox.
//!
//! The [`Renderer`] owns the wgpu [`State`], a single colored-triangle
//! pipeline and the [`DrawList`] the environment is rendered into. Each frame
//! the draw list is refilled, uploaded as one vertex buffer and presented.

use super::error::*;
use crate::rendering::draw_list::DrawList;
use crate::rendering::shaders::SHAPE_2D_SHADER;
use crate::rendering::target::RenderTarget;
use crate::rendering::vertex::Vertex2D;
use crate::rendering::State;
use crate::sandbox::Sandbox;
use crate::shape::Color;
use log::{error, trace, warn};
use nalgebra::Vector2;
use snafu::ResultExt;
use static_assertions::const_assert_eq;
use std::sync::Arc;
use wgpu::util::{BufferInitDescriptor, DeviceExt};
use wgpu::*;
use winit::dpi::PhysicalSize;
use winit::window::Window;

#[repr(C)]
#[derive(Default, Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniform {
    size: Vector2<f32>,
    _padding: Vector2<f32>,
}

// uniform buffers are laid out in 16 byte rows
const_assert_eq!(size_of::<ScreenUniform>() % 16, 0);

pub struct Renderer {
    pub state: State,
    window: Arc<Window>,
    pipeline: RenderPipeline,
    screen_buffer: Buffer,
    screen_bind_group: BindGroup,
    draw_list: DrawList,
    clear_color: Color,
    printed_errors: u32,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, clear_color: Color) -> Result<Self> {
        let state = State::new(window.clone()).await.context(StateErr)?;

        let screen_bgl = state
            .device
            .create_bind_group_layout(&BindGroupLayoutDescriptor {
                label: Some("Screen Bind Group Layout"),
                entries: &[BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::VERTEX,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let screen_buffer = state.device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Screen Uniform Buffer"),
            contents: bytemuck::bytes_of(&ScreenUniform::default()),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        let screen_bind_group = state.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &screen_bgl,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let pipeline = Self::create_pipeline(&state, &screen_bgl);

        Ok(Renderer {
            state,
            window,
            pipeline,
            screen_buffer,
            screen_bind_group,
            draw_list: DrawList::new(),
            clear_color,
            printed_errors: 0,
        })
    }

    fn create_pipeline(state: &State, screen_bgl: &BindGroupLayout) -> RenderPipeline {
        let module = state.device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Shape 2D Shader"),
            source: ShaderSource::Wgsl(SHAPE_2D_SHADER.into()),
        });

        let layout = state
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some("Shape 2D Pipeline Layout"),
                bind_group_layouts: &[screen_bgl],
                push_constant_ranges: &[],
            });

        const BUFFERS: [VertexBufferLayout; 1] = [Vertex2D::continuous_descriptor()];

        state
            .device
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some("Shape 2D Pipeline"),
                layout: Some(&layout),
                vertex: VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    compilation_options: PipelineCompilationOptions::default(),
                    buffers: &BUFFERS,
                },
                primitive: PrimitiveState {
                    // the axis flip turns winding around, so draw both sides
                    cull_mode: None,
                    ..PrimitiveState::default()
                },
                depth_stencil: None,
                multisample: MultisampleState::default(),
                fragment: Some(FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    compilation_options: PipelineCompilationOptions::default(),
                    targets: &[Some(ColorTargetState {
                        format: state.config.format,
                        blend: Some(BlendState::ALPHA_BLENDING),
                        write_mask: ColorWrites::ALL,
                    })],
                }),
                multiview: None,
                cache: None,
            })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.state.resize(new_size);
    }

    /// Synchronizes, draws and presents the sandbox. Returns `false` when
    /// rendering can't continue.
    pub fn render_sandbox(&mut self, sandbox: &mut Sandbox) -> bool {
        let size = self.state.size;
        if size.width == 0 || size.height == 0 {
            self.window.request_redraw();
            return true;
        }

        self.draw_list.clear();
        sandbox
            .environment
            .render(&mut self.draw_list, size.width, size.height);
        if let Some(overlay) = &sandbox.overlay {
            self.draw_list.draw(overlay);
        }

        let keep_running = match self.present() {
            Ok(()) => {
                self.printed_errors = 0;
                true
            }
            Err(RenderError::Surface {
                source: SurfaceError::Lost | SurfaceError::Outdated,
            }) => {
                self.state.recreate_surface();
                true // drop frame but don't cancel
            }
            Err(RenderError::Surface {
                source: SurfaceError::Timeout,
            }) => {
                warn!("Timed out waiting for the next surface texture");
                true
            }
            Err(RenderError::Surface {
                source: SurfaceError::OutOfMemory,
            }) => {
                error!("The application ran out of GPU memory!");
                false
            }
            Err(e) => {
                if self.printed_errors < 5 {
                    self.printed_errors += 1;
                    error!("{e}");
                }
                true
            }
        };

        if keep_running {
            self.window.request_redraw();
        }
        keep_running
    }

    fn present(&mut self) -> Result<()> {
        let mut output = self.state.surface.get_current_texture().context(SurfaceErr)?;
        if output.suboptimal {
            drop(output);
            self.state.recreate_surface();
            output = self.state.surface.get_current_texture().context(SurfaceErr)?;
        }

        let view = output.texture.create_view(&TextureViewDescriptor::default());

        let screen = ScreenUniform {
            size: self.draw_list.view_size(),
            _padding: Vector2::zeros(),
        };
        self.state
            .queue
            .write_buffer(&self.screen_buffer, 0, bytemuck::bytes_of(&screen));

        let vertex_buffer = (!self.draw_list.is_empty()).then(|| {
            self.state.device.create_buffer_init(&BufferInitDescriptor {
                label: Some("Shape Vertex Buffer"),
                contents: bytemuck::cast_slice(self.draw_list.vertices()),
                usage: BufferUsages::VERTEX,
            })
        });

        let mut encoder = self
            .state
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Shape Render Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(self.clear_color.to_wgpu()),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..RenderPassDescriptor::default()
            });

            if let Some(vertex_buffer) = &vertex_buffer {
                let vertex_count = self.draw_list.vertices().len() as u32;
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.screen_bind_group, &[]);
                rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
                rpass.draw(0..vertex_count, 0..1);
            }
        }

        trace!(
            "Drawing {} shapes ({} vertices)",
            self.draw_list.shape_count(),
            self.draw_list.vertices().len()
        );

        self.state.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}
