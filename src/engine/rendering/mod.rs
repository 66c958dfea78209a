//! Rendering backend built on top of `wgpu`.
//!
//! Shapes reach the screen in two steps. Anything implementing
//! [`RenderTarget`] receives the frame's camera and the shapes in draw order.
//! The [`DrawList`] target tessellates them into pixel space triangles, which
//! the [`Renderer`] uploads and draws with a single pipeline.
//!
//! The draw list has no GPU dependency, so the whole environment render path
//! can run headless:
//!
//! ```rust
//! use boxdrop::rendering::DrawList;
//! use boxdrop::Environment;
//!
//! let mut environment = Environment::default();
//! environment.create_box(1.0, 1.0, 0.0, 0.0, true).unwrap();
//!
//! let mut list = DrawList::new();
//! environment.render(&mut list, 800, 600);
//! assert_eq!(list.shape_count(), 1);
//! ```

pub mod draw_list;
mod error;
pub mod renderer;
pub mod shaders;
pub mod state;
pub mod target;
pub mod vertex;

pub use draw_list::*;
pub use error::*;
pub use renderer::*;
pub use state::*;
pub use target::*;
pub use vertex::*;
