//! Lyon tessellation of orbit rings into a flat triangle-list buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

use super::color::Color;

/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RingVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RingVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

struct RingVertexCtor {
    color: Color,
}

impl StrokeVertexConstructor<RingVertex> for RingVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> RingVertex {
        RingVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Orbit ring geometry for one frame.
pub struct OrbitRings {
    tess: StrokeTessellator,
    geometry: VertexBuffers<RingVertex, u32>,
    buffer: Vec<f32>,
}

impl OrbitRings {
    pub const RING_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.1);
    pub const SELECTED_RING_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.35);
    pub const RING_WIDTH: f32 = 1.0;
    pub const SELECTED_RING_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self {
            tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(8192 * RingVertex::FLOATS),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / RingVertex::FLOATS
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Stroke one ring, styled by whether its body is selected.
    pub fn push_ring(&mut self, center: Vec2, radius: f32, selected: bool) {
        let (width, color) = if selected {
            (Self::SELECTED_RING_WIDTH, Self::SELECTED_RING_COLOR)
        } else {
            (Self::RING_WIDTH, Self::RING_COLOR)
        };
        self.stroke_circle(center, radius, width, color);
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();

        let result = self.tess.tessellate_path(
            &path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, RingVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("orbits: tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }
}

impl Default for OrbitRings {
    fn default() -> Self {
        Self::new()
    }
}
