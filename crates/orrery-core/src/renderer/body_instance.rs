use bytemuck::{Pod, Zeroable};

/// Per-body render data, read by the host renderer through a raw pointer.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// Centre in viewport pixels.
    pub x: f32,
    pub y: f32,
    /// Half the display size.
    pub radius: f32,
    /// Self-rotation angle in radians.
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 1.0 when selected, 0.5 when hovered, else 0.0.
    pub highlight: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of body instances, rebuilt every frame in catalog order.
pub struct BodyBuffer {
    instances: Vec<BodyInstance>,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Index of the body under `(x, y)`, allowing `slack` extra pixels
    /// around each disc. The nearest centre wins on overlap.
    pub fn hit_test(&self, x: f32, y: f32, slack: f32) -> Option<usize> {
        let p = glam::Vec2::new(x, y);
        self.instances
            .iter()
            .enumerate()
            .filter_map(|(i, inst)| {
                let d = p.distance(glam::Vec2::new(inst.x, inst.y));
                (d <= inst.radius + slack).then_some((i, d))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(x: f32, y: f32, radius: f32) -> BodyInstance {
        BodyInstance { x, y, radius, ..Default::default() }
    }

    #[test]
    fn body_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
        assert_eq!(BodyInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn hit_test_prefers_nearest() {
        let mut buf = BodyBuffer::new();
        buf.push(disc(0.0, 0.0, 75.0));
        buf.push(disc(100.0, 0.0, 10.0));
        assert_eq!(buf.hit_test(95.0, 0.0, 12.0), Some(1));
        assert_eq!(buf.hit_test(10.0, 10.0, 12.0), Some(0));
        assert_eq!(buf.hit_test(300.0, 300.0, 12.0), None);
    }

    #[test]
    fn slack_widens_small_targets() {
        let mut buf = BodyBuffer::new();
        buf.push(disc(50.0, 50.0, 2.0));
        assert_eq!(buf.hit_test(60.0, 50.0, 0.0), None);
        assert_eq!(buf.hit_test(60.0, 50.0, 12.0), Some(0));
    }
}
