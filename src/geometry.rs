use std::f32::consts::TAU;

/// Fewest outer segments that still enclose an area
pub const MIN_SEGMENTS: u32 = 3;
/// Largest fan whose ring still fits `u16` indices (center + closing vertex)
pub const MAX_SEGMENTS: u32 = u16::MAX as u32 - 1;

/// Vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Flat polygon lying in the local XY plane, facing +Z
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    segments: u32,
}

impl PolygonGeometry {
    /// Build a circle approximation with `segments` outer vertices,
    /// triangulated as a fan around the center.
    ///
    /// Six segments give a hexagon. Fewer than three are raised to three.
    pub fn circle(radius: f32, segments: u32) -> Self {
        let segments = segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        let normal = [0.0, 0.0, 1.0];

        // Center, then the ring with the first vertex repeated to close it
        let vertices: Vec<Vertex> = std::iter::once(Vertex {
            position: [0.0, 0.0, 0.0],
            normal,
        })
        .chain((0..=segments).map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            Vertex {
                position: [radius * theta.cos(), radius * theta.sin(), 0.0],
                normal,
            }
        }))
        .collect();

        let indices = (1..=segments as u16)
            .flat_map(|i| [0, i, i + 1])
            .collect();

        Self {
            vertices,
            indices,
            segments,
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagon_has_six_triangles() {
        let hex = PolygonGeometry::circle(1.0, 6);
        assert_eq!(hex.segments(), 6);
        assert_eq!(hex.vertices.len(), 8);
        assert_eq!(hex.triangle_count(), 6);
    }

    #[test]
    fn ring_vertices_lie_on_radius_in_xy_plane() {
        let hex = PolygonGeometry::circle(2.0, 6);
        for v in &hex.vertices[1..] {
            let [x, y, z] = v.position;
            assert!(((x * x + y * y).sqrt() - 2.0).abs() < 1e-5);
            assert_eq!(z, 0.0);
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn degenerate_segment_count_is_raised() {
        let poly = PolygonGeometry::circle(1.0, 1);
        assert_eq!(poly.segments(), MIN_SEGMENTS);
        assert_eq!(poly.triangle_count(), 3);
    }

    #[test]
    fn oversized_segment_count_is_capped() {
        for requested in [u16::MAX as u32, 70_000] {
            let poly = PolygonGeometry::circle(1.0, requested);
            assert_eq!(poly.segments(), MAX_SEGMENTS);
            assert_eq!(poly.triangle_count(), MAX_SEGMENTS as usize);
            assert_eq!(poly.vertices.len(), MAX_SEGMENTS as usize + 2);
            assert!(poly
                .indices
                .iter()
                .all(|&i| (i as usize) < poly.vertices.len()));
        }
    }

    #[test]
    fn fan_winding_is_counter_clockwise() {
        let hex = PolygonGeometry::circle(1.0, 6);
        for tri in hex.indices.chunks(3) {
            let a = hex.vertices[tri[0] as usize].position;
            let b = hex.vertices[tri[1] as usize].position;
            let c = hex.vertices[tri[2] as usize].position;
            let cross_z = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross_z > 0.0);
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        let poly = PolygonGeometry::circle(1.0, 10);
        let count = poly.vertices.len() as u16;
        assert!(poly.indices.iter().all(|&i| i < count));
    }
}
