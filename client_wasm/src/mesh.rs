//! Mesh generation for Pong
//!
//! Two unit meshes, scaled per instance: a quad with its top-left corner at
//! the origin (rects) and a disc centred on the origin (ball)

use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    fn xy(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
        }
    }
}

/// Unit quad spanning (0, 0)..(1, 1)
pub fn rectangle_geometry() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex::xy(0.0, 0.0),
        Vertex::xy(1.0, 0.0),
        Vertex::xy(1.0, 1.0),
        Vertex::xy(0.0, 1.0),
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Unit disc as a triangle fan around the centre vertex
pub fn circle_geometry(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex::xy(0.0, 0.0));
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex::xy(angle.cos(), angle.sin()));
    }

    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.extend_from_slice(&[0, current, next]);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, queue: &Queue, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: std::mem::size_of_val(vertices) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(vertices));

        // Buffer sizes must be a multiple of 4; pad odd index counts
        let mut padded = indices.to_vec();
        if padded.len() % 2 != 0 {
            padded.push(0);
        }
        let index_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Index Buffer"),
            size: std::mem::size_of_val(padded.as_slice()) as u64,
            usage: BufferUsages::INDEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&padded));

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

/// Create the unit rectangle mesh
pub fn create_rectangle(device: &Device, queue: &Queue) -> Mesh {
    let (vertices, indices) = rectangle_geometry();
    Mesh::new(device, queue, &vertices, &indices)
}

/// Create the unit circle mesh
pub fn create_circle(device: &Device, queue: &Queue, segments: u16) -> Mesh {
    let (vertices, indices) = circle_geometry(segments);
    Mesh::new(device, queue, &vertices, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_is_two_triangles() {
        let (vertices, indices) = rectangle_geometry();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_circle_fan() {
        let (vertices, indices) = circle_geometry(32);
        assert_eq!(vertices.len(), 33, "Centre plus rim");
        assert_eq!(indices.len(), 32 * 3);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));

        for v in &vertices[1..] {
            let [x, y, _] = v.position;
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-5, "Rim on unit circle");
        }
        // Last triangle wraps back to the first rim vertex
        assert_eq!(&indices[indices.len() - 3..], &[0, 32, 1]);
    }
}
