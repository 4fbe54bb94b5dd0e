//! GL point drawing
//!
//! The modern-GL rendition of "draw a fixed-size quad at (x, y)": each
//! shaded surface point becomes one `GL_POINTS` vertex with a fixed
//! `gl_PointSize`, streamed through a single interleaved VBO every
//! frame and projected with a pixel-extent orthographic matrix
//! centered on the window.

use glow::*;
use phong_scene::ShadedPoint;

const VERTEX_SHADER_SRC: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec2 a_position;
layout(location = 1) in vec3 a_color;

uniform mat4 u_projection;
uniform float u_point_size;

out vec3 v_color;

void main() {
    gl_Position = u_projection * vec4(a_position, 0.0, 1.0);
    gl_PointSize = u_point_size;
    v_color = a_color;
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"#version 300 es
precision mediump float;

in vec3 v_color;
out vec4 frag_color;

void main() {
    frag_color = vec4(v_color, 1.0);
}
"#;

/// Compile a shader from source code
///
/// # Safety
/// Requires an active OpenGL context
unsafe fn compile_shader(gl: &Context, shader_type: u32, source: &str) -> Result<Shader, String> {
    unsafe {
        let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            return Err(format!("Shader compilation error: {}", log));
        }

        Ok(shader)
    }
}

/// Create and link a shader program from vertex and fragment sources
///
/// # Safety
/// Requires an active OpenGL context
unsafe fn create_program(
    gl: &Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<Program, String> {
    unsafe {
        let program = gl.create_program().map_err(|e| e.to_string())?;

        let vertex_shader = compile_shader(gl, VERTEX_SHADER, vertex_src)?;
        let fragment_shader = compile_shader(gl, FRAGMENT_SHADER, fragment_src)?;

        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            return Err(format!("Program link error: {}", log));
        }

        gl.detach_shader(program, vertex_shader);
        gl.detach_shader(program, fragment_shader);
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        Ok(program)
    }
}

/// Renderer for the per-frame point cloud
pub struct PointRenderer {
    program: Program,
    vao: VertexArray,
    vbo: Buffer,
    u_projection: Option<UniformLocation>,
    u_point_size: Option<UniformLocation>,
    point_size: f32,
    vertices: Vec<f32>,
}

impl PointRenderer {
    /// Create the point program and streaming vertex buffer
    ///
    /// # Safety
    /// Requires an active OpenGL context
    pub unsafe fn new(gl: &Context, point_size: f32) -> Result<Self, String> {
        unsafe {
            let program = create_program(gl, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;
            let u_projection = gl.get_uniform_location(program, "u_projection");
            let u_point_size = gl.get_uniform_location(program, "u_point_size");

            let vao = gl.create_vertex_array().map_err(|e| e.to_string())?;
            let vbo = gl.create_buffer().map_err(|e| e.to_string())?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(ARRAY_BUFFER, Some(vbo));

            // Interleaved [x, y, r, g, b] per point.
            let stride = 5 * std::mem::size_of::<f32>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, FLOAT, false, stride, 8);

            gl.bind_vertex_array(None);
            gl.bind_buffer(ARRAY_BUFFER, None);

            Ok(Self {
                program,
                vao,
                vbo,
                u_projection,
                u_point_size,
                point_size,
                vertices: Vec::new(),
            })
        }
    }

    /// Upload this frame's shaded points and draw them
    ///
    /// # Safety
    /// Requires an active OpenGL context
    pub unsafe fn draw(&mut self, gl: &Context, points: &[ShadedPoint], width: i32, height: i32) {
        if points.is_empty() {
            return;
        }

        self.vertices.clear();
        self.vertices.reserve(points.len() * 5);
        for sp in points {
            self.vertices.extend_from_slice(&[
                sp.position.x,
                sp.position.y,
                sp.color.x,
                sp.color.y,
                sp.color.z,
            ]);
        }

        // Pixel-extent orthographic projection centered on the window,
        // matching the original fixed-function glOrtho setup.
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        let projection =
            glam::Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, -1.0, 1.0);

        unsafe {
            gl.use_program(Some(self.program));
            gl.uniform_matrix_4_f32_slice(
                self.u_projection.as_ref(),
                false,
                &projection.to_cols_array(),
            );
            gl.uniform_1_f32(self.u_point_size.as_ref(), self.point_size);

            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(ARRAY_BUFFER, Some(self.vbo));
            gl.buffer_data_u8_slice(
                ARRAY_BUFFER,
                bytemuck::cast_slice(&self.vertices),
                DYNAMIC_DRAW,
            );
            gl.draw_arrays(POINTS, 0, points.len() as i32);

            gl.bind_vertex_array(None);
            gl.bind_buffer(ARRAY_BUFFER, None);
            gl.use_program(None);
        }
    }

    /// Release GL resources
    ///
    /// # Safety
    /// Requires an active OpenGL context
    pub unsafe fn destroy(&self, gl: &Context) {
        unsafe {
            gl.delete_program(self.program);
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}
