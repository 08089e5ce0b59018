use glam::{DMat3, DMat4, DVec3, Mat4};

/// Camera pose handed to the rendering collaborator: look-at rotation plus
/// translation to the eye position.
///
/// The rotation holds the camera's local axes as columns, so it maps
/// camera-local vectors into world space (glam's column-vector convention).
/// Renderers using row vectors can take [`CameraPose::look_at_rows`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Local X/Y/Z axes of the camera in world space, as columns.
    pub rotation: DMat3,
    /// Eye position in world space.
    pub translation: DVec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            rotation: DMat3::IDENTITY,
            translation: DVec3::ZERO,
        }
    }
}

impl CameraPose {
    /// Compose rotation and translation into one affine camera matrix
    /// (camera space → world space).
    #[must_use]
    pub fn camera_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.translation.extend(1.0),
        )
    }

    /// World space → camera space.
    ///
    /// This is the full 4×4 inverse of [`camera_matrix`](Self::camera_matrix)
    /// rather than a transpose, so it stays correct if the basis ever drifts
    /// from orthonormal.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        self.camera_matrix().inverse()
    }

    /// Rotation in row-major order with one camera axis per row
    /// (`[x_axis, y_axis, z_axis]`).
    #[must_use]
    pub fn look_at_rows(&self) -> [[f64; 3]; 3] {
        [
            self.rotation.x_axis.to_array(),
            self.rotation.y_axis.to_array(),
            self.rotation.z_axis.to_array(),
        ]
    }

    /// World-space viewing direction (the camera looks down its local −Z).
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        -self.rotation.z_axis
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera and view matrices.
pub struct CameraUniform {
    /// Camera matrix (camera → world), column-major.
    pub camera: [[f32; 4]; 4],
    /// View matrix (world → camera), column-major.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            camera: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given pose.
    pub fn update(&mut self, pose: &CameraPose) {
        self.camera = pose.camera_matrix().as_mat4().to_cols_array_2d();
        self.view = pose.view_matrix().as_mat4().to_cols_array_2d();
        self.position = pose.translation.as_vec3().to_array();
    }
}
