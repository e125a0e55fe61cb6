use crate::error::PhysicsError;
use crate::math::{self, Matrix4, Vector3, Vector4};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Ray representation for intersection tests
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Origin of the ray
    pub origin: Vector3,

    /// Direction of the ray (unit length when built by the constructors below)
    pub direction: Vector3,
}

/// Size of the render target in pixels, used to map screen coordinates to NDC
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Maps a screen position (origin top-left, y down) to normalized device coordinates
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let ndc_x = (x / self.width) * 2.0 - 1.0;
        let ndc_y = -((y / self.height) * 2.0 - 1.0);
        (ndc_x, ndc_y)
    }
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    #[inline]
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Creates a new ray with the given origin and direction, ensuring the direction is normalized
    #[inline]
    pub fn new_normalized(origin: Vector3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: math::safe_normalize(direction, direction),
        }
    }

    /// Returns the point at a given distance along the ray
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Returns a copy of this ray pointing in another direction
    #[inline]
    pub fn with_direction(&self, direction: Vector3) -> Self {
        Self::new(self.origin, direction)
    }

    /// Builds a world-space ray through a screen position.
    ///
    /// The screen point is mapped to NDC on the near plane, taken into eye
    /// space with the inverse projection, turned into a direction
    /// (`z = -1`, `w = 0`) and taken into world space with the inverse view.
    /// The origin is the eye position encoded in `view`.
    pub fn from_screen(
        x: f32,
        y: f32,
        viewport: Viewport,
        projection: &Matrix4,
        view: &Matrix4,
    ) -> Result<Self> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "viewport must have a positive size, got {}x{}",
                viewport.width, viewport.height
            )));
        }

        let inverse_projection = projection.try_inverse().ok_or_else(|| {
            PhysicsError::SingularMatrix("projection matrix is not invertible".to_string())
        })?;
        let inverse_view = view.try_inverse().ok_or_else(|| {
            PhysicsError::SingularMatrix("view matrix is not invertible".to_string())
        })?;

        let (ndc_x, ndc_y) = viewport.to_ndc(x, y);
        let clip = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);

        let mut eye = inverse_projection * clip;
        eye.z = -1.0;
        eye.w = 0.0;

        let world = inverse_view * eye;
        let direction = math::safe_normalize(world.xyz(), -Vector3::z());

        let eye_origin = inverse_view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let origin = if !math::approx_zero(eye_origin.w) {
            eye_origin.xyz() / eye_origin.w
        } else {
            eye_origin.xyz()
        };

        Ok(Self { origin, direction })
    }
}
