use kk_core::errors::ValidationError;
use kk_core::services::{ProfileUpdate, RegisterUser};
use kk_core::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

impl RegisterRequest {
    /// Fails with `InvalidRole` for anything but the four known roles
    pub fn into_command(self) -> Result<RegisterUser, ValidationError> {
        Ok(RegisterUser {
            role: self.role.parse::<Role>()?,
            email: self.email,
            password: self.password,
            name: self.name,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Only `name` is updatable; other fields in the body are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate { name: request.name }
    }
}
