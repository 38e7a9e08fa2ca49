use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use uuid::Uuid;

use crate::domain::password::validate_password_strength;
use crate::entities::option_fields::OptionField;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Coordinator,
    Graduate,
}

impl Role {
    /// Administrators and coordinators.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Administrator | Role::Coordinator)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Coordinator => "Coordinador",
            Role::Graduate => "Egresado",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<Uuid>
}

#[derive(Debug)]
pub struct UserInsert {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 8, message = "Must be at least 8 characters"),
        custom(
            function = "validate_password_strength",
            message = "Must include uppercase, number, and symbol"
        )
    )]
    pub password: String,
}

impl NewUser {
    /// Self-registration always yields a graduate account.
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        self.prepare_with_role(password_hash, Role::Graduate)
    }

    pub fn prepare_with_role(&self, password_hash: String, role: Role) -> UserInsert {
        let now = Utc::now();
        UserInsert {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Privileged creation: an administrator picks the role explicitly.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(nested)]
    #[serde(flatten)]
    pub user: NewUser,

    pub role: Role,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: OptionField<String>,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: OptionField<String>,

    pub role: OptionField<Role>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UpdateUserRequest {
    /// `null` on a required column keeps the stored value; validation
    /// already rejects it for email.
    pub fn apply_to(self, current: &User) -> UserUpdate {
        UserUpdate {
            name: self.name.apply_required(current.name.clone()).trim().to_string(),
            email: self.email.apply_required(current.email.clone()).trim().to_lowercase(),
            role: self.role.apply_required(current.role),
        }
    }
}

fn validate_optional_email(value: &OptionField<String>) -> Result<(), validator::ValidationError> {
    use validator::ValidateEmail;

    match value {
        OptionField::SetToValue(email) if !email.validate_email() => {
            let mut err = validator::ValidationError::new("email");
            err.message = Some("Invalid email format".into());
            Err(err)
        }
        OptionField::SetToNull => {
            let mut err = validator::ValidationError::new("email_required");
            err.message = Some("Email cannot be removed".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}


#[derive(Debug, Serialize)]
pub struct NewUserResponse {
    pub id: Uuid,
    pub role: Role,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<PublicUser>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
