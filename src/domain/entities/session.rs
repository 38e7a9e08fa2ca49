use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::navigation::{navigation_for, NavItem},
    entities::{token::Claims, user::Role},
    errors::AuthError,
};

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub role_label: &'static str,
}

/// Props shared with every page of the frontend.
#[derive(Debug, Serialize)]
pub struct SessionProps {
    pub user: SessionUser,
    pub navigation: &'static [NavItem],
}

impl TryFrom<&Claims> for SessionProps {
    type Error = AuthError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let id = claims.user_id()?;

        Ok(SessionProps {
            user: SessionUser {
                id,
                name: claims.name.clone(),
                email: claims.email.clone(),
                role: claims.role,
                role_label: claims.role.label(),
            },
            navigation: navigation_for(claims.role),
        })
    }
}
