use serde::Serialize;

use crate::entities::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

const ADMINISTRATOR_NAV: &[NavItem] = &[
    item("Inicio", "/dashboard"),
    item("Usuarios", "/users"),
    item("Egresados", "/basicInformation"),
    item("Noticias", "/news"),
    item("Mapa", "/map"),
    item("Reportes", "/graduateReports"),
    item("Mi perfil", "/staffProfile"),
];

const COORDINATOR_NAV: &[NavItem] = &[
    item("Inicio", "/dashboard"),
    item("Egresados", "/basicInformation"),
    item("Noticias", "/news"),
    item("Mapa", "/map"),
    item("Reportes", "/graduateReports"),
    item("Mi perfil", "/staffProfile"),
];

const GRADUATE_NAV: &[NavItem] = &[
    item("Inicio", "/dashboard"),
    item("Información básica", "/basicInformation"),
    item("Información académica", "/academicInformation"),
    item("Información laboral", "/employmentInformation"),
    item("Noticias", "/news"),
    item("Ubicación", "/location"),
];

/// Menu entries the frontend renders for `role`, in display order.
pub fn navigation_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Administrator => ADMINISTRATOR_NAV,
        Role::Coordinator => COORDINATOR_NAV,
        Role::Graduate => GRADUATE_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(role: Role) -> Vec<&'static str> {
        navigation_for(role).iter().map(|i| i.path).collect()
    }

    #[test]
    fn only_administrators_manage_users() {
        assert!(paths(Role::Administrator).contains(&"/users"));
        assert!(!paths(Role::Coordinator).contains(&"/users"));
        assert!(!paths(Role::Graduate).contains(&"/users"));
    }

    #[test]
    fn graduates_do_not_see_reports_or_map() {
        let graduate = paths(Role::Graduate);
        assert!(!graduate.contains(&"/graduateReports"));
        assert!(!graduate.contains(&"/map"));
        assert!(graduate.contains(&"/employmentInformation"));
    }

    #[test]
    fn every_menu_starts_at_dashboard() {
        for role in [Role::Administrator, Role::Coordinator, Role::Graduate] {
            assert_eq!(navigation_for(role)[0].path, "/dashboard");
        }
    }
}
