//! Route table

pub const HOME: &str = "/";
pub const REGISTER: &str = "/register";
pub const LOGIN: &str = "/login";
pub const PROJECTS: &str = "/projects";

/// Navigation bar entries, in display order
pub const NAV_LINKS: [(&str, &str); 4] = [
    (HOME, "Главная"),
    (REGISTER, "Регистрация"),
    (LOGIN, "Вход"),
    (PROJECTS, "Проекты"),
];
