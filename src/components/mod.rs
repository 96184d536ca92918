pub mod about;
pub mod contact;
pub mod hero;
pub mod matrix_rain;
pub mod navbar;
pub mod projects;
pub mod skill_network;
pub mod skills;
