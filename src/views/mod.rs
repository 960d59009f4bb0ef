//! View modules, one per sidebar tab

pub mod access;
pub mod dashboard;
pub mod projects;
pub mod resources;
pub mod settings;
pub mod team;

pub use access::AccessView;
pub use dashboard::DashboardView;
pub use projects::ProjectsView;
pub use resources::ResourcesView;
pub use settings::SettingsView;
pub use team::TeamView;
