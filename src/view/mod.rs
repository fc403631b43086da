pub mod sidebar;

pub use sidebar::SidebarPanel;
