pub mod shell;
pub mod sidebar;
pub mod topbar;
