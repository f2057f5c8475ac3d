// src/gui/components/mod.rs
//
// Shared chrome drawn by app.rs and the pages: each component is a free
// `draw(ui, app)` function, no retained widget state.

pub mod banner;
pub mod data_table;
pub mod export_bar;
pub mod sidebar;
pub mod tabs;
