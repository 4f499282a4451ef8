//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumb_trail;
mod delete_confirm_button;
mod nav_link;
mod plus_menu;
mod project_card;
mod project_form;
mod search_dialog;
mod shell;
mod task_form;
mod task_list;

pub use breadcrumb_trail::BreadcrumbTrail;
pub use delete_confirm_button::{delete_prompt, DeleteConfirmButton};
pub use nav_link::NavLink;
pub use plus_menu::PlusMenu;
pub use project_card::{delete_project, ProjectCard};
pub use project_form::ProjectFormDialog;
pub use search_dialog::SearchDialog;
pub use shell::Shell;
pub use task_form::TaskFormDialog;
pub use task_list::TaskList;
