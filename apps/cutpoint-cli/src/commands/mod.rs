//! # Commands Module
//!
//! One function per form action. Each takes the state it needs, logs a
//! `debug!` event, and returns a serializable response or an [`ApiError`].
//!
//! | Command        | Form action        |
//! |----------------|--------------------|
//! | `calculate`    | Calcular           |
//! | `reset`        | Limpiar            |
//! | `print_report` | Imprimir           |
//! | `show`         | (current view)     |
//! | `list_classes` | bottle size picker |
//!
//! [`ApiError`]: crate::error::ApiError

pub mod calculate;
pub mod classes;
pub mod form;
pub mod print;

pub use calculate::{calculate, CalculateResponse};
pub use classes::{list_classes, ClassList, VolumeClassInfo};
pub use form::{reset, show, FormView};
pub use print::{print_report, render_report, PrintedReport};
