pub mod logging;
pub mod settings;
pub mod shell;
pub mod widget;
