pub mod colors;
pub mod logging;
pub mod print;
pub mod prompt;
pub mod table;
pub mod ui;
