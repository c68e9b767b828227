pub mod book;
pub mod reset;
pub mod run;
pub mod status;
pub mod theme;
