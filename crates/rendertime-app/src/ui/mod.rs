pub mod calculator_screen;
pub mod input;
pub mod input_form;
pub mod results;
pub mod theme;
