pub mod editor_input;
