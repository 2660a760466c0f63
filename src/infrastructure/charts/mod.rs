pub mod text_canvas;
