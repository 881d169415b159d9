pub mod commentary;
