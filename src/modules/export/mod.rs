pub mod controller;
pub mod crossword;
pub mod model;
pub mod router;
pub mod service;
