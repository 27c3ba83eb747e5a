pub mod coords;
pub mod image;
pub mod level;
pub mod pereval;
pub mod user;
