pub mod pereval;
