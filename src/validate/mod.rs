pub mod date;
pub mod text;

pub use date::{Birthdate, calendar_age};
pub use text::{Hobby, Hometown, Name, title_case};
