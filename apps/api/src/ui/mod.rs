pub mod accordion;
pub mod ats;
pub mod classes;
pub mod details;
pub mod icons;
