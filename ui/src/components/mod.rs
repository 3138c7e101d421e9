pub mod editable;
pub mod icon;
pub mod sections;
