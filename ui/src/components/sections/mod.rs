pub mod footer;
pub mod hero;
pub mod navigation;

pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
