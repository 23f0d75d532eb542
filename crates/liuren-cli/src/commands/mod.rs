pub mod cast;
pub mod form;
pub mod palaces;
pub mod session;
