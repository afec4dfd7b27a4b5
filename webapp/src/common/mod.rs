pub mod dom;
pub mod observer;
pub mod storage;
pub mod style;
