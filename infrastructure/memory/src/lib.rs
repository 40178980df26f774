pub mod credentials;
pub mod seed;
pub mod catalog {
    pub mod repository;
}
pub mod order {
    pub mod repository;
}
pub mod session {
    pub mod repository;
}
