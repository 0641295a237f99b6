pub mod body;
pub mod force;
pub mod scene;
