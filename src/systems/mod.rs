pub mod composite;
pub mod intersections;
