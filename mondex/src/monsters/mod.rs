mod monster;

pub use monster::Monster;
