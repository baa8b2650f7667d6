// Gameplay: characters and everything that drives them

pub mod characters;
