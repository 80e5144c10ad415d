// Interface adapters: concrete collaborators behind the domain ports.

pub mod assets;
pub mod audio;
pub mod clock;
pub mod input;
pub mod protocol;
pub mod render;
