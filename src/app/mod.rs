// App layer: the user-facing surface (input checks, text rendering, interactive session).

pub mod input;
pub mod render;
pub mod shell;
