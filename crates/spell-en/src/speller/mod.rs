// Per-word spelling check around the morphological reducer

pub mod pipeline;
