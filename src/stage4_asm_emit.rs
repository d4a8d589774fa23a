mod emit;

pub use emit::AsmCodeEmitter;
