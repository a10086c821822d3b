// # Contact Store Implementations
//
// Only an in-memory store exists: the directory resets on restart.

pub mod memory;

pub use memory::MemoryContactStore;
