// Data plane: key/value operations. Control plane: startup load and background persistence.
pub mod control;
pub mod data;
