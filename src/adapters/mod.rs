// Adapters layer: concrete implementations for external systems
// (QR encoding library, local filesystem).

pub mod qr;
pub mod storage;
