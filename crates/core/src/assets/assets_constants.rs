/// Condition labels stored by the inventory backend
pub const STATUS_BAIK: &str = "baik";
pub const STATUS_RUSAK: &str = "rusak";
pub const STATUS_TIDAK_MEMADAI: &str = "tidak_memadai";
pub const STATUS_HILANG: &str = "hilang";

/// Procurement source labels as shown on the asset form
pub const SOURCE_PEMBELIAN: &str = "Pembelian";
pub const SOURCE_BANTUAN: &str = "Bantuan";
pub const SOURCE_STTST: &str = "STTST";
pub const SOURCE_HIBAH: &str = "Hibah";
