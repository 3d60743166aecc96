/// Element kinds for typed array views.
///
/// String kinds carry their fixed slot width: `Bytes(6)` is a 6-byte
/// string slot, `Unicode(6)` a 6-character UCS-4 slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    Bytes(usize),
    Unicode(usize),
}

impl DType {
    pub fn is_string(&self) -> bool {
        matches!(self, DType::Bytes(_) | DType::Unicode(_))
    }

    /// Element size in bytes.
    pub fn itemsize(&self) -> usize {
        match self {
            DType::Int8 | DType::Uint8 => 1,
            DType::Int16 | DType::Uint16 => 2,
            DType::Int32 | DType::Uint32 | DType::Float => 4,
            DType::Int64 | DType::Uint64 | DType::Double => 8,
            DType::Bytes(width) => *width,
            DType::Unicode(width) => 4 * width,
        }
    }
}
