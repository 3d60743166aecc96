use crate::dtype::DType;
use crate::errors::SciUtilsError;
use ndarray::{ArrayViewMutD, Axis};
use num_traits::Zero;

/// A mutable array view tagged with its element kind.
///
/// Fixed-width string arrays use the trailing axis as the character axis:
/// an S6 array of shape `[2, 3]` is a `u8` view with shape `[2, 3, 6]`,
/// a U6 array a `u32` view of UCS-4 code units. Slots are padded with
/// trailing NUL fill. `Uint8` is a numeric view and distinct from `Bytes`.
pub enum TypedArrayMut<'a> {
    Bytes(ArrayViewMutD<'a, u8>),
    Unicode(ArrayViewMutD<'a, u32>),
    Int8(ArrayViewMutD<'a, i8>),
    Uint8(ArrayViewMutD<'a, u8>),
    Int16(ArrayViewMutD<'a, i16>),
    Uint16(ArrayViewMutD<'a, u16>),
    Int32(ArrayViewMutD<'a, i32>),
    Uint32(ArrayViewMutD<'a, u32>),
    Int64(ArrayViewMutD<'a, i64>),
    Uint64(ArrayViewMutD<'a, u64>),
    Float(ArrayViewMutD<'a, f32>),
    Double(ArrayViewMutD<'a, f64>),
}

impl TypedArrayMut<'_> {
    pub fn dtype(&self) -> DType {
        match self {
            TypedArrayMut::Bytes(view) => DType::Bytes(slot_width(view)),
            TypedArrayMut::Unicode(view) => DType::Unicode(slot_width(view)),
            TypedArrayMut::Int8(_) => DType::Int8,
            TypedArrayMut::Uint8(_) => DType::Uint8,
            TypedArrayMut::Int16(_) => DType::Int16,
            TypedArrayMut::Uint16(_) => DType::Uint16,
            TypedArrayMut::Int32(_) => DType::Int32,
            TypedArrayMut::Uint32(_) => DType::Uint32,
            TypedArrayMut::Int64(_) => DType::Int64,
            TypedArrayMut::Uint64(_) => DType::Uint64,
            TypedArrayMut::Float(_) => DType::Float,
            TypedArrayMut::Double(_) => DType::Double,
        }
    }
}

fn slot_width<T>(view: &ArrayViewMutD<'_, T>) -> usize {
    view.shape().last().copied().unwrap_or(0)
}

/// Strips trailing whitespace from every element of a fixed-width string
/// array, in place.
///
/// The view is written through to the caller's backing storage, so all
/// aliasing views observe the trimmed values; shape, strides and slot
/// width never change. Non-string views fail before anything is touched.
pub fn rstrip_inplace(array: &mut TypedArrayMut<'_>) -> Result<(), SciUtilsError> {
    match array {
        TypedArrayMut::Bytes(view) => rstrip_lanes(view, |c: u8| c.is_ascii_whitespace()),
        TypedArrayMut::Unicode(view) => rstrip_lanes(view, |c: u32| {
            char::from_u32(c).is_some_and(|c| c.is_whitespace())
        }),
        _ => Err(SciUtilsError::NotAStringArray),
    }
}

/// Trims each lane of the character axis: scanning from the right, NUL
/// fill is skipped and trailing whitespace overwritten with NUL until the
/// first real character.
fn rstrip_lanes<T, F>(view: &mut ArrayViewMutD<'_, T>, is_space: F) -> Result<(), SciUtilsError>
where
    T: Copy + Zero + PartialEq,
    F: Fn(T) -> bool,
{
    if view.ndim() == 0 {
        return Err(SciUtilsError::MissingCharAxis);
    }
    let char_axis = Axis(view.ndim() - 1);
    for mut lane in view.lanes_mut(char_axis) {
        for i in (0..lane.len()).rev() {
            let c = lane[i];
            if c == T::zero() {
                continue;
            }
            if is_space(c) {
                lane[i] = T::zero();
            } else {
                break;
            }
        }
    }
    Ok(())
}
