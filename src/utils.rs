use crate::SortError;

/// Removes the value at `from` and reinserts it so that it ends up at index `to`. Every other
/// value keeps its relative order.
///
/// `to` is the final position of the moved value, so both indices must be smaller than the length
/// of the vec. The vec is left untouched when either one is out of bounds.
pub fn move_item<T>(vec: &mut Vec<T>, from: usize, to: usize) -> Result<(), SortError> {
    let len = vec.len();
    for index in [from, to] {
        if index >= len {
            return Err(SortError::InvalidIndex { index, len });
        }
    }

    if from != to {
        let item = vec.remove(from);
        vec.insert(to, item);
    }
    Ok(())
}

/// Like [`move_item`] but leaves `items` alone and returns the reordered copy.
pub fn moved<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, SortError> {
    let mut vec = items.to_vec();
    move_item(&mut vec, from, to)?;
    Ok(vec)
}
