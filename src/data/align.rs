/// Pair two series positionally by truncating both to the shorter length.
///
/// The first `min(a.len(), b.len())` elements of each input are kept and
/// everything past that is dropped. There is no key-based join and no
/// resampling, so rows beyond the shorter series are discarded without
/// notice to the caller. An index-aligned join or interpolation would give
/// different results and is deliberately not done here.
pub fn align<'a, V>(a: &'a [V], b: &'a [V]) -> (&'a [V], &'a [V]) {
    let len = a.len().min(b.len());
    if a.len() != b.len() {
        log::debug!(
            "aligning series of {} and {} values to {len}",
            a.len(),
            b.len()
        );
    }
    (&a[..len], &b[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_longer_series_from_the_end() {
        let a: Vec<i32> = (0..10).collect();
        let b: Vec<i32> = (100..107).collect();
        let (x, y) = align(&a, &b);
        assert_eq!(x.len(), 7);
        assert_eq!(y.len(), 7);
        assert_eq!(x, &a[..7]);
        assert_eq!(y, b.as_slice());
    }

    #[test]
    fn order_is_preserved_whichever_side_is_longer() {
        let a = [3.0, 1.0];
        let b = [9.0, 8.0, 7.0, 6.0];
        assert_eq!(align(&a, &b), (&a[..], &b[..2]));
        assert_eq!(align(&b, &a), (&b[..2], &a[..]));
    }

    #[test]
    fn empty_input_empties_both() {
        let empty: [u8; 0] = [];
        let b = [1, 2, 3];
        assert_eq!(align(&empty, &b), (&[][..], &[][..]));
        assert_eq!(align(&b, &empty), (&[][..], &[][..]));
    }

    #[test]
    fn equal_lengths_are_untouched() {
        let a = ["x", "y"];
        let b = ["p", "q"];
        assert_eq!(align(&a, &b), (&a[..], &b[..]));
    }
}
