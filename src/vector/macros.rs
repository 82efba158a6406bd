/// Construct a [`Vector`](crate::vector::Vector) using the global allocator.
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use flex_vector::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// let z = vector![0u8; 4];
/// assert_eq!(z.len(), 4);
/// # }
/// ```
#[macro_export]
macro_rules! vector {
    (in $alloc:expr $(;)?) => (
        <$crate::vector::Vector<_, _>>::new_in($alloc)
    );
    () => (
        <$crate::vector::Vector<_>>::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vector::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        <$crate::vector::Vector<_>>::from([$($x),+])
    );
}
