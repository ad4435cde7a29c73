/// Checks a condition is true and returns an error if not.
///
/// # Examples
///
/// ```rust
/// # use grabbag_util::result::ensure_or;
/// let result = ensure_or(5 > 3, "not greater");
/// assert!(result.is_ok());
///
/// let result = ensure_or(5 < 3, "not less");
/// assert_eq!(result, Err("not less"));
/// ```
pub fn ensure_or<E>(b: bool, err: E) -> Result<(), E> {
    match b {
        true => Ok(()),
        false => Err(err),
    }
}

/// Evaluates to an error if the condition is true.
///
/// # Examples
///
/// ```rust
/// # use grabbag_util::result::bail_if;
/// let rate = 0u32;
/// assert_eq!(bail_if(rate == 0, "zero rate"), Err("zero rate"));
/// assert!(bail_if(rate > 100, "rate too high").is_ok());
/// ```
pub fn bail_if<E>(b: bool, err: E) -> Result<(), E> {
    ensure_or(!b, err)
}
