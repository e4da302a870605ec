/// Get the non-negative magnitude of `num`.
pub fn sign_positive(num: f64) -> f64 {
    if num >= 0.0 {
        return num;
    }
    -num
}

/// `num` if it is non-negative, otherwise `default`.
pub fn positive_or_default(num: f64, default: f64) -> f64 {
    if num >= 0.0 {
        return num;
    }
    default
}
