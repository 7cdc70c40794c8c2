use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    Some((get_min(vec)?, get_max(vec)?))
}

/// Fraction to percentage, e.g. 0.0123 -> 1.23
#[inline]
pub fn to_pct(fraction: f64) -> f64 {
    fraction * 100.0
}
