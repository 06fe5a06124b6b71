// Scalar kernels over contiguous f64 buffers.
// Two accumulators over chunks of four keep the loops pipelined and let the
// compiler vectorize them; callers guarantee equal lengths.
//
// Norms and distances work on data divided by its largest magnitude, so
// sums of squares stay in [0, len] and neither overflow nor underflow for
// any finite input.

/// Dot product of two equal-length slices
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        sum0 += a_chunk[0] * b_chunk[0] + a_chunk[1] * b_chunk[1];
        sum1 += a_chunk[2] * b_chunk[2] + a_chunk[3] * b_chunk[3];
    }

    let offset = a.len() - remainder.len();
    for (i, x) in remainder.iter().enumerate() {
        sum0 += x * b[offset + i];
    }

    sum0 + sum1
}

/// Largest absolute component; 0.0 exactly when every component is zero
#[inline]
pub fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0f64, |m, x| m.max(x.abs()))
}

/// Dot product of `a / a_scale` and `b / b_scale`. Scales must be non-zero.
#[inline]
pub fn scaled_dot(a: &[f64], a_scale: f64, b: &[f64], b_scale: f64) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        sum0 += (a_chunk[0] / a_scale) * (b_chunk[0] / b_scale)
            + (a_chunk[1] / a_scale) * (b_chunk[1] / b_scale);
        sum1 += (a_chunk[2] / a_scale) * (b_chunk[2] / b_scale)
            + (a_chunk[3] / a_scale) * (b_chunk[3] / b_scale);
    }

    let offset = a.len() - remainder.len();
    for (i, x) in remainder.iter().enumerate() {
        sum0 += (x / a_scale) * (b[offset + i] / b_scale);
    }

    sum0 + sum1
}

/// L2 norm of `v / scale`. Shares the accumulation order of [`scaled_dot`],
/// so `scaled_norm(v, s)^2` and `scaled_dot(v, s, v, s)` agree to within
/// rounding of the sqrt.
#[inline]
pub fn scaled_norm(v: &[f64], scale: f64) -> f64 {
    scaled_dot(v, scale, v, scale).sqrt()
}

/// L2 norm (length). Infinite only when the true length exceeds `f64::MAX`.
#[inline]
pub fn norm(v: &[f64]) -> f64 {
    let scale = max_abs(v);
    if scale == 0.0 {
        return 0.0;
    }
    scale * scaled_norm(v, scale)
}

/// L2 distance split as `(half_scale, unit)`, with
/// `distance = 2 * half_scale * unit`.
///
/// Differences are taken on halved components so `a_i - b_i` cannot
/// overflow; `unit` lies in `[1, sqrt(len)]` unless the vectors are equal,
/// in which case both parts are zero.
#[inline]
pub fn l2_distance_parts(a: &[f64], b: &[f64]) -> (f64, f64) {
    debug_assert_eq!(a.len(), b.len());

    let half_diff = |x: f64, y: f64| x * 0.5 - y * 0.5;

    let half_scale = a
        .iter()
        .zip(b)
        .fold(0.0f64, |m, (x, y)| m.max(half_diff(*x, *y).abs()));
    if half_scale == 0.0 {
        return (0.0, 0.0);
    }

    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        let d0 = half_diff(a_chunk[0], b_chunk[0]) / half_scale;
        let d1 = half_diff(a_chunk[1], b_chunk[1]) / half_scale;
        let d2 = half_diff(a_chunk[2], b_chunk[2]) / half_scale;
        let d3 = half_diff(a_chunk[3], b_chunk[3]) / half_scale;

        sum0 += d0 * d0 + d1 * d1;
        sum1 += d2 * d2 + d3 * d3;
    }

    let offset = a.len() - remainder.len();
    for (i, x) in remainder.iter().enumerate() {
        let diff = half_diff(*x, b[offset + i]) / half_scale;
        sum0 += diff * diff;
    }

    (half_scale, (sum0 + sum1).sqrt())
}

/// L2 (Euclidean) distance. Infinite only when the true distance exceeds `f64::MAX`.
#[inline]
pub fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    let (half_scale, unit) = l2_distance_parts(a, b);
    2.0 * half_scale * unit
}
