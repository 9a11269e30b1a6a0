/// Color matrix utilities
///
/// Builds the 3x3 RGB matrices used by the matrix-based filter functions
/// (saturate, hue-rotate, grayscale, sepia). Coefficients are the ones
/// published in the W3C Filter Effects module, so the output matches what a
/// browser shows for the same `filter` string.

use cgmath::{Matrix3, SquareMatrix, Vector3};

/// Luminance weights used by saturate and hue-rotate
const LUMA_SATURATE: [f32; 3] = [0.213, 0.715, 0.072];

/// Rec. 709 luminance weights used by grayscale
const LUMA_GRAYSCALE: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Build a matrix from row-major coefficients
///
/// cgmath stores matrices column-major, so the rows are scattered into
/// columns here.
pub fn from_rows(rows: [[f32; 3]; 3]) -> Matrix3<f32> {
    Matrix3::new(
        rows[0][0], rows[1][0], rows[2][0], // Column 0
        rows[0][1], rows[1][1], rows[2][1], // Column 1
        rows[0][2], rows[1][2], rows[2][2], // Column 2
    )
}

/// Saturation matrix; 0 is fully desaturated, 1 is unchanged
pub fn saturate(amount: f32) -> Matrix3<f32> {
    let [r, g, b] = LUMA_SATURATE;
    let s = amount;

    from_rows([
        [r + (1.0 - r) * s, g - g * s, b - b * s],
        [r - r * s, g + (1.0 - g) * s, b - b * s],
        [r - r * s, g - g * s, b + (1.0 - b) * s],
    ])
}

/// Hue rotation matrix for an angle in degrees
pub fn hue_rotate(degrees: f32) -> Matrix3<f32> {
    let (sin, cos) = degrees.to_radians().sin_cos();

    from_rows([
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ])
}

/// Grayscale matrix; 1 is fully gray, 0 is unchanged
pub fn grayscale(amount: f32) -> Matrix3<f32> {
    let [r, g, b] = LUMA_GRAYSCALE;
    let keep = 1.0 - amount.clamp(0.0, 1.0);

    from_rows([
        [r + (1.0 - r) * keep, g - g * keep, b - b * keep],
        [r - r * keep, g + (1.0 - g) * keep, b - b * keep],
        [r - r * keep, g - g * keep, b + (1.0 - b) * keep],
    ])
}

/// Sepia matrix; 1 is full sepia, 0 is unchanged
pub fn sepia(amount: f32) -> Matrix3<f32> {
    let keep = 1.0 - amount.clamp(0.0, 1.0);

    from_rows([
        [0.393 + 0.607 * keep, 0.769 - 0.769 * keep, 0.189 - 0.189 * keep],
        [0.349 - 0.349 * keep, 0.686 + 0.314 * keep, 0.168 - 0.168 * keep],
        [0.272 - 0.272 * keep, 0.534 - 0.534 * keep, 0.131 + 0.869 * keep],
    ])
}

/// Multiply an RGB triple (0.0..=1.0) by a matrix, clamping the result
pub fn transform(matrix: &Matrix3<f32>, rgb: [f32; 3]) -> [f32; 3] {
    let out = *matrix * Vector3::new(rgb[0], rgb[1], rgb[2]);
    [
        out.x.clamp(0.0, 1.0),
        out.y.clamp(0.0, 1.0),
        out.z.clamp(0.0, 1.0),
    ]
}

/// Check if a color matrix is the identity matrix (no conversion)
pub fn is_identity_matrix(matrix: &Matrix3<f32>) -> bool {
    const EPSILON: f32 = 0.001;

    let a: [[f32; 3]; 3] = (*matrix).into();
    let b: [[f32; 3]; 3] = Matrix3::<f32>::identity().into();

    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).abs() < EPSILON)
}
