/// Plane-local to world transformation matrix (row-major: [x_new, y_new, z_new])
/// The terrain is authored in the XY plane with height along Z, then laid flat:
/// -90° X rotation (Z→Y, -Y→Z, X→X)
pub const COORDINATE_TRANSFORM: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],  // X = X
    [0.0, 0.0, 1.0],  // Y = Z
    [0.0, -1.0, 0.0], // Z = -Y
];

/// Map a plane-local `(x, y, height)` triple into world space.
pub fn transform_coordinates(x: f32, y: f32, z: f32) -> [f32; 3] {
    let input = [x, y, z];
    let mut output = [0.0; 3];

    for i in 0..3 {
        for j in 0..3 {
            output[i] += COORDINATE_TRANSFORM[i][j] * input[j];
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lays_plane_flat_with_height_on_y() {
        assert_eq!(transform_coordinates(3.0, 4.0, 1.5), [3.0, 1.5, -4.0]);
        assert_eq!(transform_coordinates(-50.0, 50.0, 0.0), [-50.0, 0.0, -50.0]);
    }
}
