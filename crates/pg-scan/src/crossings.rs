//! Solid/pore boundary crossing detection.

/// Indices `i` where `|line[i + 1] - line[i]| >= 1`, i.e. where the scanline
/// switches phase between cell `i` and cell `i + 1`.
///
/// On a corrected binary scanline the comparison is exact: only full
/// pore-to-solid or solid-to-pore steps qualify.
pub fn boundary_crossings(line: &[f32]) -> Vec<usize> {
    let mut out = Vec::new();
    for i in 1..line.len() {
        if (line[i] - line[i - 1]).abs() >= 1.0 {
            out.push(i - 1);
        }
    }
    out
}
