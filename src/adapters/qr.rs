use crate::domain::model::ModuleGrid;
use crate::utils::error::Result;
use qrcode::{Color, EcLevel, QrCode};

/// Light modules of padding around the symbol, required by the QR
/// specification for reliable scanning.
pub const QUIET_ZONE: usize = 4;

/// Encodes `text` at error correction level H with automatic version
/// selection, then wraps the symbol in the quiet zone.
///
/// Capacity overruns surface as [`ModelError::QrError`] before anything is
/// written.
///
/// [`ModelError::QrError`]: crate::utils::error::ModelError::QrError
pub fn encode(text: &str) -> Result<ModuleGrid> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
    let symbol_width = code.width();
    let colors = code.to_colors();

    let side = symbol_width + 2 * QUIET_ZONE;
    let mut modules = vec![vec![false; side]; side];
    for row in 0..symbol_width {
        for col in 0..symbol_width {
            modules[row + QUIET_ZONE][col + QUIET_ZONE] =
                colors[row * symbol_width + col] == Color::Dark;
        }
    }

    tracing::debug!(
        "Encoded {} bytes into a {}x{} symbol ({}x{} with quiet zone)",
        text.len(),
        symbol_width,
        symbol_width,
        side,
        side
    );

    Ok(ModuleGrid::new(modules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_odd_square_grid() {
        let grid = encode("https://mihatama.com/").unwrap();
        let n = grid.module_count();
        // Smallest symbol is 21 modules; the quiet zone adds 8 and keeps
        // the side odd.
        assert!(n >= 21 + 2 * QUIET_ZONE);
        assert_eq!(n % 2, 1);
    }

    #[test]
    fn test_quiet_zone_is_light() {
        let grid = encode("hello").unwrap();
        let n = grid.module_count();
        for i in 0..n {
            for b in 0..QUIET_ZONE {
                assert!(!grid.is_dark(b, i));
                assert!(!grid.is_dark(n - 1 - b, i));
                assert!(!grid.is_dark(i, b));
                assert!(!grid.is_dark(i, n - 1 - b));
            }
        }
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        // Every QR symbol starts with a finder pattern whose outer ring is
        // dark, directly inside the quiet zone.
        let grid = encode("hello").unwrap();
        assert!(grid.is_dark(QUIET_ZONE, QUIET_ZONE));
    }

    #[test]
    fn test_over_capacity_text_fails() {
        // Level H byte capacity tops out well below 2000 bytes.
        let text = "x".repeat(2000);
        assert!(encode(&text).is_err());
    }

    #[test]
    fn test_longer_text_needs_more_modules() {
        let short = encode("hi").unwrap();
        let long = encode(&"https://example.com/some/deep/path?q=".repeat(4)).unwrap();
        assert!(long.module_count() > short.module_count());
    }
}
