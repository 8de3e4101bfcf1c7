//! Flag art drawn with background-colored terminal cells.
//!
//! Each flag is a function from a cell position to a color; [`flag_lines`]
//! samples it over the card area and merges runs of equal color into spans.

use crate::quiz::catalog::Country;
use ratatui::prelude::*;

const BLUE: Color = Color::Rgb(0, 114, 206);
const NAVY: Color = Color::Rgb(1, 33, 105);
const BLACK: Color = Color::Rgb(0, 0, 0);
const WHITE: Color = Color::Rgb(255, 255, 255);
const RED: Color = Color::Rgb(200, 16, 46);
const GOLD: Color = Color::Rgb(255, 206, 0);
const GREEN: Color = Color::Rgb(0, 146, 70);
const ORANGE: Color = Color::Rgb(255, 121, 0);
const EMERALD: Color = Color::Rgb(0, 135, 81);
const YELLOW: Color = Color::Rgb(255, 196, 0);

/// Index of the band containing `pos` when `len` cells are split by `weights`.
fn band(pos: u16, len: u16, weights: &[u16]) -> usize {
    let total: u32 = weights.iter().map(|&w| w as u32).sum();
    if len == 0 || total == 0 {
        return 0;
    }
    // Compare at the cell center so bands split evenly.
    let scaled = (pos as u32 * 2 + 1) * total;
    let mut edge = 0u32;
    for (i, &w) in weights.iter().enumerate() {
        edge += w as u32;
        if scaled < edge * 2 * len as u32 {
            return i;
        }
    }
    weights.len() - 1
}

fn horizontal(y: u16, height: u16, colors: &[Color], weights: &[u16]) -> Color {
    colors[band(y, height, weights)]
}

fn vertical(x: u16, width: u16, colors: &[Color]) -> Color {
    colors[band(x, width, &[1, 1, 1])]
}

fn us(x: u16, y: u16, width: u16, height: u16) -> Color {
    let stripe = band(y, height, &[1; 13]);
    // Canton covers the top seven stripes and two fifths of the width.
    if stripe < 7 && band(x, width, &[2, 3]) == 0 {
        return NAVY;
    }
    if stripe % 2 == 0 {
        RED
    } else {
        WHITE
    }
}

fn uk(x: u16, y: u16, width: u16, height: u16) -> Color {
    let u = (x as f32 + 0.5) / width.max(1) as f32 - 0.5;
    let v = (y as f32 + 0.5) / height.max(1) as f32 - 0.5;

    if u.abs() < 0.06 || v.abs() < 0.1 {
        return RED;
    }
    if u.abs() < 0.12 || v.abs() < 0.2 {
        return WHITE;
    }
    let diagonal = (u - v).abs().min((u + v).abs());
    if diagonal < 0.04 {
        RED
    } else if diagonal < 0.1 {
        WHITE
    } else {
        NAVY
    }
}

pub fn cell_color(country: Country, x: u16, y: u16, width: u16, height: u16) -> Color {
    match country {
        Country::Estonia => horizontal(y, height, &[BLUE, BLACK, WHITE], &[1, 1, 1]),
        Country::France => vertical(x, width, &[NAVY, WHITE, RED]),
        Country::Germany => horizontal(y, height, &[BLACK, RED, GOLD], &[1, 1, 1]),
        Country::Ireland => vertical(x, width, &[GREEN, WHITE, ORANGE]),
        Country::Italy => vertical(x, width, &[GREEN, WHITE, RED]),
        Country::Nigeria => vertical(x, width, &[EMERALD, WHITE, EMERALD]),
        Country::Poland => horizontal(y, height, &[WHITE, RED], &[1, 1]),
        Country::Spain => horizontal(y, height, &[RED, YELLOW, RED], &[1, 2, 1]),
        Country::Uk => uk(x, y, width, height),
        Country::Us => us(x, y, width, height),
    }
}

pub fn flag_lines(country: Country, width: u16, height: u16) -> Vec<Line<'static>> {
    (0..height)
        .map(|y| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run: Option<(Color, usize)> = None;
            for x in 0..width {
                let color = cell_color(country, x, y, width, height);
                run = match run {
                    Some((c, n)) if c == color => Some((c, n + 1)),
                    Some((c, n)) => {
                        spans.push(Span::styled(" ".repeat(n), Style::default().bg(c)));
                        Some((color, 1))
                    }
                    None => Some((color, 1)),
                };
            }
            if let Some((c, n)) = run {
                spans.push(Span::styled(" ".repeat(n), Style::default().bg(c)));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_split() {
        assert_eq!(band(0, 9, &[1, 1, 1]), 0);
        assert_eq!(band(4, 9, &[1, 1, 1]), 1);
        assert_eq!(band(8, 9, &[1, 1, 1]), 2);
        assert_eq!(band(0, 8, &[1, 2, 1]), 0);
        assert_eq!(band(3, 8, &[1, 2, 1]), 1);
        assert_eq!(band(7, 8, &[1, 2, 1]), 2);
        assert_eq!(band(0, 0, &[1, 1]), 0);
    }

    #[test]
    fn test_tricolors() {
        assert_eq!(cell_color(Country::France, 0, 0, 12, 6), NAVY);
        assert_eq!(cell_color(Country::France, 11, 5, 12, 6), RED);
        assert_eq!(cell_color(Country::Germany, 5, 0, 12, 6), BLACK);
        assert_eq!(cell_color(Country::Germany, 5, 5, 12, 6), GOLD);
        assert_eq!(cell_color(Country::Poland, 0, 0, 12, 6), WHITE);
        assert_eq!(cell_color(Country::Spain, 0, 3, 12, 8), YELLOW);
    }

    #[test]
    fn test_us_canton_and_stripes() {
        assert_eq!(cell_color(Country::Us, 0, 0, 20, 13), NAVY);
        assert_eq!(cell_color(Country::Us, 19, 0, 20, 13), RED);
        assert_eq!(cell_color(Country::Us, 19, 1, 20, 13), WHITE);
        assert_eq!(cell_color(Country::Us, 0, 12, 20, 13), RED);
    }

    #[test]
    fn test_uk_center_is_red() {
        assert_eq!(cell_color(Country::Uk, 10, 5, 21, 11), RED);
    }

    #[test]
    fn test_lines_cover_area() {
        let lines = flag_lines(Country::Italy, 15, 4);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.width(), 15);
            assert_eq!(line.spans.len(), 3);
        }
    }
}
