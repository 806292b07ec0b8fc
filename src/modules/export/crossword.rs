//! Best-effort crossword layout for Rätsel worksheets.
//!
//! Greedy placement: the longest word is seeded horizontally in the middle
//! of the grid, every following word tries to cross an already placed one
//! on a shared letter, and words that fit nowhere are placed on their own
//! free row. No optimality claims; good enough for classroom handouts.

pub const GRID_SIZE: usize = 20;
const MAX_WORDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Across,
    Down,
}

#[derive(Debug)]
pub struct PlacedWord {
    pub number: usize,
    pub word: String,
    pub hint: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

#[derive(Debug)]
pub struct CrosswordGrid {
    pub cells: Vec<Vec<Option<char>>>,
    pub words: Vec<PlacedWord>,
}

impl CrosswordGrid {
    /// Rows of the grid as display strings, letters for the solution and
    /// underscores for the blank worksheet.
    pub fn render_rows(&self, show_letters: bool) -> Vec<String> {
        let (min_row, max_row, min_col, max_col) = self.bounds();
        (min_row..=max_row)
            .map(|r| {
                (min_col..=max_col)
                    .map(|c| match self.cells[r][c] {
                        Some(ch) if show_letters => ch,
                        Some(_) => '_',
                        None => ' ',
                    })
                    .flat_map(|ch| [ch, ' '])
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn bounds(&self) -> (usize, usize, usize, usize) {
        let mut min_row = GRID_SIZE;
        let mut max_row = 0;
        let mut min_col = GRID_SIZE;
        let mut max_col = 0;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    min_row = min_row.min(r);
                    max_row = max_row.max(r);
                    min_col = min_col.min(c);
                    max_col = max_col.max(c);
                }
            }
        }
        if min_row > max_row {
            return (0, 0, 0, 0);
        }
        (min_row, max_row, min_col, max_col)
    }
}

pub fn build_grid(entries: &[(String, String)]) -> CrosswordGrid {
    let mut words: Vec<(String, String)> = entries
        .iter()
        .map(|(w, h)| (normalize(w), h.clone()))
        .filter(|(w, _)| !w.is_empty() && w.chars().count() <= GRID_SIZE)
        .collect();
    words.sort_by_key(|(w, _)| std::cmp::Reverse(w.chars().count()));
    words.truncate(MAX_WORDS);

    let mut grid = CrosswordGrid {
        cells: vec![vec![None; GRID_SIZE]; GRID_SIZE],
        words: Vec::new(),
    };

    for (index, (word, hint)) in words.into_iter().enumerate() {
        let placement = if grid.words.is_empty() {
            let row = GRID_SIZE / 2;
            let col = (GRID_SIZE - word.chars().count()) / 2;
            Some((row, col, Direction::Across))
        } else {
            find_crossing(&grid, &word).or_else(|| find_free_row(&grid, &word))
        };

        if let Some((row, col, direction)) = placement {
            place(&mut grid, index + 1, &word, &hint, row, col, direction);
        }
    }

    grid
}

fn normalize(word: &str) -> String {
    word.trim()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_uppercase()
}

fn find_crossing(grid: &CrosswordGrid, word: &str) -> Option<(usize, usize, Direction)> {
    let chars: Vec<char> = word.chars().collect();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let Some(cell) = grid.cells[r][c] else {
                continue;
            };
            for (offset, &ch) in chars.iter().enumerate() {
                if ch != cell {
                    continue;
                }
                // Try vertical through (r, c).
                if r >= offset
                    && fits(grid, &chars, r - offset, c, Direction::Down)
                {
                    return Some((r - offset, c, Direction::Down));
                }
                // Try horizontal through (r, c).
                if c >= offset
                    && fits(grid, &chars, r, c - offset, Direction::Across)
                {
                    return Some((r, c - offset, Direction::Across));
                }
            }
        }
    }
    None
}

fn fits(grid: &CrosswordGrid, chars: &[char], row: usize, col: usize, direction: Direction) -> bool {
    let len = chars.len();
    match direction {
        Direction::Across => {
            if col + len > GRID_SIZE {
                return false;
            }
            let mut crossings = 0;
            for (i, &ch) in chars.iter().enumerate() {
                match grid.cells[row][col + i] {
                    Some(existing) if existing == ch => crossings += 1,
                    Some(_) => return false,
                    None => {
                        // No touching parallel words above or below.
                        if (row > 0 && grid.cells[row - 1][col + i].is_some())
                            || (row + 1 < GRID_SIZE && grid.cells[row + 1][col + i].is_some())
                        {
                            return false;
                        }
                    }
                }
            }
            // No letter directly before or after the word.
            if col > 0 && grid.cells[row][col - 1].is_some() {
                return false;
            }
            if col + len < GRID_SIZE && grid.cells[row][col + len].is_some() {
                return false;
            }
            crossings > 0
        }
        Direction::Down => {
            if row + len > GRID_SIZE {
                return false;
            }
            let mut crossings = 0;
            for (i, &ch) in chars.iter().enumerate() {
                match grid.cells[row + i][col] {
                    Some(existing) if existing == ch => crossings += 1,
                    Some(_) => return false,
                    None => {
                        if (col > 0 && grid.cells[row + i][col - 1].is_some())
                            || (col + 1 < GRID_SIZE && grid.cells[row + i][col + 1].is_some())
                        {
                            return false;
                        }
                    }
                }
            }
            if row > 0 && grid.cells[row - 1][col].is_some() {
                return false;
            }
            if row + len < GRID_SIZE && grid.cells[row + len][col].is_some() {
                return false;
            }
            crossings > 0
        }
    }
}

/// Fallback for words that cross nothing: first row with enough clearance,
/// leaving an empty row between lanes.
fn find_free_row(grid: &CrosswordGrid, word: &str) -> Option<(usize, usize, Direction)> {
    let len = word.chars().count();
    let clear = |row: isize| -> bool {
        if row < 0 || row as usize >= GRID_SIZE {
            return true;
        }
        grid.cells[row as usize][..len].iter().all(|c| c.is_none())
    };
    for r in 0..GRID_SIZE as isize {
        if clear(r) && clear(r - 1) && clear(r + 1) {
            return Some((r as usize, 0, Direction::Across));
        }
    }
    None
}

fn place(
    grid: &mut CrosswordGrid,
    number: usize,
    word: &str,
    hint: &str,
    row: usize,
    col: usize,
    direction: Direction,
) {
    for (i, ch) in word.chars().enumerate() {
        match direction {
            Direction::Across => grid.cells[row][col + i] = Some(ch),
            Direction::Down => grid.cells[row + i][col] = Some(ch),
        }
    }
    grid.words.push(PlacedWord {
        number,
        word: word.to_string(),
        hint: hint.to_string(),
        row,
        col,
        direction,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, hint: &str) -> (String, String) {
        (word.to_string(), hint.to_string())
    }

    #[test]
    fn test_first_word_is_seeded_horizontally() {
        let grid = build_grid(&[entry("BRUCH", "Teil eines Ganzen")]);

        assert_eq!(grid.words.len(), 1);
        assert_eq!(grid.words[0].direction, Direction::Across);
        assert_eq!(grid.words[0].row, GRID_SIZE / 2);
    }

    #[test]
    fn test_second_word_crosses_on_shared_letter() {
        let grid = build_grid(&[entry("NENNER", "Untere Zahl"), entry("ZAEHLER", "Obere Zahl")]);

        assert_eq!(grid.words.len(), 2);
        let crossed = grid
            .words
            .iter()
            .any(|w| w.direction == Direction::Down);
        assert!(crossed, "expected one word placed vertically");
    }

    #[test]
    fn test_word_limit_is_enforced() {
        let entries: Vec<(String, String)> = (0..15)
            .map(|i| entry(&format!("WORT{i:02}"), "Hinweis"))
            .collect();

        let grid = build_grid(&entries);

        assert!(grid.words.len() <= 10);
    }

    #[test]
    fn test_render_hides_letters_on_worksheet() {
        let grid = build_grid(&[entry("QUADRAT", "Viereck")]);

        let blank = grid.render_rows(false).join("\n");
        let solved = grid.render_rows(true).join("\n");

        assert!(!blank.contains('Q'));
        assert!(solved.contains('Q'));
    }
}
