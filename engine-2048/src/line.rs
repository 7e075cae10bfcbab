use crate::{can_merge, Cell, Score, GRID_SIZE};

/// Slides and merges one line towards index 0, returning the score gained.
///
/// Non-zero tiles are compacted in order, then equal neighbours are merged
/// scanning from the leading edge. A merged tile is never merged again in
/// the same call, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Two tiles at
/// [`MAX_TILE`](crate::MAX_TILE) stay side by side.
pub fn slide_line(line: &mut [Cell; GRID_SIZE]) -> Score {
    let mut tiles = [0; GRID_SIZE];
    let mut len = 0;

    for &cell in line.iter().filter(|&&cell| cell != 0) {
        tiles[len] = cell;
        len += 1;
    }

    let mut score = 0;
    let mut i = 0;

    while i + 1 < len {
        if can_merge(tiles[i], tiles[i + 1]) {
            tiles[i] *= 2;
            tiles[i + 1] = 0;
            score += tiles[i];
            i += 2;
        } else {
            i += 1;
        }
    }

    let mut out = [0; GRID_SIZE];
    let mut pos = 0;

    for &tile in tiles[..len].iter().filter(|&&tile| tile != 0) {
        out[pos] = tile;
        pos += 1;
    }

    *line = out;

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slid(mut line: [Cell; GRID_SIZE]) -> ([Cell; GRID_SIZE], Score) {
        let score = slide_line(&mut line);
        (line, score)
    }

    #[test]
    fn it_slide_line() {
        assert_eq!(slid([0, 0, 0, 0]), ([0, 0, 0, 0], 0));
        assert_eq!(slid([0, 0, 0, 2]), ([2, 0, 0, 0], 0));
        assert_eq!(slid([2, 4, 2, 4]), ([2, 4, 2, 4], 0));
        assert_eq!(slid([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(slid([4, 4, 8, 8]), ([8, 16, 0, 0], 24));
    }

    #[test]
    fn merge_then_keep_following_tile() {
        assert_eq!(slid([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
        assert_eq!(slid([2, 0, 2, 2]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn merged_tile_not_merged_again() {
        assert_eq!(slid([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
        assert_eq!(slid([4, 2, 2, 0]), ([4, 4, 0, 0], 4));
        assert_eq!(slid([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn large_tiles_merge() {
        assert_eq!(slid([2048, 2048, 0, 0]), ([4096, 0, 0, 0], 4096));
        assert_eq!(slid([0, 1 << 16, 0, 1 << 16]), ([1 << 17, 0, 0, 0], 1 << 17));
    }

    #[test]
    fn max_tiles_do_not_merge() {
        let max = crate::MAX_TILE;

        assert_eq!(slid([max, max, 0, 0]), ([max, max, 0, 0], 0));
        assert_eq!(slid([0, max, 0, max]), ([max, max, 0, 0], 0));
        assert_eq!(slid([max, max, 4, 4]), ([max, max, 8, 0], 8));
    }
}
