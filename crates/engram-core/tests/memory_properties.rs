//! Associative memory properties
//!
//! Checks that hold for any sequence of learned patterns:
//! 1. The weight matrix stays symmetric with a zero diagonal
//! 2. Accumulation is order independent
//! 3. Stored glyphs are recovered from corrupted queries and identified by the matcher

use engram_core::prelude::*;

fn bv(bits: &[u8]) -> BinaryVector {
    BinaryVector::from_bits(bits).unwrap()
}

/// Deterministic pseudo-random patterns (xorshift), so failures reproduce.
fn patterns(count: usize, len: usize, mut seed: u64) -> Vec<BinaryVector> {
    (0..count)
        .map(|_| {
            let bits: Vec<bool> = (0..len)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    seed & 1 == 1
                })
                .collect();
            BinaryVector::from(bits)
        })
        .collect()
}

#[test]
fn weights_stay_symmetric_with_zero_diagonal() {
    let mut memory = AssociativeMemory::new(16);
    for p in patterns(6, 16, 0x9E37_79B9_7F4A_7C15) {
        memory.learn(&p).unwrap();
        let w = memory.weights();
        assert!(w.is_symmetric());
        assert!(w.has_zero_diagonal());
    }

    let w = memory.weights();
    for i in 0..w.dim() {
        assert_eq!(w.get(i, i), 0.0);
        for j in 0..w.dim() {
            assert_eq!(w.get(i, j), w.get(j, i), "W[{}][{}] != W[{}][{}]", i, j, j, i);
        }
    }
}

#[test]
fn learning_order_does_not_matter() {
    let a = bv(&[1, 1, 0, 0, 1, 0]);
    let b = bv(&[0, 1, 1, 0, 0, 1]);

    let mut ab = AssociativeMemory::new(6);
    ab.learn(&a).unwrap();
    ab.learn(&b).unwrap();

    let mut ba = AssociativeMemory::new(6);
    ba.learn(&b).unwrap();
    ba.learn(&a).unwrap();

    assert_eq!(ab.weights(), ba.weights());
}

#[test]
fn blank_pattern_between_real_ones_changes_nothing() {
    let a = bv(&[1, 0, 0, 1]);
    let mut with_blank = AssociativeMemory::new(4);
    with_blank.learn(&a).unwrap();
    assert_eq!(
        with_blank.learn(&BinaryVector::zeros(4)).unwrap(),
        LearnOutcome::EmptyPattern
    );

    let mut without = AssociativeMemory::new(4);
    without.learn(&a).unwrap();

    assert_eq!(with_blank.weights(), without.weights());
}

#[test]
fn corrupted_glyph_is_recalled_and_identified() {
    let grid = Grid::new(5);
    let cross = grid
        .parse("#...#\n.#.#.\n..#..\n.#.#.\n#...#\n")
        .unwrap();
    let plus = grid
        .parse("..#..\n..#..\n#####\n..#..\n..#..\n")
        .unwrap();

    let mut memory = AssociativeMemory::new(grid.len());
    memory.learn(&cross).unwrap();
    memory.learn(&plus).unwrap();

    // cross with two pixels flipped
    let mut noisy = cross.clone();
    noisy.toggle(grid.index(0, 0).unwrap()).unwrap();
    noisy.toggle(grid.index(2, 0).unwrap()).unwrap();

    let recalled = memory.recall(&noisy).unwrap();
    assert_eq!(recalled, cross);

    let references = [cross.clone(), plus.clone()];
    let tolerance = MatchPolicy::default().tolerance_for(grid.len());
    assert_eq!(tolerance, 2);
    assert_eq!(find_match(&noisy, &references, tolerance).unwrap(), Some(0));
    assert_eq!(find_match(&recalled, &references, 0).unwrap(), Some(0));
}

#[test]
fn shape_errors_surface_from_every_entry_point() {
    let mut memory = AssociativeMemory::new(4);
    let short = bv(&[1, 0]);
    assert!(matches!(
        memory.learn(&short),
        Err(EngramError::ShapeMismatch { expected: 4, actual: 2 })
    ));
    assert!(matches!(
        memory.recall(&short),
        Err(EngramError::ShapeMismatch { expected: 4, actual: 2 })
    ));
    assert!(matches!(
        find_match(&bv(&[1, 0, 0, 0]), &[short], 1),
        Err(EngramError::ShapeMismatch { expected: 4, actual: 2 })
    ));
}
