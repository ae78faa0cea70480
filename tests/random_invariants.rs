use pizza_slicer::algorithms::greedy::{expander, selector};
use pizza_slicer::cover::Cover;
use pizza_slicer::grid::{Direction, Grid, Ingredient, LabeledRect, Limits};
use pizza_slicer::{GreedySlicer, SlicerConfig, SlicingAlgorithm};
use proptest::prelude::*;

const MAX_SIDE: usize = 8;

fn grids() -> impl Strategy<Value = Grid> {
    (
        1usize..=MAX_SIDE,
        1usize..=MAX_SIDE,
        1usize..=2,
        0usize..=6,
        prop::collection::vec(any::<bool>(), MAX_SIDE * MAX_SIDE),
    )
        .prop_map(|(rows, columns, min_each, extra, tomatoes)| {
            let limits = Limits::new(min_each, 2 * min_each + extra).unwrap();
            let cells = tomatoes[..rows * columns]
                .iter()
                .map(|&t| if t { Ingredient::Tomato } else { Ingredient::Mushroom })
                .collect();
            Grid::new(rows, columns, limits, cells).unwrap()
        })
}

fn overlapping_pair(cover: &Cover<'_>) -> Option<(usize, usize)> {
    let slices = cover.slices();
    (0..slices.len()).find_map(|i| {
        (i + 1..slices.len())
            .find(|&j| slices[i].bounds().overlaps(&slices[j].bounds()))
            .map(|j| (i, j))
    })
}

proptest! {
    #[test]
    fn covers_are_disjoint_and_valid(grid in grids()) {
        let cover = GreedySlicer::default().cut(&grid).unwrap();

        prop_assert_eq!(overlapping_pair(&cover), None);
        let total: usize = cover.iter().map(|s| s.cell_count()).sum();
        prop_assert_eq!(total, cover.claimed_cells());
        prop_assert_eq!(cover.validate(&grid.limits()), Ok(()));
    }

    #[test]
    fn cutting_is_deterministic(grid in grids()) {
        let slicer = GreedySlicer::default();
        let first = slicer.cut(&grid).unwrap();
        let second = slicer.cut(&grid).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn claimed_cells_never_decrease(grid in grids()) {
        let selected =
            selector::select(&grid, grid.region(), &SlicerConfig::selection_only(), 0).unwrap();

        let no_expand = SlicerConfig {
            expand: false,
            ..SlicerConfig::default()
        };
        let mut cover = selector::select(&grid, grid.region(), &no_expand, 0).unwrap();
        prop_assert_eq!(cover.claimed_cells(), selected.claimed_cells());

        let before = cover.claimed_cells();
        let max_cells = grid.limits().max_cells;
        let steps = expander::expand(&mut cover, max_cells).unwrap();
        prop_assert!(cover.claimed_cells() >= before);
        prop_assert_eq!(overlapping_pair(&cover), None);

        for index in 0..cover.len() {
            for direction in Direction::PRIORITY {
                let attempts = steps
                    .iter()
                    .filter(|s| s.slice == index && s.direction == direction)
                    .count();
                prop_assert!(attempts <= max_cells);
            }
        }
    }

    #[test]
    fn depth_cap_matches_selection_without_recursion(grid in grids()) {
        let capped = GreedySlicer::new(SlicerConfig {
            expand: false,
            max_depth: 0,
            ..SlicerConfig::default()
        })
        .cut(&grid)
        .unwrap();
        let plain = GreedySlicer::new(SlicerConfig::selection_only())
            .cut(&grid)
            .unwrap();
        prop_assert_eq!(capped.to_string(), plain.to_string());
    }
}
