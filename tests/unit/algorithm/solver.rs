//! Tests for the counting driver, orientation and row propagation

#[cfg(test)]
mod tests {
    use gridpreimage::algorithm::brute_force::brute_force_count;
    use gridpreimage::algorithm::expansion::expand_first_row;
    use gridpreimage::algorithm::solver::RowProgress;
    use gridpreimage::io::configuration::MAX_BOUNDARY_WIDTH;
    use gridpreimage::io::grid_file::parse_grid;
    use gridpreimage::io::random::random_image;
    use gridpreimage::{
        BoolImage, CounterConfig, Orientation, PreimageCounter, PreimageError, count_preimages,
    };
    use num_bigint::BigUint;
    use std::str::FromStr;

    fn counter(orientation: Orientation) -> PreimageCounter {
        PreimageCounter::new(CounterConfig { orientation })
    }

    // Tests the single-cell base cases
    // Verified by summing only the first boundary row
    #[test]
    fn test_single_cell_images() {
        let set = BoolImage::from_rows(&[vec![true]]).unwrap();
        let clear = BoolImage::from_rows(&[vec![false]]).unwrap();
        assert_eq!(count_preimages(&set).unwrap(), BigUint::from(4u32));
        assert_eq!(count_preimages(&clear).unwrap(), BigUint::from(12u32));
    }

    // Tests small images against their exhaustive counts
    // Verified by skipping the last image row in the driver
    #[test]
    fn test_small_images() {
        let cases = [
            ("#", 4u32),
            ("##", 6),
            ("#\n.", 10),
            ("..", 38),
            ("#.#\n.#.\n#.#", 4),
            ("##\n##", 8),
            ("..\n..", 208),
            ("#..#", 28),
            (".\n#\n.", 24),
        ];
        for (text, expected) in cases {
            let image = parse_grid(text).unwrap();
            assert_eq!(
                count_preimages(&image).unwrap(),
                BigUint::from(expected),
                "image:\n{text}"
            );
        }
    }

    // Tests larger reference images
    // Verified by dropping the accumulation of shared lower rows
    #[test]
    fn test_reference_images() {
        let first = parse_grid(
            "##.#.#.##.\n\
             ##....###.\n\
             ##.......#\n\
             .#....##..",
        )
        .unwrap();
        assert_eq!(count_preimages(&first).unwrap(), BigUint::from(11567u32));

        let second = parse_grid(
            "#.#..###\n\
             #.#...#.\n\
             ###...#.\n\
             #.#...#.\n\
             #.#..###",
        )
        .unwrap();
        assert_eq!(count_preimages(&second).unwrap(), BigUint::from(254u32));
    }

    // Tests counts beyond 64 bits are exact
    // Verified by accumulating multiplicities in a u64
    #[test]
    fn test_large_count_does_not_overflow() {
        let image = BoolImage::from_rows(&vec![vec![false; 10]; 10]).unwrap();
        let expected = BigUint::from_str("49001406150402919507454031696").unwrap();
        assert_eq!(count_preimages(&image).unwrap(), expected);
    }

    // Tests every orientation yields the same count
    // Verified by transposing without swapping the cell coordinates
    #[test]
    fn test_orientations_agree() {
        for seed in 0..8 {
            let image = random_image(3, 6, 0.4, seed).unwrap();
            let narrowest = counter(Orientation::Narrowest).count(&image).unwrap();
            let row_major = counter(Orientation::RowMajor).count(&image).unwrap();
            let transposed = counter(Orientation::Transposed).count(&image).unwrap();
            assert_eq!(narrowest, row_major);
            assert_eq!(narrowest, transposed);
        }
    }

    // Tests the narrowest orientation transposes only wide images
    // Verified by comparing rows >= cols in transposes()
    #[test]
    fn test_narrowest_orientation() {
        assert!(Orientation::Narrowest.transposes(2, 5));
        assert!(!Orientation::Narrowest.transposes(5, 2));
        assert!(!Orientation::Narrowest.transposes(3, 3));
        assert!(Orientation::Transposed.transposes(5, 2));
        assert!(!Orientation::RowMajor.transposes(2, 5));

        let wide = BoolImage::from_rows(&[vec![true; 7]]).unwrap();
        let oriented = counter(Orientation::Narrowest).oriented(&wide).into_owned();
        assert_eq!((oriented.rows(), oriented.cols()), (7, 1));
    }

    // Tests images too wide in the walked direction are rejected
    // Verified by removing the width limit in boundary_width
    #[test]
    fn test_too_wide_rejected() {
        let image = BoolImage::from_rows(&vec![vec![false; MAX_BOUNDARY_WIDTH]; 2]).unwrap();
        assert!(matches!(
            counter(Orientation::RowMajor).count(&image),
            Err(PreimageError::ImageTooWide { .. })
        ));
        // Walking the narrow dimension keeps the boundary rows small
        assert!(counter(Orientation::Narrowest).count(&image).is_ok());
    }

    // Tests repeated counting is deterministic
    // Verified by caching the last distribution inside the counter between calls
    #[test]
    fn test_deterministic() {
        let image = random_image(4, 5, 0.3, 7).unwrap();
        let counter = PreimageCounter::default();
        let first = counter.distribution(&image).unwrap();
        let second = counter.distribution(&image).unwrap();
        assert_eq!(first, second);
        assert_eq!(counter.count(&image).unwrap(), first.total());
    }

    // Tests splitting the rows and resuming from the intermediate distribution
    // Verified by restarting from the uniform distribution in propagate
    #[test]
    fn test_row_composability() {
        let image = random_image(6, 4, 0.35, 11).unwrap();
        let rows: Vec<Vec<bool>> = image.iter_rows().collect();
        let counter = counter(Orientation::RowMajor);
        let whole = counter.distribution(&image).unwrap();

        for split in 1..rows.len() {
            let (head, tail) = rows.split_at(split);
            let head_image = BoolImage::from_rows(head).unwrap();
            let partial = counter.distribution(&head_image).unwrap();
            let resumed = PreimageCounter::propagate(partial, tail.to_vec()).unwrap();
            assert_eq!(resumed, whole, "split after row {split}");
        }
    }

    // Tests propagation from the first row matches the driver
    // Verified by skipping the first remaining row in propagate
    #[test]
    fn test_propagate_from_first_row() {
        let image = parse_grid("#..\n.#.\n..#").unwrap();
        let rows: Vec<Vec<bool>> = image.iter_rows().collect();
        let start = expand_first_row(&rows[0]).unwrap();
        let propagated = PreimageCounter::propagate(start, rows[1..].to_vec()).unwrap();
        let direct = counter(Orientation::RowMajor).distribution(&image).unwrap();
        assert_eq!(propagated, direct);
    }

    // Tests progress is reported once per row with increasing completion
    // Verified by reporting before the first row is expanded
    #[test]
    fn test_progress_reports() {
        let image = random_image(4, 3, 0.5, 3).unwrap();
        let mut reports: Vec<RowProgress> = Vec::new();
        let count = counter(Orientation::RowMajor)
            .count_with_progress(&image, |progress| reports.push(progress))
            .unwrap();

        assert_eq!(reports.len(), 4);
        for (index, report) in reports.iter().enumerate() {
            assert_eq!(report.completed, index + 1);
            assert_eq!(report.total, 4);
            assert!(report.boundary_states <= 16);
        }
        assert_eq!(count, brute_force_count(&image).unwrap());
    }

    // Tests an image without preimages yields an empty distribution and zero
    // Verified by returning one for empty distributions
    #[test]
    fn test_zero_count() {
        let image = parse_grid(
            "#####\n\
             ###.#\n\
             .#.##\n\
             #####\n\
             .#.##",
        )
        .unwrap();
        for orientation in [Orientation::RowMajor, Orientation::Transposed] {
            let distribution = counter(orientation).distribution(&image).unwrap();
            assert!(distribution.is_empty());
            assert_eq!(distribution.total(), BigUint::from(0u32));
        }
        assert_eq!(count_preimages(&image).unwrap(), BigUint::from(0u32));
    }
}
