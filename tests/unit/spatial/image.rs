//! Tests for rectangular boolean grid construction and access

#[cfg(test)]
mod tests {
    use gridpreimage::PreimageError;
    use gridpreimage::spatial::BoolImage;
    use ndarray::Array2;

    // Tests dimensions and cell access of a valid grid
    // Verified by swapping rows and cols in from_shape_vec
    #[test]
    fn test_from_rows_dimensions() {
        let image = BoolImage::from_rows(&[vec![true, false, false], vec![false, true, false]])
            .unwrap();
        assert_eq!(image.rows(), 2);
        assert_eq!(image.cols(), 3);
        assert_eq!(image.get(1, 1), Some(true));
        assert_eq!(image.get(0, 2), Some(false));
        assert_eq!(image.get(2, 0), None);
    }

    // Tests empty inputs are rejected
    // Verified by removing the zero-width check
    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            BoolImage::from_rows(&[]),
            Err(PreimageError::EmptyImage)
        ));
        assert!(matches!(
            BoolImage::from_rows(&[vec![], vec![]]),
            Err(PreimageError::EmptyImage)
        ));
        assert!(matches!(
            BoolImage::from_array(Array2::from_elem((0, 3), false)),
            Err(PreimageError::EmptyImage)
        ));
    }

    // Tests ragged rows report the offending row
    // Verified by reporting the expected length as found
    #[test]
    fn test_ragged_rejected() {
        let result = BoolImage::from_rows(&[vec![true, true], vec![true, true], vec![true]]);
        match result {
            Err(PreimageError::RaggedRows {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => unreachable!("Expected RaggedRows, got {other:?}"),
        }
    }

    // Tests transposition swaps coordinates
    // Verified by returning a clone from transposed()
    #[test]
    fn test_transposed() {
        let image = BoolImage::from_rows(&[vec![true, false, false]]).unwrap();
        let transposed = image.transposed();
        assert_eq!((transposed.rows(), transposed.cols()), (3, 1));
        assert_eq!(transposed.get(0, 0), Some(true));
        assert_eq!(transposed.get(2, 0), Some(false));
        assert_eq!(transposed.transposed(), image);
    }

    // Tests row iteration preserves order and contents
    // Verified by iterating over columns instead of rows
    #[test]
    fn test_iter_rows() {
        let rows = vec![vec![true, false], vec![false, false], vec![true, true]];
        let image = BoolImage::from_rows(&rows).unwrap();
        let collected: Vec<Vec<bool>> = image.iter_rows().collect();
        assert_eq!(collected, rows);
        assert_eq!(image.row(2), Some(vec![true, true]));
        assert_eq!(image.row(3), None);
        assert_eq!(image.count_set(), 3);
    }

    // Tests display renders one line per row
    // Verified by omitting the newline between rows
    #[test]
    fn test_display() {
        let image = BoolImage::from_rows(&[vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(image.to_string(), "#.\n.#");
    }
}
