#![allow(non_snake_case)]
use coomat::algebra::*;
use std::io::Write;

fn test_matrix_3x4() -> SparseMatrix {
    SparseMatrix::from_entries(
        3,
        4,
        [(0, 0, 5), (0, 3, -2), (1, 1, 8), (2, 0, 1), (2, 3, -11)],
    )
    .unwrap()
}

#[test]
fn test_file_round_trip() {
    let A = test_matrix_3x4();

    // write the matrix to a file
    let mut file = tempfile::NamedTempFile::new().unwrap();
    A.save_to_file(&mut file).unwrap();
    file.flush().unwrap();

    // read the matrix back from the file
    let B: SparseMatrix = SparseMatrix::load_from_file(file.path()).unwrap();
    assert_eq!(A, B);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = SparseMatrix::<i64>::load_from_file("/no/such/matrix.txt").unwrap_err();
    assert!(matches!(err, coomat::io::LoadError::Io(_)));
}

#[test]
fn test_render_is_deterministic_across_instances() {
    // same entries inserted in different orders must render identically
    let A = test_matrix_3x4();
    let mut B = SparseMatrix::zeros(3, 4);
    for (row, col, value) in [(2, 3, -11), (0, 3, -2), (2, 0, 1), (0, 0, 5), (1, 1, 8)] {
        B.set(row, col, value).unwrap();
    }

    assert_eq!(A.render(), B.render());
    assert_eq!(
        A.render(),
        "rows=3\n\
         cols=4\n\
         (0,0,5)\n\
         (0,3,-2)\n\
         (1,1,8)\n\
         (2,0,1)\n\
         (2,3,-11)\n"
    );
}

#[test]
fn test_round_trip_preserves_dimensions_of_empty_matrix() {
    let Z = SparseMatrix::<i64>::zeros(7, 2);
    let back = SparseMatrix::<i64>::load_from_str(&Z.render()).unwrap();
    assert_eq!(back.size(), (7, 2));
    assert!(back.is_empty());
}
