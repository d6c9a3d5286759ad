pub(crate) use super::*;
use crate::primitives::{DType, Matrix};

fn kernel(rows: &[&str], cols: &[&str], data: Vec<f64>) -> LabeledMatrix<f64> {
    let mat = Matrix::from_vec(rows.len(), cols.len(), data)
        .expect("test data has rows * cols elements");
    LabeledMatrix::with_labels(mat, rows.iter().copied(), cols.iter().copied())
        .expect("label counts match")
}

fn abc_identity() -> LabeledMatrix<f64> {
    let mat = Matrix::<f64>::eye(3);
    LabeledMatrix::with_labels(mat, ["A", "B", "C"], ["A", "B", "C"]).expect("label counts match")
}

#[test]
fn test_valid_kernel() {
    assert_eq!(validate_kernel(&abc_identity()), Ok(()));
}

#[test]
fn test_valid_integer_kernel() {
    let mat = Matrix::from_vec(2, 2, vec![2_i32, -1, -1, 2]).expect("2x2 data");
    let k = LabeledMatrix::with_labels(mat, ["A", "B"], ["A", "B"]).expect("label counts match");
    assert!(validate_kernel(&k).is_ok());
}

#[test]
fn test_non_square_reports_counts() {
    let k = kernel(&["A", "B", "C"], &["A", "B", "C", "D"], vec![0.0; 12]);
    let err = validate_kernel(&k).expect_err("3x4 is not square");
    assert_eq!(err, ValidationError::NotSquare { rows: 3, cols: 4 });
    let msg = err.to_string();
    assert!(msg.contains("3 rows"));
    assert!(msg.contains("4 columns"));
}

#[test]
fn test_non_numeric_dtype_checked_before_shape() {
    let mat = Matrix::from_vec(1, 2, vec!["a", "b"]).expect("1x2 data");
    let k = LabeledMatrix::with_labels(mat, ["A"], ["A", "B"]).expect("label counts match");
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::NonNumericDType {
            input: "k",
            dtype: DType::Other,
        })
    );
}

#[test]
fn test_missing_row_labels() {
    let cols = vec![Some("A".into()), Some("B".into())];
    let k = LabeledMatrix::new(Matrix::<f64>::eye(2), Vec::new(), cols)
        .expect("empty row labels are representable");
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::EmptyLabels {
            input: "k",
            axis: Axis::Row,
        })
    );
}

#[test]
fn test_missing_column_labels() {
    let rows = vec![Some("A".into()), Some("B".into())];
    let k = LabeledMatrix::new(Matrix::<f64>::eye(2), rows, Vec::new())
        .expect("empty column labels are representable");
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::EmptyLabels {
            input: "k",
            axis: Axis::Column,
        })
    );
}

#[test]
fn test_empty_kernel_has_no_labels() {
    let k = LabeledMatrix::unlabeled(Matrix::<f64>::zeros(0, 0));
    assert!(matches!(
        validate_kernel(&k),
        Err(ValidationError::EmptyLabels { .. })
    ));
}

#[test]
fn test_same_labels_different_order() {
    let k = kernel(&["A", "B", "C"], &["A", "C", "B"], Matrix::<f64>::eye(3).as_slice().to_vec());
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::LabelMismatch {
            position: 1,
            row: "B".into(),
            col: "C".into(),
        })
    );
}

#[test]
fn test_missing_value() {
    let mat =
        Matrix::from_vec(2, 2, vec![Some(1.0), None, Some(0.5), Some(1.0)]).expect("2x2 data");
    let k = LabeledMatrix::with_labels(mat, ["A", "B"], ["A", "B"]).expect("label counts match");
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::MissingValue {
            input: "k",
            row: "A".into(),
            col: "B".into(),
        })
    );
}

#[test]
fn test_nan_value() {
    let k = kernel(&["A", "B"], &["A", "B"], vec![1.0, 0.0, f64::NAN, 1.0]);
    assert!(matches!(
        validate_kernel(&k),
        Err(ValidationError::NotANumber { .. })
    ));
}

#[test]
fn test_missing_label_on_both_axes() {
    let labels: Vec<Option<String>> = vec![Some("A".into()), Some("nan".into())];
    let k = LabeledMatrix::new(Matrix::<f64>::eye(2), labels.clone(), labels)
        .expect("label counts match");
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::MissingLabel {
            input: "k",
            axis: Axis::Column,
            index: 1,
        })
    );
}

#[test]
fn test_duplicate_labels() {
    let k = kernel(&["A", "B", "A"], &["A", "B", "A"], Matrix::<f64>::eye(3).as_slice().to_vec());
    assert_eq!(
        validate_kernel(&k),
        Err(ValidationError::DuplicateLabel {
            axis: Axis::Row,
            label: "A".into(),
        })
    );
}

#[test]
fn test_first_duplicate() {
    let labels: Vec<Option<String>> = ["x", "y", "z", "y"]
        .iter()
        .map(|s| Some((*s).to_string()))
        .collect();
    assert_eq!(first_duplicate(&labels), Some("y".to_string()));
    assert_eq!(first_duplicate(&labels[..3]), None);
}

#[test]
fn test_first_label_mismatch_on_length() {
    let rows: Vec<Option<String>> = vec![Some("A".into()), Some("B".into()), Some("C".into())];
    let cols: Vec<Option<String>> = rows[..2].to_vec();
    assert_eq!(first_label_mismatch(&rows, &cols), Some(2));
    assert_eq!(first_label_mismatch(&cols, &rows), Some(2));
    assert_eq!(first_label_mismatch(&rows, &rows), None);
}

#[test]
fn test_deserialized_kernel_with_extra_row_label_is_rejected() {
    let json = r#"{
        "mat": {"data": [1.0, 0.0, 0.0, 1.0], "rows": 2, "cols": 2},
        "row_labels": ["A", "B", "C"],
        "col_labels": ["A", "B"]
    }"#;
    assert!(serde_json::from_str::<LabeledMatrix<f64>>(json).is_err());
}

#[test]
fn test_kernel_not_checked_for_definiteness() {
    // Indefinite but formally valid
    let k = kernel(&["A", "B"], &["A", "B"], vec![0.0, 1.0, 1.0, 0.0]);
    assert!(validate_kernel(&k).is_ok());
}
