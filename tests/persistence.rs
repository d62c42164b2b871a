use linsolve::generate::hilbert;
use linsolve::{DenseMatrix, MatrixGenerator, Persist, RowColumnSymMatrix, SkylineMatrix};
use rand::distributions::{Distribution, Uniform};

const BANDS: [isize; 6] = [1, -1, 2, -2, 4, -4];

fn real_draws() -> impl Distribution<f64> {
    Uniform::new(-1.0, 1.0)
}

#[test]
fn dense_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let a: DenseMatrix<f64> = MatrixGenerator::seeded(1).diagonally_dominant(9, 0.25, &BANDS, &real_draws());
    a.write_to(tmp.path()).unwrap();
    let b = DenseMatrix::<f64>::read_from(tmp.path()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn skyline_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let a: SkylineMatrix<f64> = MatrixGenerator::seeded(2).diagonally_dominant(15, 0.25, &BANDS, &real_draws());
    a.write_to(tmp.path()).unwrap();
    let b = SkylineMatrix::<f64>::read_from(tmp.path()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sym_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let a: RowColumnSymMatrix<f64> = hilbert(12, &BANDS);
    a.write_to(tmp.path()).unwrap();
    let b = RowColumnSymMatrix::<f64>::read_from(tmp.path()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn f32_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let a: SkylineMatrix<f32> = hilbert(7, &[1, -3]);
    a.write_to(tmp.path()).unwrap();
    assert_eq!(SkylineMatrix::<f32>::read_from(tmp.path()).unwrap(), a);
}

#[test]
fn one_generated_matrix_shared_by_three_formats() {
    // A harness writes each format once, then compares solvers on reloads.
    let tmp = tempfile::tempdir().unwrap();
    let dist = Uniform::new_inclusive(-4, 0).map(f64::from);
    let seed = 31;

    let dense: DenseMatrix<f64> = MatrixGenerator::seeded(seed).diagonally_dominant(20, 1.0, &BANDS, &dist);
    let sky: SkylineMatrix<f64> = MatrixGenerator::seeded(seed).diagonally_dominant(20, 1.0, &BANDS, &dist);
    let sym: RowColumnSymMatrix<f64> = MatrixGenerator::seeded(seed).diagonally_dominant(20, 1.0, &BANDS, &dist);

    dense.write_to(&tmp.path().join("dense")).unwrap();
    sky.write_to(&tmp.path().join("skyline")).unwrap();
    sym.write_to(&tmp.path().join("sym")).unwrap();

    let dense = DenseMatrix::<f64>::read_from(&tmp.path().join("dense")).unwrap();
    let sky = SkylineMatrix::<f64>::read_from(&tmp.path().join("skyline")).unwrap();
    let sym = RowColumnSymMatrix::<f64>::read_from(&tmp.path().join("sym")).unwrap();

    assert_eq!(DenseMatrix::from(&sky), dense);
    assert_eq!(DenseMatrix::from(&sym), dense);
}

#[test]
fn files_are_whitespace_separated() {
    let tmp = tempfile::tempdir().unwrap();
    let a = SkylineMatrix::from_parts(vec![0, 0, 1], vec![2.0_f64, 3.0], vec![-1.0], vec![0.5]);
    a.write_to(tmp.path()).unwrap();
    let read = |name: &str| std::fs::read_to_string(tmp.path().join(name)).unwrap();
    assert_eq!(read("ia.txt"), "0 0 1\n");
    assert_eq!(read("di.txt"), "2 3\n");
    assert_eq!(read("al.txt"), "-1\n");
    assert_eq!(read("au.txt"), "0.5\n");
}
