//! muB/fu <-> T 특수 경로 회귀 테스트.
use magnet_units::constants::{MU_0, MU_B};
use magnet_units::lattice::{mub_per_fu_to_tesla, tesla_to_mub_per_fu, CellGeometry, LatticeParams};
use magnet_units::{convert_unit, convert_unit_verbose, ConversionError};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff == 0.0 || diff <= rel_tol * expected.abs(),
        "{label} expected {expected:e} got {actual:e} (diff {diff:e}, tol {rel_tol})"
    );
}

fn tetragonal() -> LatticeParams {
    LatticeParams::new(3.0, 3.0, 4.0, 90.0, 2)
}

#[test]
fn orthogonal_reference_point() {
    let lp = tetragonal();
    assert_close("volume", lp.cell_volume_m3().expect("volume"), 3.6e-29, 1e-12);
    let tesla = convert_unit(2.3, "muB/fu", "T", Some(&lp)).expect("muB/fu->T");
    assert_close("T", tesla, 1.48913, 1e-5);
    let back = convert_unit(tesla, "T", "muB/fu", Some(&lp)).expect("T->muB/fu");
    assert_close("muB/fu", back, 2.3, 1e-12);
}

#[test]
fn hexagonal_volume_uses_sin_120() {
    let lp = LatticeParams::new(3.0, 3.0, 4.0, 120.0, 1);
    let expected = 3e-10 * 3e-10 * 4e-10 * 3f64.sqrt() / 2.0;
    assert_close("volume", lp.cell_volume_m3().expect("volume"), expected, 1e-12);
    assert_eq!(lp.validate(), Ok(CellGeometry::Hexagonal));
}

#[test]
fn hexagonal_conversion_end_to_end() {
    let hex = LatticeParams::new(3.0, 3.0, 4.0, 120.0, 1);
    let volume = 3e-10 * 3e-10 * 4e-10 * 3f64.sqrt() / 2.0;
    let tesla = convert_unit(2.3, "muB/fu", "T", Some(&hex)).expect("hex muB/fu->T");
    assert_close("hex T", tesla, 2.3 * MU_B / volume * MU_0, 1e-12);
    // 같은 a b c 에서 f.u. 가 절반이고 부피가 sin 120° 배
    let ortho = convert_unit(2.3, "muB/fu", "T", Some(&tetragonal())).expect("ortho");
    assert_close("hex/ortho", tesla / ortho, 0.5 / (3f64.sqrt() / 2.0), 1e-12);
    let back = convert_unit(tesla, "T", "muB/fu", Some(&hex)).expect("hex T->muB/fu");
    assert_close("hex back", back, 2.3, 1e-12);
}

#[test]
fn direct_helpers_are_inverse() {
    let lp = LatticeParams::new(5.1, 5.1, 12.4, 120.0, 6);
    for x in [0.0, 1.0, -0.75, 14.2] {
        let t = mub_per_fu_to_tesla(x, &lp).expect("to T");
        assert_close(&format!("{x}"), tesla_to_mub_per_fu(t, &lp).expect("to muB/fu"), x, 1e-12);
    }
}

#[test]
fn tesla_prefix_applies_on_lattice_path() {
    let lp = tetragonal();
    let t = convert_unit(2.3, "muB/fu", "T", Some(&lp)).expect("T");
    let mt = convert_unit(2.3, "muB/fu", "mT", Some(&lp)).expect("mT");
    assert_close("mT", mt, t * 1e3, 1e-12);
    let back = convert_unit(mt, "mT", "muB/fu", Some(&lp)).expect("mT->muB/fu");
    assert_close("back", back, 2.3, 1e-12);
}

#[test]
fn unsupported_gamma() {
    let lp = LatticeParams::new(3.0, 3.0, 4.0, 45.0, 2);
    assert_eq!(
        convert_unit(1.0, "muB/fu", "T", Some(&lp)),
        Err(ConversionError::UnsupportedGeometry(45.0))
    );
}

#[test]
fn invalid_lattice_values() {
    let cases = [
        LatticeParams::new(-3.0, 3.0, 4.0, 90.0, 2),
        LatticeParams::new(3.0, 0.0, 4.0, 90.0, 2),
        LatticeParams::new(3.0, 3.0, f64::NAN, 90.0, 2),
        LatticeParams::new(3.0, 3.0, 4.0, 90.0, 0),
        // 길이 검사가 gamma 검사보다 먼저
        LatticeParams::new(-3.0, 3.0, 4.0, 45.0, 2),
    ];
    for lp in cases {
        assert!(
            matches!(
                convert_unit(1.0, "T", "muB/fu", Some(&lp)),
                Err(ConversionError::InvalidLatticeInput(_))
            ),
            "{lp:?}"
        );
    }
}

#[test]
fn missing_lattice_is_invalid_input() {
    assert!(matches!(
        convert_unit(1.0, "muB/fu", "T", None),
        Err(ConversionError::InvalidLatticeInput(_))
    ));
}

#[test]
fn lattice_is_ignored_for_table_pairs() {
    let lp = LatticeParams::new(3.0, 3.0, 4.0, 45.0, 2);
    assert_eq!(convert_unit(1.0, "T", "G", Some(&lp)), Ok(1e4));
}

#[test]
fn moment_per_fu_has_no_table_edges() {
    assert!(matches!(
        convert_unit(1.0, "muB/fu", "A/m", Some(&tetragonal())),
        Err(ConversionError::UnsupportedConversion { .. })
    ));
}

#[test]
fn verbose_report_includes_cell_volume() {
    let report = convert_unit_verbose(2.3, "muB/fu", "T", Some(&tetragonal())).expect("report");
    assert!(report.factor.is_none());
    let details = report.lattice.expect("lattice details");
    assert_eq!(details.formula_units_per_cell, 2);
    let text = report.to_string();
    assert!(text.starts_with("2.3 muB/fu = 1.48913 T"), "{text}");
    assert!(text.contains("(2 f.u./unit cell, cell volume = 3.600e-29 m^3)"), "{text}");
}

#[test]
fn lattice_params_deserialize_from_toml() {
    let lp: LatticeParams = toml::from_str(
        "a = 3.0\nb = 3.0\nc = 4.0\ngamma = 90.0\nformula_units_per_cell = 2\n",
    )
    .expect("toml");
    assert_eq!(lp, tetragonal());
}
