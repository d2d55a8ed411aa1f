use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use test_log::test;

use isohedral_tiles::base::{path_vector, seed_polygon, CriterionKind, Word, DEFAULT_MAX_BOUNDARY_LEN};
use isohedral_tiles::{factorize, factorize_boundary, TilingReport};

#[rstest]
#[case::translation("rrddrurddrdllldldluullurrruluu", CriterionKind::Translation)]
#[case::half_turn(
    "rddrurdruuurdrdrdrdldrddrdllululdddluldluullurrulllllurruuur",
    CriterionKind::HalfTurn
)]
#[case::quarter_turn(
    "druuurddrurrddrdlldrrrdlddrdldluldluullurullurulluur",
    CriterionKind::QuarterTurn
)]
#[case::type_one_reflection(
    "rrrdrdddrurdddddlulddlullldluululuuurururu",
    CriterionKind::TypeOneReflection
)]
#[case::type_two_reflection(
    "ruuurddrrddldrrrdlddddllluuldddlulluuuuluulurrrurd",
    CriterionKind::TypeTwoReflection
)]
#[case::type_one_half_turn_reflection(
    "urrdrrdlddlddldrrrrdldllulldlullurrululurrullururr",
    CriterionKind::TypeOneHalfTurnReflection
)]
#[case::type_two_half_turn_reflection(
    "drdrdllddrurddddlllddldluurulluulluurdruurdruulurrur",
    CriterionKind::TypeTwoHalfTurnReflection
)]
fn orchestrator_matches_expected_kind(#[case] input: &str, #[case] expected: CriterionKind) {
    let word = Word::parse_boundary(input, DEFAULT_MAX_BOUNDARY_LEN).unwrap();
    let bw = factorize(&word).unwrap_or_else(|| panic!("expected a match for {input}"));
    assert_eq!(bw.kind, expected, "input {input}");
}

#[test]
fn factorization_contents_reconstruct_a_rotation_of_the_word() {
    let input = "rrddrurddrdllldldluullurrruluu";
    let word = Word::parse_boundary(input, DEFAULT_MAX_BOUNDARY_LEN).unwrap();
    let bw = factorize(&word).unwrap();

    let total_len: usize = bw.factorization.iter().map(|f| f.len()).sum();
    assert_eq!(total_len, word.len());

    for window in bw.factorization.windows(2) {
        let expected_next_start = (window[0].finish % word.len()) + 1;
        assert_eq!(window[1].start, expected_next_start);
    }
}

#[test]
fn unit_square_admits_translation_with_three_single_letter_factors() {
    for rotation in ["urdl", "rdlu", "dlur", "lurd"] {
        let word = Word::parse_boundary(rotation, DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        let bw = factorize(&word).unwrap_or_else(|| panic!("expected a match for {rotation}"));
        assert_eq!(bw.kind, CriterionKind::Translation);
    }
}

#[test]
fn non_closing_path_is_rejected() {
    assert!(Word::parse_boundary("uu", DEFAULT_MAX_BOUNDARY_LEN).is_err());
}

#[test]
fn empty_input_is_rejected() {
    assert!(Word::parse_boundary("", DEFAULT_MAX_BOUNDARY_LEN).is_err());
}

#[test]
fn malformed_alphabet_is_rejected() {
    assert!(factorize_boundary("uuxd").is_err());
}

#[test]
fn path_vector_is_zero_for_every_accepted_boundary() {
    for input in [
        "urdl",
        "rrddrurddrdllldldluullurrruluu",
        "druuurddrurrddrdlldrrrdlddrdldluldluullurullurulluur",
    ] {
        let word = Word::parse_boundary(input, DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        assert_eq!(path_vector(&word), nalgebra::Vector2::new(0, 0));
    }
}

#[test]
fn full_pipeline_produces_a_tiling_that_includes_the_seed() {
    let window = isohedral_tiles::TilingWindow::new(6, 6);
    let report = TilingReport::new("urdl", window).unwrap().unwrap();
    let seed = seed_polygon(&report.word);
    assert!(report.tiling.contains(&seed));
}

#[test]
fn random_rectangles_admit_translation() {
    let mut rng: StdRng = StdRng::from_seed([7; 32]);
    for _ in 0..64 {
        let w = rng.gen_range(1..8);
        let h = rng.gen_range(1..8);
        let boundary = format!("{}{}{}{}", "u".repeat(h), "r".repeat(w), "d".repeat(h), "l".repeat(w));
        let bw = factorize_boundary(&boundary)
            .unwrap()
            .unwrap_or_else(|| panic!("expected a match for {boundary}"));
        assert_eq!(bw.kind, CriterionKind::Translation);
    }
}

#[test]
fn factorization_round_trips_through_json() {
    let input = "rrddrurddrdllldldluullurrruluu";
    let word = Word::parse_boundary(input, DEFAULT_MAX_BOUNDARY_LEN).unwrap();
    let bw = factorize(&word).unwrap();

    let encoded = serde_json::to_string(&bw).unwrap();
    let decoded: isohedral_tiles::base::BWFactorization = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.kind, bw.kind);
    assert_eq!(decoded.factorization, bw.factorization);
}
