use log::debug;

use super::{
    half_turn, quarter_turn, translation, type_one_half_turn_reflection, type_one_reflection,
    type_two_half_turn_reflection, type_two_reflection,
};
use crate::base::{BWFactorization, Word};

/// Try the seven boundary criteria in their fixed canonical order and return
/// the first `BWFactorization` that matches.
pub fn anyfactorization(word: &Word) -> Option<BWFactorization> {
    let detectors: [fn(&Word) -> Option<BWFactorization>; 7] = [
        translation::detect,
        half_turn::detect,
        quarter_turn::detect,
        type_one_reflection::detect,
        type_two_reflection::detect,
        type_one_half_turn_reflection::detect,
        type_two_half_turn_reflection::detect,
    ];
    for detect in detectors {
        if let Some(bw) = detect(word) {
            debug!("orchestrator: {} matched", bw.kind);
            return Some(bw);
        }
    }
    debug!("orchestrator: no criterion matched");
    None
}
