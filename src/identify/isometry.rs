use log::debug;

use crate::base::{
    content_vector, is_palindrome, reflection_angle, seed_polygon, vertex_at, vertex_index, wrap1,
    BWFactorization, CriterionKind, Factor, Polygon, TilingError, Transform, Vec2, Word,
};

/// Given the boundary word and a successful `BWFactorization`, build the
/// ordered list of neighbor transforms per §4.5. Presumes the factorization
/// is valid for its kind; returns `InternalInvariantViolated` on shape
/// mismatches the detectors should never produce.
pub fn build_transforms(word: &Word, bw: &BWFactorization) -> Result<Vec<Transform>, TilingError> {
    let poly = seed_polygon(word);
    let f = &bw.factorization;
    match bw.kind {
        CriterionKind::Translation => translation_transforms(&poly, f),
        CriterionKind::HalfTurn => half_turn_transforms(&poly, f),
        CriterionKind::QuarterTurn => quarter_turn_transforms(&poly, f),
        CriterionKind::TypeOneReflection => type_one_reflection_transforms(&poly, f),
        CriterionKind::TypeTwoReflection => type_two_reflection_transforms(&poly, f),
        CriterionKind::TypeOneHalfTurnReflection => type_one_half_turn_reflection_transforms(&poly, f),
        CriterionKind::TypeTwoHalfTurnReflection => type_two_half_turn_reflection_transforms(&poly, f),
    }
}

fn invariant(msg: &str) -> TilingError {
    TilingError::InternalInvariantViolated(msg.to_string())
}

fn vec_between(poly: &Polygon, from: usize, to: usize) -> Vec2 {
    vertex_at(poly, to as i64) - vertex_at(poly, from as i64)
}

fn translation_transforms(_poly: &Polygon, f: &[Factor]) -> Result<Vec<Transform>, TilingError> {
    let half_count = f.len() / 2;
    if !(half_count == 2 || half_count == 3) || f.len() != half_count * 2 {
        return Err(invariant("translation factorization must have 4 or 6 factors"));
    }
    let half = &f[..half_count];
    let u = content_vector(&half[0].content) + content_vector(&half[1].content);
    let v = if half_count == 3 {
        content_vector(&half[1].content) + content_vector(&half[2].content)
    } else {
        content_vector(&half[1].content)
    };
    Ok(vec![
        Transform::translate(u),
        Transform::translate(v),
        Transform::translate(v - u),
        Transform::translate(-u),
        Transform::translate(-v),
        Transform::translate(u - v),
    ])
}

fn half_turn_transforms(poly: &Polygon, f: &[Factor]) -> Result<Vec<Transform>, TilingError> {
    if f.len() != 6 {
        return Err(invariant("half-turn factorization must have 6 factors"));
    }
    let t = vec_between(poly, f[0].start, f[3].finish);
    let mut out = vec![Transform::translate(t), Transform::translate(-t)];
    for &i in &[1usize, 2, 4, 5] {
        let next = &f[(i + 1) % 6];
        let pivot = vertex_index(f[i].start);
        let then_translate = vec_between(poly, f[i].start, next.start);
        out.push(Transform::rotate(180, pivot, then_translate));
    }
    debug!("half-turn isometry builder: {} transforms", out.len());
    Ok(out)
}

fn quarter_turn_transforms(poly: &Polygon, f: &[Factor]) -> Result<Vec<Transform>, TilingError> {
    if f.len() != 3 {
        return Err(invariant("quarter-turn factorization must have 3 factors"));
    }
    let (a, b, c) = (&f[0], &f[1], &f[2]);
    let first_angle = if a.is_empty() || is_palindrome(&a.content) { 180 } else { 90 };
    let mut out = Vec::new();

    out.push(Transform::rotate(
        first_angle,
        vertex_index(a.start),
        vec_between(poly, a.start, b.start),
    ));

    let after_b = if c.is_empty() { a.start } else { c.start };
    out.push(Transform::rotate(90, vertex_index(b.start), vec_between(poly, b.start, after_b)));

    let b_mid = wrap1(b.start as i64 + (b.len() as i64) / 2, poly.len());
    out.push(Transform::rotate(-90, vertex_index(b_mid), Vec2::new(0, 0)));

    if !c.is_empty() {
        out.push(Transform::rotate(90, vertex_index(c.start), vec_between(poly, c.start, a.start)));
        let c_mid = wrap1(c.start as i64 + (c.len() as i64) / 2, poly.len());
        out.push(Transform::rotate(-90, vertex_index(c_mid), Vec2::new(0, 0)));
    }

    debug!("quarter-turn isometry builder: {} transforms", out.len());
    Ok(out)
}

fn type_one_reflection_transforms(poly: &Polygon, f: &[Factor]) -> Result<Vec<Transform>, TilingError> {
    if f.len() != 6 {
        return Err(invariant("type-1 reflection factorization must have 6 factors"));
    }
    let (a, b, b2, a_hat, c, c2) = (&f[0], &f[1], &f[2], &f[3], &f[4], &f[5]);
    let u = vec_between(poly, a.start, a_hat.finish);
    let theta_b = reflection_angle(&b.content, &b2.content)
        .ok_or_else(|| invariant("type-1 reflection: B/B' are not reflections"))?;
    let theta_c = reflection_angle(&c.content, &c2.content)
        .ok_or_else(|| invariant("type-1 reflection: C/C' are not reflections"))?;
    Ok(vec![
        Transform::translate(u),
        Transform::translate(-u),
        Transform::mirror(theta_b, vertex_index(b.start), Vec2::new(0, 0)),
        Transform::mirror(theta_b, vertex_index(b2.finish), Vec2::new(0, 0)),
        Transform::mirror(theta_c, vertex_index(c.start), Vec2::new(0, 0)),
        Transform::mirror(theta_c, vertex_index(c2.finish), Vec2::new(0, 0)),
    ])
}

fn type_two_reflection_transforms(poly: &Polygon, f: &[Factor]) -> Result<Vec<Transform>, TilingError> {
    if f.len() != 6 {
        return Err(invariant("type-2 reflection factorization must have 6 factors"));
    }
    let (a, _b, c, a_hat, c2, b2) = (&f[0], &f[1], &f[2], &f[3], &f[4], &f[5]);
    let u = vec_between(poly, a.start, a_hat.finish);
    let theta = reflection_angle(&c.content, &c2.content)
        .ok_or_else(|| invariant("type-2 reflection: C/C' are not reflections"))?;
    let mut out = vec![Transform::translate(u), Transform::translate(-u)];
    for pivot_start in [c.start, b2.start] {
        for target in [a_hat.start, a.start] {
            out.push(Transform::mirror(
                theta,
                vertex_index(pivot_start),
                vec_between(poly, pivot_start, target),
            ));
        }
    }
    Ok(out)
}

fn type_one_half_turn_reflection_transforms(
    poly: &Polygon,
    f: &[Factor],
) -> Result<Vec<Transform>, TilingError> {
    if f.len() != 6 {
        return Err(invariant("type-1 half-turn reflection factorization must have 6 factors"));
    }
    let (a, b, c, a_hat, d, d2) = (&f[0], &f[1], &f[2], &f[3], &f[4], &f[5]);
    let u = vec_between(poly, a.start, a_hat.finish);
    let theta = reflection_angle(&d.content, &d2.content)
        .ok_or_else(|| invariant("type-1 half-turn reflection: D/D' are not reflections"))?;
    Ok(vec![
        Transform::translate(u),
        Transform::translate(-u),
        Transform::rotate(180, vertex_index(b.start), vec_between(poly, b.start, c.start)),
        Transform::rotate(180, vertex_index(c.start), vec_between(poly, c.start, a_hat.start)),
        Transform::mirror(theta, vertex_index(d2.start), vec_between(poly, d2.start, a.start)),
        Transform::mirror(theta, vertex_index(d2.start), vec_between(poly, d2.start, d.start)),
    ])
}

fn type_two_half_turn_reflection_transforms(
    poly: &Polygon,
    f: &[Factor],
) -> Result<Vec<Transform>, TilingError> {
    if f.len() != 6 {
        return Err(invariant("type-2 half-turn reflection factorization must have 6 factors"));
    }
    let (a, b, c, d, b2, d2) = (&f[0], &f[1], &f[2], &f[3], &f[4], &f[5]);
    let theta_b = reflection_angle(&b.content, &b2.content)
        .ok_or_else(|| invariant("type-2 half-turn reflection: B/B' are not reflections"))?;
    let theta_d = reflection_angle(&d.content, &d2.content)
        .ok_or_else(|| invariant("type-2 half-turn reflection: D/D' are not reflections"))?;
    Ok(vec![
        Transform::rotate(180, vertex_index(a.start), vec_between(poly, a.start, b.start)),
        Transform::rotate(180, vertex_index(c.start), vec_between(poly, c.start, d.start)),
        Transform::mirror(theta_b, vertex_index(b.start), vec_between(poly, b.start, c.start)),
        Transform::mirror(theta_b, vertex_index(b2.start), vec_between(poly, b2.start, d2.start)),
        Transform::mirror(theta_d, vertex_index(d.start), vec_between(poly, d.start, b2.start)),
        Transform::mirror(theta_d, vertex_index(d2.start), vec_between(poly, d2.start, a.start)),
    ])
}
