use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fixtura_core::PrimitiveKind;
use rand::{Rng, RngCore};

use crate::registry::PrimitiveFn;
use crate::value::Value;

const TOKEN_LEN: usize = 12;
const TOKEN_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const NUMBER_MAX: i64 = 999_999;
const BIG_INTEGER_MAX: i128 = 999_999_999_999;

/// Fresh copy of the default `kind -> generator` mapping.
///
/// Default policy per kind:
/// - `String`: random uppercase alphanumeric token of length 12
/// - `Symbol`: the same token as an opaque symbol value
/// - `Number`: random integer in `[0, 999_999]`
/// - `BigInteger`: random integer in `[0, 999_999_999_999]`
/// - `Boolean`: uniform coin flip
/// - `Date`: uniformly random timestamp between 2000-01-01 and now
/// - `Default`: same as `String`
pub fn default_generators() -> HashMap<PrimitiveKind, PrimitiveFn> {
    let mut generators: HashMap<PrimitiveKind, PrimitiveFn> = HashMap::new();
    generators.insert(
        PrimitiveKind::String,
        Box::new(|rng| Value::Str(random_token(rng))),
    );
    generators.insert(
        PrimitiveKind::Symbol,
        Box::new(|rng| Value::Symbol(random_token(rng))),
    );
    generators.insert(
        PrimitiveKind::Number,
        Box::new(|rng| Value::Int(rng.random_range(0..=NUMBER_MAX))),
    );
    generators.insert(
        PrimitiveKind::BigInteger,
        Box::new(|rng| Value::BigInt(rng.random_range(0..=BIG_INTEGER_MAX))),
    );
    generators.insert(
        PrimitiveKind::Boolean,
        Box::new(|rng| Value::Bool(rng.random_bool(0.5))),
    );
    generators.insert(
        PrimitiveKind::Date,
        Box::new(|rng| Value::Date(random_timestamp(rng))),
    );
    generators.insert(
        PrimitiveKind::Default,
        Box::new(|rng| Value::Str(random_token(rng))),
    );
    generators
}

fn random_token(rng: &mut dyn RngCore) -> String {
    let chars: Vec<char> = TOKEN_CHARSET.chars().collect();
    let mut token = String::with_capacity(TOKEN_LEN);
    for _ in 0..TOKEN_LEN {
        let idx = rng.random_range(0..chars.len());
        token.push(chars[idx]);
    }
    token
}

fn random_timestamp(rng: &mut dyn RngCore) -> NaiveDateTime {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::default());
    let now = Utc::now().naive_utc();
    let span = (now - start).num_seconds().max(0);
    let offset = rng.random_range(0..=span);
    start + Duration::seconds(offset)
}
