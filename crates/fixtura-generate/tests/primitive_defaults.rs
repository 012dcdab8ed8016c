use chrono::{NaiveDate, Utc};
use fixtura_core::{PrimitiveKind, Property, TypeDescriptor};
use fixtura_generate::{
    default_generators, Fixture, GenerationError, PrimitiveRegistry, Value,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TOKEN_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[test]
fn mapping_without_boolean_is_rejected_by_name() {
    let mut generators = default_generators();
    generators.remove(&PrimitiveKind::Boolean);

    let err = PrimitiveRegistry::from_generators(generators)
        .err()
        .expect("incomplete mapping must be rejected");
    assert!(matches!(&err, GenerationError::IncompleteRegistry(missing)
        if missing == &[PrimitiveKind::Boolean]));
    assert!(err.to_string().contains("Boolean"));
}

#[test]
fn boolean_hits_both_values_over_1000_trials() {
    let registry = PrimitiveRegistry::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut trues = 0_u32;
    let mut falses = 0_u32;
    for _ in 0..1000 {
        match registry
            .generate(PrimitiveKind::Boolean, &mut rng)
            .expect("generate boolean")
        {
            Value::Bool(true) => trues += 1,
            Value::Bool(false) => falses += 1,
            other => panic!("boolean policy produced {other:?}"),
        }
    }
    assert!(trues > 0, "no true drawn in 1000 trials");
    assert!(falses > 0, "no false drawn in 1000 trials");
}

#[test]
fn string_token_is_twelve_uppercase_alphanumerics() {
    let registry = PrimitiveRegistry::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    for _ in 0..100 {
        let value = registry
            .generate(PrimitiveKind::String, &mut rng)
            .expect("generate string");
        let Value::Str(token) = value else {
            panic!("string policy must produce a string");
        };
        assert_eq!(token.len(), 12);
        assert!(token.chars().all(|c| TOKEN_CHARSET.contains(c)));
    }
}

#[test]
fn symbol_wraps_a_token_as_an_opaque_value() {
    let registry = PrimitiveRegistry::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    let value = registry
        .generate(PrimitiveKind::Symbol, &mut rng)
        .expect("generate symbol");
    let Value::Symbol(token) = value else {
        panic!("symbol policy must produce a symbol");
    };
    assert_eq!(token.len(), 12);
}

#[test]
fn numeric_policies_stay_in_range() {
    let registry = PrimitiveRegistry::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(29);

    for _ in 0..1000 {
        let number = registry
            .generate(PrimitiveKind::Number, &mut rng)
            .expect("generate number");
        let Value::Int(value) = number else {
            panic!("number policy must produce an integer");
        };
        assert!((0..=999_999).contains(&value));

        let big = registry
            .generate(PrimitiveKind::BigInteger, &mut rng)
            .expect("generate big integer");
        let Value::BigInt(value) = big else {
            panic!("big integer policy must produce a big integer");
        };
        assert!((0..=999_999_999_999_i128).contains(&value));
    }
}

#[test]
fn date_falls_between_2000_and_now() {
    let registry = PrimitiveRegistry::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let floor = NaiveDate::from_ymd_opt(2000, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");

    for _ in 0..100 {
        let value = registry
            .generate(PrimitiveKind::Date, &mut rng)
            .expect("generate date");
        let Value::Date(timestamp) = value else {
            panic!("date policy must produce a timestamp");
        };
        assert!(timestamp >= floor);
        assert!(timestamp <= Utc::now().naive_utc() + chrono::Duration::minutes(1));
    }
}

#[test]
fn default_kind_matches_string_policy() {
    let registry = PrimitiveRegistry::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(37);

    let value = registry
        .generate(PrimitiveKind::Default, &mut rng)
        .expect("generate default");
    let Value::Str(token) = value else {
        panic!("default policy must produce a string");
    };
    assert_eq!(token.len(), 12);
}

#[test]
fn custom_string_generator_drives_record_fields() {
    const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

    let mut generators = default_generators();
    generators.insert(
        PrimitiveKind::String,
        Box::new(|rng| {
            let idx = rng.random_range(0..NAMES.len());
            Value::Str(NAMES[idx].to_string())
        }),
    );
    let registry = PrimitiveRegistry::from_generators(generators).expect("complete mapping");

    let descriptor = TypeDescriptor::Interface {
        properties: vec![
            Property {
                name: "name".to_string(),
                ty: TypeDescriptor::Primitive {
                    name: PrimitiveKind::String,
                },
            },
            Property {
                name: "age".to_string(),
                ty: TypeDescriptor::Primitive {
                    name: PrimitiveKind::Number,
                },
            },
        ],
    };

    let value = Fixture::of(&descriptor)
        .with_generators(registry)
        .with_seed(41)
        .generate()
        .expect("generate with custom registry");
    let record = value.as_record().expect("record value");
    let name = record["name"].as_str().expect("string field");
    assert!(NAMES.contains(&name));
    assert!(record["age"].as_i64().is_some(), "default number policy kept");
}
