use fixtura_core::{PrimitiveKind, Property, TypeDescriptor};
use fixtura_generate::Fixture;

fn primitive(name: PrimitiveKind) -> TypeDescriptor {
    TypeDescriptor::Primitive { name }
}

fn main() {
    let user = TypeDescriptor::Interface {
        properties: vec![
            Property {
                name: "name".to_string(),
                ty: primitive(PrimitiveKind::String),
            },
            Property {
                name: "age".to_string(),
                ty: primitive(PrimitiveKind::Number),
            },
            Property {
                name: "active".to_string(),
                ty: primitive(PrimitiveKind::Boolean),
            },
            Property {
                name: "signed_up".to_string(),
                ty: primitive(PrimitiveKind::Date),
            },
            Property {
                name: "nicknames".to_string(),
                ty: TypeDescriptor::array_of(primitive(PrimitiveKind::String)),
            },
        ],
    };

    let value = Fixture::of(&user)
        .with_seed(42)
        .with_nested_collection_size(3)
        .generate()
        .expect("generate user fixture");

    let json = serde_json::to_string_pretty(&value.to_json()).expect("render json");
    println!("{json}");
}
